//! Static content tables for the PortIQ landing page.
//!
//! Everything on the page is derived from the constants in this module;
//! sections only map these tables into markup. Keeping the data here means
//! copy edits never touch the render code.

use chrono::{Datelike, Utc};

/// Brand identity used for header/hero theming.
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub gradient_primary: &'static str,
    pub gradient_accent: &'static str,
}

pub const BRAND: Brand = Brand {
    name: "PortIQ",
    tagline: "Smart Digital Growth Navigation",
    description: "PortIQ helps businesses navigate the digital landscape with \
                  data-driven marketing, SEO, and analytics that deliver measurable growth.",
    gradient_primary: "gradient-primary",
    gradient_accent: "gradient-accent",
};

/// Header sizing knobs. Logo size and header padding vary together, so
/// they live in one config value instead of duplicated page variants.
pub struct Layout {
    pub logo_class: &'static str,
    pub header_pad_class: &'static str,
}

pub const LAYOUT: Layout = Layout {
    logo_class: "logo-lg",
    header_pad_class: "nav-pad-regular",
};

#[derive(Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    /// Fragment id, without the leading `#`.
    pub target: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Services", target: "services" },
    NavLink { label: "Packages", target: "packages" },
    NavLink { label: "Process", target: "process" },
    NavLink { label: "About", target: "about" },
    NavLink { label: "Contact", target: "contact" },
];

/// Every section id present on the page. Nav targets must resolve here.
pub const SECTION_IDS: [&str; 6] = ["top", "services", "packages", "process", "about", "contact"];

#[derive(Clone, Copy)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [ServiceCard; 6] = [
    ServiceCard {
        icon: "megaphone",
        title: "Performance Ads",
        description: "ROI-focused campaigns on Google, Meta, and TikTok with proper conversion tracking.",
    },
    ServiceCard {
        icon: "globe",
        title: "SEO & Content",
        description: "Technical SEO, local SEO for Malta, and content that ranks and converts.",
    },
    ServiceCard {
        icon: "chart",
        title: "Analytics & CRO",
        description: "GA4, Tag Manager, Looker Studio dashboards, and A/B testing to lift conversion rate.",
    },
    ServiceCard {
        icon: "users",
        title: "Social & Creative",
        description: "On-brand assets and calendars with UGC and short-form video support.",
    },
    ServiceCard {
        icon: "calendar",
        title: "Marketing Ops",
        description: "Automation, CRM hygiene, lead routing, and consent tracking (GDPR).",
    },
    ServiceCard {
        icon: "rocket",
        title: "Go-to-Market",
        description: "For startups: positioning, ICP, messaging, and launch playbooks.",
    },
];

#[derive(Clone, Copy)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub highlight: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

pub const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Starter",
        price: "€690/mo",
        highlight: "For businesses getting their first funnel in order.",
        features: &[
            "1 paid channel (Google or Meta)",
            "Local SEO foundations",
            "Monthly performance report",
            "Email support",
        ],
        cta: "Start with Starter",
        popular: false,
    },
    PricingTier {
        name: "Growth",
        price: "€1,490/mo",
        highlight: "Our most popular plan for scaling lead flow.",
        features: &[
            "2-3 paid channels with creative testing",
            "SEO & content calendar",
            "GA4 + conversion tracking setup",
            "Bi-weekly strategy calls",
            "Looker Studio dashboard",
        ],
        cta: "Grow with Growth",
        popular: true,
    },
    PricingTier {
        name: "Scale",
        price: "€2,900/mo",
        highlight: "Full-funnel team for aggressive targets.",
        features: &[
            "All channels + CRO program",
            "Dedicated strategist",
            "Marketing automation & CRM ops",
            "Weekly reporting & experiments",
            "Quarterly growth roadmap",
        ],
        cta: "Scale with Scale",
        popular: false,
    },
];

#[derive(Clone, Copy)]
pub struct ProcessStep {
    pub ordinal: u8,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

// Array order is display order; ordinals must stay 1..=4.
pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        ordinal: 1,
        icon: "search",
        title: "Audit",
        description: "We review your funnel, tracking, and channel mix to find the quick wins.",
    },
    ProcessStep {
        ordinal: 2,
        icon: "map",
        title: "Plan",
        description: "A 90-day roadmap with clear targets, budgets, and owners.",
    },
    ProcessStep {
        ordinal: 3,
        icon: "rocket",
        title: "Launch",
        description: "Campaigns, content, and tracking go live with tight feedback loops.",
    },
    ProcessStep {
        ordinal: 4,
        icon: "chart",
        title: "Scale",
        description: "Double down on what works, cut what does not, report it all.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Textarea,
}

impl InputKind {
    /// HTML `type` attribute for single-line kinds.
    pub fn input_type(self) -> &'static str {
        match self {
            InputKind::Email => "email",
            _ => "text",
        }
    }
}

#[derive(Clone, Copy)]
pub struct ContactField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
}

pub const CONTACT_FIELDS: [ContactField; 4] = [
    ContactField { label: "Name", placeholder: "Jane Borg", kind: InputKind::Text },
    ContactField { label: "Email", placeholder: "jane@company.com", kind: InputKind::Email },
    ContactField { label: "Company", placeholder: "Company Ltd.", kind: InputKind::Text },
    ContactField {
        label: "Message",
        placeholder: "Tell us about your goals...",
        kind: InputKind::Textarea,
    },
];

/// Bullet points on the hero lead-capture card.
pub const AUDIT_BULLETS: [&str; 4] = [
    "SEO health & quick wins",
    "Ad account hygiene check (Meta/Google)",
    "Analytics & conversion tracking review",
    "Competitor visibility in Malta",
];

/// Placeholder client names for the social-proof strip.
pub const CLIENTS: [&str; 5] = ["Client One", "Client Two", "Client Three", "Client Four", "Client Five"];

/// Tool chips shown in the about panel.
pub const TOOLS: [&str; 12] = [
    "GA4",
    "Tag Manager",
    "Looker Studio",
    "Google Ads",
    "Meta Ads",
    "TikTok Ads",
    "Search Console",
    "Ahrefs",
    "HubSpot",
    "Mailchimp",
    "Hotjar",
    "Zapier",
];

#[derive(Clone, Copy)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FOOTER_LINKS: [FooterLink; 3] = [
    FooterLink { label: "Privacy", href: "#top" },
    FooterLink { label: "Cookies", href: "#top" },
    FooterLink { label: "Contact", href: "#contact" },
];

/// Current calendar year, read once per render for the footer.
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Pure formatter so tests can pin the year.
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", BRAND.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_resolve_to_section_ids() {
        for link in NAV_LINKS {
            assert!(
                SECTION_IDS.contains(&link.target),
                "nav link '{}' points at missing anchor '#{}'",
                link.label,
                link.target
            );
        }
    }

    #[test]
    fn footer_links_resolve_to_section_ids() {
        for link in FOOTER_LINKS {
            let target = link.href.trim_start_matches('#');
            assert!(SECTION_IDS.contains(&target), "footer link '{}' dangles", link.label);
        }
    }

    #[test]
    fn exactly_one_popular_tier_and_it_is_growth() {
        let popular: Vec<_> = PRICING_TIERS.iter().filter(|t| t.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Growth");
    }

    #[test]
    fn tiers_render_in_starter_growth_scale_order() {
        let names: Vec<_> = PRICING_TIERS.iter().map(|t| t.name).collect();
        assert_eq!(names, ["Starter", "Growth", "Scale"]);
    }

    #[test]
    fn process_ordinals_match_array_position() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.ordinal as usize, i + 1, "step '{}' out of order", step.title);
        }
    }

    #[test]
    fn content_table_cardinalities_are_fixed() {
        assert_eq!(NAV_LINKS.len(), 5);
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(PRICING_TIERS.len(), 3);
        assert_eq!(PROCESS_STEPS.len(), 4);
        assert_eq!(CONTACT_FIELDS.len(), 4);
        assert_eq!(AUDIT_BULLETS.len(), 4);
        assert_eq!(CLIENTS.len(), 5);
        assert_eq!(TOOLS.len(), 12);
        assert_eq!(FOOTER_LINKS.len(), 3);
    }

    #[test]
    fn every_tier_has_features_and_a_cta() {
        for tier in PRICING_TIERS {
            assert!(!tier.features.is_empty(), "tier '{}' lists no features", tier.name);
            assert!(!tier.cta.is_empty());
            assert!(tier.price.starts_with('€'));
        }
    }

    #[test]
    fn contact_fields_cover_the_expected_kinds() {
        assert_eq!(CONTACT_FIELDS[1].kind, InputKind::Email);
        assert_eq!(CONTACT_FIELDS[3].kind, InputKind::Textarea);
        assert_eq!(InputKind::Email.input_type(), "email");
        assert_eq!(InputKind::Text.input_type(), "text");
    }

    #[test]
    fn copyright_line_uses_given_year_and_brand() {
        let line = copyright_line(2026);
        assert!(line.contains("© 2026"));
        assert!(line.contains("PortIQ"));
    }

    #[test]
    fn copyright_line_tracks_current_year() {
        let line = copyright_line(current_year());
        assert!(line.contains(&current_year().to_string()));
    }
}
