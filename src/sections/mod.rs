// Landing page sections, rendered in the order App composes them.

mod about;
mod contact;
mod footer;
mod hero;
mod nav;
mod pricing;
mod process;
mod services;
mod social_proof;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use pricing::Pricing;
pub use process::Process;
pub use services::Services;
pub use social_proof::SocialProof;
