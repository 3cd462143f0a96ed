//! Marketing site components

mod button;
mod cards;
mod footer;
mod header;
mod icon;

pub use button::{button_class, ButtonSize, ButtonVariant, LinkButton};
pub use cards::{FeatureCard, TechCard};
pub use footer::Footer;
pub use header::SiteHeader;
pub use icon::{Icon, IconSvg};
