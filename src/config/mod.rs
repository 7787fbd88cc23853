//! Configuration module

mod site;

pub use site::HighlightConfig;
pub use site::PageConfig;
pub use site::SiteConfig;
pub use site::BASE_PATH_ENV;
