//! HTTP request handlers.

pub mod analytics;
pub mod info;
pub mod links;
pub mod redirect;
pub mod shorten;

pub use analytics::analytics_handler;
pub use info::info_handler;
pub use links::{delete_link_handler, list_links_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
