use const_format::concatcp;

pub mod payload;
pub mod routing;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod error;

/// Reserved for offline support, nothing reads or writes it yet
pub const CACHE_NAME: &str = "shamrock-v1";

pub const STATIC_BASE_PATH: &str = "/static";

/// Icon attached to every displayed notification
pub const NOTIFICATION_ICON_PATH: &str = concatcp!(STATIC_BASE_PATH, "/icon-192.png");

/// Page a notification click navigates to
pub const TABLES_PATH: &str = "/tables";

pub const DEFAULT_NOTIFICATION_TITLE: &str = "Shamrock";
pub const DEFAULT_NOTIFICATION_BODY: &str = "You have a new notification";
