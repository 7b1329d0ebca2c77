pub mod use_notification_settings;

pub use use_notification_settings::{use_notification_settings, SharedPlatform};
