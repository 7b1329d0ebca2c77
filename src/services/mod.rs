// Platform access and the operations behind the settings panel

pub mod notification_platform;
pub mod permission_gate;

pub use notification_platform::BrowserNotifications;
