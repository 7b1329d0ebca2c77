// UI Components
// Reminder settings panel and the pieces it is built from

pub mod icons;
pub mod notification_settings;
pub mod permission_badge;
pub mod toggle_switch;

pub use notification_settings::NotificationSettings;
pub use permission_badge::PermissionBadge;
pub use toggle_switch::ToggleSwitch;
