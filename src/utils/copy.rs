/// Fixed copy and constants for the reminder settings panel
///
/// Nothing here is configurable at runtime. The reminder time never leaves
/// the panel, so the "daily at HH:MM" wording is descriptive only.

/// Title shown on every notification
pub const APP_TITLE: &str = "Mind Weather";

/// Icon reference attached to every notification
pub const NOTIFICATION_ICON: &str = "/favicon.ico";

/// Reminder time selected on mount (24-hour "HH:MM")
pub const DEFAULT_REMINDER_TIME: &str = "20:00";

/// Body of the notification fired right after permission is granted
pub const SUCCESS_BODY: &str = "Notifications set up successfully! 🎉";

/// Body of the notification fired by the "Test" button
pub const TEST_BODY: &str = "Record today's feelings! ✨";

/// Blocking alert shown when the browser has no notification support
pub const UNSUPPORTED_ALERT: &str = "This browser does not support notifications.";

pub const REQUEST_BUTTON_LABEL: &str = "Request notification permission";
pub const REQUESTING_LABEL: &str = "Requesting...";
pub const DENIED_HELP: &str = "Please allow notifications in your browser settings.";

/// Tips listed in the "About reminders" box
pub const REMINDER_TIPS: &[&str] = &[
    "We'll remind you to write in your journal at the time you choose",
    "Helps you keep your streak going",
    "Build a habit of recording your emotions",
    "You can turn reminders off in settings at any time",
];

/// Sentence echoing the chosen reminder time
pub fn reminder_sentence(time: &str) -> String {
    format!("You'll get a reminder every day at {}", time)
}
