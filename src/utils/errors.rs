//! Notification error types
//!
//! Typed errors for the browser notification capability. The settings panel
//! never surfaces these to the user; they only end up in the console log.

use std::fmt;
use wasm_bindgen::JsValue;

/// Errors raised while talking to the platform notification API
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationError {
    /// The platform has no `Notification` capability at all
    Unsupported,
    /// No `window` object (not running in a browser context)
    NoWindow,
    /// A JavaScript exception or rejected promise
    Js(String),
    /// The permission prompt resolved to something other than a string
    UnexpectedPermission(String),
}

impl fmt::Display for NotificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => write!(f, "Notifications are not supported on this platform"),
            Self::NoWindow => write!(f, "No window available"),
            Self::Js(msg) => write!(f, "JavaScript error: {}", msg),
            Self::UnexpectedPermission(value) => {
                write!(f, "Unexpected permission result: {}", value)
            }
        }
    }
}

impl std::error::Error for NotificationError {}

impl From<JsValue> for NotificationError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Js(msg)
    }
}

impl From<&str> for NotificationError {
    fn from(s: &str) -> Self {
        Self::Js(s.to_string())
    }
}
