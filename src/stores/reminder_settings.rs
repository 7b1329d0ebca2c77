use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::copy;

/// Browser notification permission, as seen by the settings panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionState {
    /// The user has not been asked yet (`"default"` in the browser)
    Unset,
    Granted,
    Denied,
}

impl Default for PermissionState {
    fn default() -> Self {
        PermissionState::Unset
    }
}

impl PermissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionState::Unset => "default",
            PermissionState::Granted => "granted",
            PermissionState::Denied => "denied",
        }
    }

    /// Parse the browser's permission string. Unknown values fall back to `Unset`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "granted" => PermissionState::Granted,
            "denied" => PermissionState::Denied,
            _ => PermissionState::Unset,
        }
    }

    pub fn status(&self) -> PermissionStatus {
        match self {
            PermissionState::Granted => PermissionStatus {
                label: "Allowed",
                color_class: "text-green-600",
            },
            PermissionState::Denied => PermissionStatus {
                label: "Blocked",
                color_class: "text-red-600",
            },
            PermissionState::Unset => PermissionStatus {
                label: "Not set",
                color_class: "text-gray-600",
            },
        }
    }
}

/// Label and color for the permission badge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PermissionStatus {
    pub label: &'static str,
    pub color_class: &'static str,
}

/// Component-local state of the reminder settings panel
///
/// Created on mount and dropped on unmount. Nothing here is persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ReminderSettings {
    pub permission: PermissionState,
    /// Raw flag. Read it through [`ReminderSettings::is_active`] for display.
    pub notifications_enabled: bool,
    /// "HH:MM" straight from the time input, unvalidated
    pub reminder_time: String,
    pub is_requesting: bool,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            permission: PermissionState::Unset,
            notifications_enabled: false,
            reminder_time: copy::DEFAULT_REMINDER_TIME.to_string(),
            is_requesting: false,
        }
    }
}

impl ReminderSettings {
    pub fn with_permission(permission: PermissionState) -> Self {
        Self {
            permission,
            ..Self::default()
        }
    }

    pub fn is_granted(&self) -> bool {
        self.permission == PermissionState::Granted
    }

    /// Value the toggle shows: never on without granted permission
    pub fn is_active(&self) -> bool {
        self.notifications_enabled && self.is_granted()
    }

    pub fn toggle_disabled(&self) -> bool {
        !self.is_granted()
    }

    pub fn show_time_picker(&self) -> bool {
        self.is_active()
    }

    pub fn show_request_button(&self) -> bool {
        !self.is_granted()
    }

    /// Once denied, only the browser settings can re-enable the prompt
    pub fn request_button_disabled(&self) -> bool {
        self.is_requesting || self.permission == PermissionState::Denied
    }

    pub fn request_button_label(&self) -> &'static str {
        if self.is_requesting {
            copy::REQUESTING_LABEL
        } else {
            copy::REQUEST_BUTTON_LABEL
        }
    }

    pub fn show_denied_help(&self) -> bool {
        self.permission == PermissionState::Denied
    }
}

/// Somewhere the panel state lives
///
/// Implemented for a bare [`ReminderSettings`] and for the Dioxus signal the
/// panel owns, so the operations in `permission_gate` run the same way in
/// both places.
pub trait SettingsCell {
    fn read_with<R>(&self, f: impl FnOnce(&ReminderSettings) -> R) -> R;
    fn update<R>(&mut self, f: impl FnOnce(&mut ReminderSettings) -> R) -> R;
}

impl SettingsCell for ReminderSettings {
    fn read_with<R>(&self, f: impl FnOnce(&ReminderSettings) -> R) -> R {
        f(self)
    }

    fn update<R>(&mut self, f: impl FnOnce(&mut ReminderSettings) -> R) -> R {
        f(self)
    }
}

impl SettingsCell for Signal<ReminderSettings> {
    // peek() so async handlers don't subscribe to the signal
    fn read_with<R>(&self, f: impl FnOnce(&ReminderSettings) -> R) -> R {
        f(&self.peek())
    }

    fn update<R>(&mut self, f: impl FnOnce(&mut ReminderSettings) -> R) -> R {
        let mut settings = self.write();
        f(&mut settings)
    }
}
