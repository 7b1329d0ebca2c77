//! use_notification_settings hook - reminder settings panel state
//!
//! Owns the panel's `ReminderSettings` signal and wires the operations from
//! `services::permission_gate` to event handlers. The platform comes from
//! context (see `main.rs`), so the panel never touches `web_sys` directly.

use dioxus::prelude::*;
use std::rc::Rc;

use crate::services::notification_platform::NotificationPlatform;
use crate::services::permission_gate::{self, ToggleAction};
use crate::stores::reminder_settings::ReminderSettings;

/// Notification platform shared through context
pub type SharedPlatform = Rc<dyn NotificationPlatform>;

/// Return type for the use_notification_settings hook
#[derive(Clone, Copy)]
pub struct UseNotificationSettings {
    pub settings: Signal<ReminderSettings>,
    /// Show the browser permission prompt
    pub request_permission: EventHandler<()>,
    /// Reminders switch changed
    pub toggle: EventHandler<bool>,
    /// Raw value from the time input
    pub set_time: EventHandler<String>,
    pub send_test: EventHandler<()>,
}

impl PartialEq for UseNotificationSettings {
    fn eq(&self, other: &Self) -> bool {
        // Handlers are not compared
        *self.settings.read() == *other.settings.read()
    }
}

/// Spawn a permission request against the panel's signal
fn spawn_request(platform: SharedPlatform, mut settings: Signal<ReminderSettings>) {
    spawn(async move {
        permission_gate::request_permission(platform.as_ref(), &mut settings).await;
    });
}

/// Hook for the reminder settings panel
///
/// # Example
/// ```rust
/// let panel = use_notification_settings();
///
/// button {
///     disabled: panel.settings.read().request_button_disabled(),
///     onclick: move |_| panel.request_permission.call(()),
///     "{panel.settings.read().request_button_label()}"
/// }
/// ```
pub fn use_notification_settings() -> UseNotificationSettings {
    let platform = use_context::<SharedPlatform>();

    // Read the current permission once, on mount
    let settings = use_signal({
        let platform = platform.clone();
        move || permission_gate::initial_settings(platform.as_ref())
    });

    let request_permission = use_callback({
        let platform = platform.clone();
        move |_: ()| spawn_request(platform.clone(), settings)
    });

    let toggle = use_callback({
        let platform = platform.clone();
        move |checked: bool| {
            let mut settings = settings;
            if permission_gate::toggle(&mut settings, checked) == ToggleAction::RequestPermission {
                log::info!("Reminders switched on without permission, requesting it");
                spawn_request(platform.clone(), settings);
            }
        }
    });

    let set_time = use_callback(move |value: String| {
        let mut settings = settings;
        permission_gate::set_reminder_time(&mut settings, value);
    });

    let send_test = use_callback({
        let platform = platform.clone();
        move |_: ()| {
            if !permission_gate::send_test(platform.as_ref(), &settings) {
                log::info!("Test notification skipped, permission not granted");
            }
        }
    });

    UseNotificationSettings {
        settings,
        request_permission,
        toggle,
        set_time,
        send_test,
    }
}
