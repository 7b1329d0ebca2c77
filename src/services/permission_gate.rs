//! Reminder settings operations
//!
//! Requesting permission, toggling reminders, changing the reminder time and
//! sending a test notification. Every operation works on any [`SettingsCell`]
//! so the panel's signal and a plain value in tests go through the same code.
//!
//! Nothing here schedules anything: the chosen time is only displayed.

use crate::services::notification_platform::{NotificationContent, NotificationPlatform};
use crate::stores::reminder_settings::{PermissionState, ReminderSettings, SettingsCell};
use crate::utils::copy;

/// What the panel has to do after the toggle changed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    /// The flag was written directly
    Applied,
    /// Enabling needs permission first; run [`request_permission`]
    RequestPermission,
}

/// Initial panel state on mount
pub fn initial_settings<P: NotificationPlatform + ?Sized>(platform: &P) -> ReminderSettings {
    if !platform.is_supported() {
        log::info!("Notifications not supported, permission left unset");
        return ReminderSettings::default();
    }

    let permission = platform.current_permission();
    log::info!("Current notification permission: {}", permission.as_str());
    ReminderSettings::with_permission(permission)
}

/// Marks a permission request as in flight until dropped
struct InFlight<'a, S: SettingsCell> {
    settings: &'a mut S,
}

impl<'a, S: SettingsCell> InFlight<'a, S> {
    fn begin(settings: &'a mut S) -> Self {
        settings.update(|s| s.is_requesting = true);
        Self { settings }
    }
}

impl<S: SettingsCell> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        self.settings.update(|s| s.is_requesting = false);
    }
}

/// Ask the platform for notification permission
///
/// On a grant, reminders are switched on and one confirmation notification
/// is shown. Prompt failures are logged and otherwise ignored.
pub async fn request_permission<P, S>(platform: &P, settings: &mut S)
where
    P: NotificationPlatform + ?Sized,
    S: SettingsCell,
{
    if !platform.is_supported() {
        platform.alert(copy::UNSUPPORTED_ALERT);
        return;
    }

    let mut request = InFlight::begin(settings);

    match platform.request_permission().await {
        Ok(permission) => {
            log::info!("Notification permission resolved: {}", permission.as_str());

            let granted = request.settings.update(|s| {
                s.permission = permission;
                if permission == PermissionState::Granted {
                    s.notifications_enabled = true;
                }
                s.is_granted()
            });

            if granted {
                notify(platform, &NotificationContent::setup_success());
            }
        }
        Err(e) => {
            log::error!("Notification permission request failed: {}", e);
        }
    }
}

/// Handle the reminders toggle
///
/// Turning reminders on without permission never writes the flag; the caller
/// gets [`ToggleAction::RequestPermission`] instead.
pub fn toggle<S: SettingsCell>(settings: &mut S, checked: bool) -> ToggleAction {
    let granted = settings.read_with(|s| s.is_granted());

    if checked && !granted {
        return ToggleAction::RequestPermission;
    }

    settings.update(|s| s.notifications_enabled = checked);
    ToggleAction::Applied
}

pub fn set_reminder_time<S: SettingsCell>(settings: &mut S, value: String) {
    settings.update(|s| s.reminder_time = value);
}

/// Fire one test notification. Returns whether anything was sent.
pub fn send_test<P, S>(platform: &P, settings: &S) -> bool
where
    P: NotificationPlatform + ?Sized,
    S: SettingsCell,
{
    if !settings.read_with(|s| s.is_granted()) {
        return false;
    }

    notify(platform, &NotificationContent::test_reminder());
    true
}

fn notify<P: NotificationPlatform + ?Sized>(platform: &P, notification: &NotificationContent) {
    if let Err(e) = platform.show(notification) {
        log::warn!("Failed to show notification: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::NotificationError;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct MockPlatform {
        supported: bool,
        permission: Cell<PermissionState>,
        prompt_result: Result<PermissionState, NotificationError>,
        prompts: Cell<usize>,
        shown: RefCell<Vec<NotificationContent>>,
        alerts: RefCell<Vec<String>>,
    }

    impl MockPlatform {
        fn resolving(result: Result<PermissionState, NotificationError>) -> Self {
            Self {
                supported: true,
                permission: Cell::new(PermissionState::Unset),
                prompt_result: result,
                prompts: Cell::new(0),
                shown: RefCell::new(Vec::new()),
                alerts: RefCell::new(Vec::new()),
            }
        }

        fn unsupported() -> Self {
            Self {
                supported: false,
                ..Self::resolving(Ok(PermissionState::Granted))
            }
        }

        fn with_current(self, permission: PermissionState) -> Self {
            self.permission.set(permission);
            self
        }

        fn shown_bodies(&self) -> Vec<String> {
            self.shown.borrow().iter().map(|n| n.body.clone()).collect()
        }
    }

    #[async_trait(?Send)]
    impl NotificationPlatform for MockPlatform {
        fn is_supported(&self) -> bool {
            self.supported
        }

        fn current_permission(&self) -> PermissionState {
            self.permission.get()
        }

        async fn request_permission(&self) -> Result<PermissionState, NotificationError> {
            self.prompts.set(self.prompts.get() + 1);
            let result = self.prompt_result.clone();
            if let Ok(permission) = &result {
                self.permission.set(*permission);
            }
            result
        }

        fn show(&self, notification: &NotificationContent) -> Result<(), NotificationError> {
            self.shown.borrow_mut().push(notification.clone());
            Ok(())
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_initial_settings_reads_permission() {
        let platform = MockPlatform::resolving(Ok(PermissionState::Granted))
            .with_current(PermissionState::Denied);
        let settings = initial_settings(&platform);
        assert_eq!(settings.permission, PermissionState::Denied);
        assert!(!settings.notifications_enabled);

        let unsupported = MockPlatform::unsupported().with_current(PermissionState::Granted);
        assert_eq!(initial_settings(&unsupported).permission, PermissionState::Unset);
    }

    #[test]
    fn test_unsupported_platform_alerts_without_changes() {
        for permission in [
            PermissionState::Unset,
            PermissionState::Granted,
            PermissionState::Denied,
        ] {
            let platform = MockPlatform::unsupported();
            let mut settings = ReminderSettings::with_permission(permission);
            let before = settings.clone();

            block_on(request_permission(&platform, &mut settings));

            assert_eq!(settings, before);
            assert_eq!(platform.prompts.get(), 0);
            assert_eq!(*platform.alerts.borrow(), vec![copy::UNSUPPORTED_ALERT.to_string()]);
            assert!(platform.shown.borrow().is_empty());
        }
    }

    #[test]
    fn test_granted_enables_and_notifies_once() {
        let platform = MockPlatform::resolving(Ok(PermissionState::Granted));
        let mut settings = ReminderSettings::default();

        block_on(request_permission(&platform, &mut settings));

        assert_eq!(settings.permission, PermissionState::Granted);
        assert!(settings.notifications_enabled);
        assert!(!settings.is_requesting);
        assert_eq!(platform.shown_bodies(), vec![copy::SUCCESS_BODY.to_string()]);
        assert!(platform.alerts.borrow().is_empty());
    }

    #[test]
    fn test_denied_keeps_reminders_off() {
        let platform = MockPlatform::resolving(Ok(PermissionState::Denied));
        let mut settings = ReminderSettings::default();

        block_on(request_permission(&platform, &mut settings));

        assert_eq!(settings.permission, PermissionState::Denied);
        assert!(!settings.notifications_enabled);
        assert!(!settings.is_requesting);
        assert!(settings.request_button_disabled());
        assert!(settings.show_denied_help());
        assert!(platform.shown.borrow().is_empty());
    }

    #[test]
    fn test_prompt_failure_is_swallowed() {
        let platform = MockPlatform::resolving(Err(NotificationError::Js("dismissed".into())));
        let mut settings = ReminderSettings::default();

        block_on(request_permission(&platform, &mut settings));

        assert_eq!(settings.permission, PermissionState::Unset);
        assert!(!settings.is_requesting);
        assert!(!settings.notifications_enabled);
        assert!(platform.alerts.borrow().is_empty());
        assert!(platform.shown.borrow().is_empty());
    }

    #[test]
    fn test_in_flight_guard_resets_flag() {
        let mut settings = ReminderSettings::default();
        {
            let request = InFlight::begin(&mut settings);
            assert!(request.settings.read_with(|s| s.is_requesting));
        }
        assert!(!settings.is_requesting);
    }

    #[test]
    fn test_toggle_on_without_permission_requests() {
        for permission in [PermissionState::Unset, PermissionState::Denied] {
            let mut settings = ReminderSettings::with_permission(permission);
            assert_eq!(toggle(&mut settings, true), ToggleAction::RequestPermission);
            assert!(!settings.notifications_enabled);
        }
    }

    #[test]
    fn test_toggle_applies_directly() {
        let mut granted = ReminderSettings::with_permission(PermissionState::Granted);
        assert_eq!(toggle(&mut granted, true), ToggleAction::Applied);
        assert!(granted.is_active());
        assert_eq!(toggle(&mut granted, false), ToggleAction::Applied);
        assert!(!granted.notifications_enabled);

        // Switching off never needs permission
        let mut unset = ReminderSettings {
            notifications_enabled: true,
            ..ReminderSettings::default()
        };
        assert_eq!(toggle(&mut unset, false), ToggleAction::Applied);
        assert!(!unset.notifications_enabled);
    }

    #[test]
    fn test_set_reminder_time_is_unvalidated() {
        let mut settings = ReminderSettings::default();
        set_reminder_time(&mut settings, "06:45".to_string());
        assert_eq!(settings.reminder_time, "06:45");
        set_reminder_time(&mut settings, String::new());
        assert_eq!(settings.reminder_time, "");
    }

    #[test]
    fn test_send_test_only_when_granted() {
        for (permission, expected) in [
            (PermissionState::Unset, false),
            (PermissionState::Denied, false),
            (PermissionState::Granted, true),
        ] {
            let platform = MockPlatform::resolving(Ok(permission));
            let settings = ReminderSettings::with_permission(permission);

            assert_eq!(send_test(&platform, &settings), expected);
            assert_eq!(platform.shown.borrow().len(), expected as usize);
        }

        let platform = MockPlatform::resolving(Ok(PermissionState::Granted));
        let settings = ReminderSettings::with_permission(PermissionState::Granted);
        send_test(&platform, &settings);
        assert_eq!(platform.shown_bodies(), vec![copy::TEST_BODY.to_string()]);
    }

    #[test]
    fn test_first_time_setup_flow() {
        let platform = MockPlatform::resolving(Ok(PermissionState::Granted));
        let mut settings = initial_settings(&platform);
        assert_eq!(settings.permission, PermissionState::Unset);
        assert!(settings.show_request_button());
        assert!(!settings.show_time_picker());

        block_on(request_permission(&platform, &mut settings));

        assert!(settings.is_active());
        assert!(settings.show_time_picker());
        assert!(!settings.show_request_button());
        assert_eq!(settings.reminder_time, "20:00");
    }

    #[test]
    fn test_toggle_routes_through_request() {
        let platform = MockPlatform::resolving(Ok(PermissionState::Granted));
        let mut settings = ReminderSettings::default();

        if toggle(&mut settings, true) == ToggleAction::RequestPermission {
            block_on(request_permission(&platform, &mut settings));
        }

        assert_eq!(platform.prompts.get(), 1);
        assert!(settings.is_active());
    }

    #[test]
    fn test_mount_with_denied_permission() {
        let platform = MockPlatform::resolving(Ok(PermissionState::Denied))
            .with_current(PermissionState::Denied);
        let settings = initial_settings(&platform);

        assert!(settings.show_request_button());
        assert!(settings.request_button_disabled());
        assert!(settings.toggle_disabled());
        assert!(settings.show_denied_help());
    }
}
