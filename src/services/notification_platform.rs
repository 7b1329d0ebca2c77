//! Platform notification capability
//!
//! The settings panel only needs four things from the browser: whether
//! notifications exist at all, the current permission, the async permission
//! prompt and a way to show a notification. `NotificationPlatform` is that
//! seam; `BrowserNotifications` is the real implementation on top of
//! `web_sys::Notification`.

use async_trait::async_trait;

use crate::stores::reminder_settings::PermissionState;
use crate::utils::copy;
use crate::utils::errors::NotificationError;

/// A notification ready to be displayed
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub icon: String,
}

impl NotificationContent {
    pub fn new(body: &str) -> Self {
        Self {
            title: copy::APP_TITLE.to_string(),
            body: body.to_string(),
            icon: copy::NOTIFICATION_ICON.to_string(),
        }
    }

    /// Sent once, right after permission is granted
    pub fn setup_success() -> Self {
        Self::new(copy::SUCCESS_BODY)
    }

    /// Sent by the "Test" button
    pub fn test_reminder() -> Self {
        Self::new(copy::TEST_BODY)
    }
}

#[async_trait(?Send)]
pub trait NotificationPlatform {
    /// Whether the platform exposes a notification capability at all
    fn is_supported(&self) -> bool;

    fn current_permission(&self) -> PermissionState;

    /// Show the native permission prompt and wait for the user's answer
    async fn request_permission(&self) -> Result<PermissionState, NotificationError>;

    fn show(&self, notification: &NotificationContent) -> Result<(), NotificationError>;

    /// Blocking user-facing alert
    fn alert(&self, message: &str);
}

/// `NotificationPlatform` backed by the browser's `Notification` API
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNotifications;

#[cfg(target_arch = "wasm32")]
fn browser_window() -> Result<web_sys::Window, NotificationError> {
    web_sys::window().ok_or(NotificationError::NoWindow)
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl NotificationPlatform for BrowserNotifications {
    fn is_supported(&self) -> bool {
        use wasm_bindgen::JsValue;

        match browser_window() {
            Ok(window) => js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("Notification"))
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    fn current_permission(&self) -> PermissionState {
        use web_sys::{Notification, NotificationPermission};

        match Notification::permission() {
            NotificationPermission::Granted => PermissionState::Granted,
            NotificationPermission::Denied => PermissionState::Denied,
            _ => PermissionState::Unset,
        }
    }

    async fn request_permission(&self) -> Result<PermissionState, NotificationError> {
        use wasm_bindgen_futures::JsFuture;

        let promise = web_sys::Notification::request_permission()?;
        let result = JsFuture::from(promise).await?;

        let value = result
            .as_string()
            .ok_or_else(|| NotificationError::UnexpectedPermission(format!("{:?}", result)))?;

        Ok(PermissionState::from_str(&value))
    }

    fn show(&self, notification: &NotificationContent) -> Result<(), NotificationError> {
        use web_sys::{Notification, NotificationOptions};

        let options = NotificationOptions::new();
        options.set_body(&notification.body);
        options.set_icon(&notification.icon);

        Notification::new_with_options(&notification.title, &options)?;
        Ok(())
    }

    fn alert(&self, message: &str) {
        let result = browser_window().and_then(|window| {
            window.alert_with_message(message).map_err(NotificationError::from)
        });

        if let Err(e) = result {
            log::warn!("Failed to show alert '{}': {}", message, e);
        }
    }
}

// Off the browser there is no notification capability to talk to.
#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl NotificationPlatform for BrowserNotifications {
    fn is_supported(&self) -> bool {
        false
    }

    fn current_permission(&self) -> PermissionState {
        PermissionState::Unset
    }

    async fn request_permission(&self) -> Result<PermissionState, NotificationError> {
        Err(NotificationError::Unsupported)
    }

    fn show(&self, _notification: &NotificationContent) -> Result<(), NotificationError> {
        Err(NotificationError::Unsupported)
    }

    fn alert(&self, message: &str) {
        log::warn!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_content() {
        let success = NotificationContent::setup_success();
        assert_eq!(success.title, "Mind Weather");
        assert_eq!(success.body, copy::SUCCESS_BODY);
        assert_eq!(success.icon, "/favicon.ico");

        let test = NotificationContent::test_reminder();
        assert_eq!(test.body, copy::TEST_BODY);
        assert_eq!(test.title, success.title);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_browser_platform_unsupported_off_wasm() {
        let platform = BrowserNotifications;
        assert!(!platform.is_supported());
        assert_eq!(platform.current_permission(), PermissionState::Unset);

        let result = futures::executor::block_on(platform.request_permission());
        assert_eq!(result, Err(NotificationError::Unsupported));
        assert_eq!(
            platform.show(&NotificationContent::test_reminder()),
            Err(NotificationError::Unsupported)
        );
    }
}
