use dioxus::prelude::*;

use crate::components::icons::{AlertCircleIcon, CheckCircleIcon, ShieldIcon};
use crate::stores::reminder_settings::PermissionState;

/// Icon and label for the current notification permission
#[component]
pub fn PermissionBadge(permission: PermissionState) -> Element {
    let status = permission.status();

    rsx! {
        div {
            class: "flex items-center gap-1 {status.color_class}",
            {match permission {
                PermissionState::Granted => rsx! { CheckCircleIcon { class: "w-4 h-4 text-green-500" } },
                PermissionState::Denied => rsx! { AlertCircleIcon { class: "w-4 h-4 text-red-500" } },
                PermissionState::Unset => rsx! { ShieldIcon { class: "w-4 h-4 text-gray-500" } },
            }}
            span {
                class: "text-xs font-medium",
                "{status.label}"
            }
        }
    }
}
