use dioxus::prelude::*;

use crate::components::NotificationSettings;

#[component]
pub fn Settings() -> Element {
    rsx! {
        div {
            class: "bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6",
            h2 {
                class: "text-xl font-semibold text-gray-900 dark:text-white mb-4",
                "🔔 Notifications"
            }
            NotificationSettings {}
        }
    }
}
