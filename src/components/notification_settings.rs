use dioxus::prelude::*;

use crate::components::icons::{BellIcon, ClockIcon};
use crate::components::{PermissionBadge, ToggleSwitch};
use crate::hooks::use_notification_settings;
use crate::utils::copy;

/// Daily journaling reminder settings
///
/// The reminder time is only shown back to the user; nothing is scheduled.
#[component]
pub fn NotificationSettings() -> Element {
    let panel = use_notification_settings();
    let settings = panel.settings.read().clone();

    rsx! {
        div {
            class: "space-y-6",

            // Browser permission
            div {
                class: "p-4 bg-gray-50 rounded-lg",
                div {
                    class: "flex items-center justify-between mb-3",
                    div {
                        class: "flex items-center gap-2",
                        BellIcon { class: "w-4 h-4 text-gray-600" }
                        span {
                            class: "text-sm font-medium text-gray-700",
                            "Browser notification permission"
                        }
                    }
                    PermissionBadge { permission: settings.permission }
                }

                if settings.show_request_button() {
                    button {
                        class: "w-full px-3 py-2 text-sm rounded-lg text-white bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-700 hover:to-pink-700 disabled:opacity-50 disabled:cursor-not-allowed transition",
                        disabled: settings.request_button_disabled(),
                        onclick: move |_| panel.request_permission.call(()),
                        "{settings.request_button_label()}"
                    }
                }

                if settings.show_denied_help() {
                    div {
                        class: "text-xs text-gray-600 mt-2",
                        "{copy::DENIED_HELP}"
                    }
                }
            }

            // Reminders switch
            div {
                class: "flex items-center justify-between p-4 bg-gray-50 rounded-lg",
                div {
                    div {
                        class: "flex items-center gap-2 mb-1",
                        BellIcon { class: "w-4 h-4 text-gray-600" }
                        span {
                            class: "text-sm font-medium text-gray-700",
                            "Journal reminders"
                        }
                    }
                    p {
                        class: "text-xs text-gray-600",
                        "We'll remind you to write at the time you choose, every day"
                    }
                }
                ToggleSwitch {
                    checked: settings.is_active(),
                    disabled: settings.toggle_disabled(),
                    on_change: move |checked| panel.toggle.call(checked),
                }
            }

            if settings.show_time_picker() {
                div {
                    class: "p-4 bg-gray-50 rounded-lg",
                    div {
                        class: "flex items-center gap-2 mb-3",
                        ClockIcon { class: "w-4 h-4 text-gray-600" }
                        span {
                            class: "text-sm font-medium text-gray-700",
                            "Reminder time"
                        }
                    }
                    div {
                        class: "flex items-center gap-3",
                        input {
                            r#type: "time",
                            class: "flex-1 p-2 border border-gray-200 rounded-lg focus:ring-2 focus:ring-purple-200 focus:border-purple-300",
                            value: "{settings.reminder_time}",
                            oninput: move |evt| panel.set_time.call(evt.value()),
                        }
                        button {
                            class: "px-3 py-2 text-sm rounded-lg border border-purple-200 text-purple-600 hover:bg-purple-50 transition",
                            onclick: move |_| panel.send_test.call(()),
                            "Test"
                        }
                    }
                    p {
                        class: "text-xs text-gray-600 mt-2",
                        {copy::reminder_sentence(&settings.reminder_time)}
                    }
                }
            }

            // About reminders
            div {
                class: "p-4 bg-gradient-to-r from-blue-50 to-indigo-50 rounded-lg border border-blue-100",
                div {
                    class: "flex items-start gap-3",
                    div { class: "text-lg", "💡" }
                    div {
                        h4 {
                            class: "text-sm font-medium text-gray-800 mb-2",
                            "About reminders"
                        }
                        ul {
                            class: "text-xs text-gray-600 space-y-1",
                            for tip in copy::REMINDER_TIPS.iter() {
                                li { key: "{tip}", "• {tip}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
