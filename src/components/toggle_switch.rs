use dioxus::prelude::*;

/// Pill-shaped on/off switch backed by a hidden checkbox
#[component]
pub fn ToggleSwitch(
    checked: bool,
    #[props(default = false)] disabled: bool,
    on_change: EventHandler<bool>,
) -> Element {
    let cursor = if disabled { "cursor-not-allowed opacity-50" } else { "cursor-pointer" };

    rsx! {
        label {
            class: "relative inline-flex items-center {cursor}",
            input {
                r#type: "checkbox",
                class: "sr-only peer",
                role: "switch",
                checked: checked,
                disabled: disabled,
                onchange: move |evt| on_change.call(evt.checked()),
            }
            div {
                class: "w-11 h-6 bg-gray-300 peer-focus:outline-none peer-focus:ring-4 peer-focus:ring-purple-200 rounded-full peer peer-checked:after:translate-x-full peer-checked:after:border-white after:content-[''] after:absolute after:top-[2px] after:left-[2px] after:bg-white after:border-gray-300 after:border after:rounded-full after:h-5 after:w-5 after:transition-all peer-checked:bg-purple-600"
            }
        }
    }
}
