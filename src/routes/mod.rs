use dioxus::prelude::*;

pub mod settings;

use settings::Settings;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Settings {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-background transition-colors",
            header {
                class: "border-b border-border",
                div {
                    class: "max-w-xl mx-auto px-4 py-3 flex items-center gap-2",
                    span { class: "text-xl", "🌤️" }
                    h1 {
                        class: "text-lg font-bold",
                        "Mind Weather"
                    }
                }
            }
            main {
                class: "max-w-xl mx-auto px-4 py-6",
                Outlet::<Route> {}
            }
        }
    }
}
