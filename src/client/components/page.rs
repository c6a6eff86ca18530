use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "min-h-screen pt-[64px] lg:pl-64 p-4 {class}",
            {children}
        }
    )
}

/// Neutral placeholder shown while the session resolves.
#[component]
pub fn LoadingScreen() -> Element {
    rsx!(
        div {
            class: "min-h-screen flex items-center justify-center",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}
