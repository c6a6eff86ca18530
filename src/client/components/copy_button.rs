use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCopy;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

/// Writes `text` to the system clipboard through `navigator.clipboard`.
fn write_clipboard(text: &str) {
    match web_sys::window() {
        Some(window) => {
            // The returned promise only reports the permission outcome.
            let _ = window.navigator().clipboard().write_text(text);
        }
        None => tracing::warn!("No browser window to copy to the clipboard from"),
    }
}

#[component]
pub fn CopyButton(text: String, label: String) -> Element {
    let mut copied = use_signal(|| false);

    rsx!(
        button {
            class: "btn btn-xs btn-ghost",
            title: "{label}",
            onclick: move |_| {
                write_clipboard(&text);
                copied.set(true);
            },
            Icon {
                width: 12,
                height: 12,
                icon: FaCopy
            }
            if copied() { "Copiado" } else { "{label}" }
        }
    )
}
