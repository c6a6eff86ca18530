use dioxus::prelude::*;

#[component]
pub fn ErrorAlert(message: String, on_close: Option<EventHandler<()>>) -> Element {
    rsx!(
        div { role: "alert", class: "alert alert-error",
            span { "{message}" }
            if let Some(on_close) = on_close {
                button {
                    class: "btn btn-sm btn-ghost",
                    onclick: move |_| on_close.call(()),
                    "Cerrar"
                }
            }
        }
    )
}

/// Blocking dialog that must be acknowledged.
#[component]
pub fn MessageModal(title: String, message: String, on_close: EventHandler<()>) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "{title}" }
                p { class: "py-4", "{message}" }
                div { class: "modal-action",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_close.call(()),
                        "Aceptar"
                    }
                }
            }
        }
    )
}
