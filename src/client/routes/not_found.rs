use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Página no encontrada | LogiRefrigeración" }
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl", "Página no encontrada" }
            p { class: "text-sm opacity-70", "/{path}" }
            Link { to: Route::Dashboard {}, class: "btn btn-primary", "Volver al inicio" }
        }
    )
}
