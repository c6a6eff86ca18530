use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn AccessDenied() -> Element {
    rsx!(
        Title { "Acceso denegado | LogiRefrigeración" }
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl", "Acceso denegado" }
            p { "Su rol no tiene permiso para ver esta sección." }
            Link { to: Route::Dashboard {}, class: "btn btn-primary", "Volver al inicio" }
        }
    )
}
