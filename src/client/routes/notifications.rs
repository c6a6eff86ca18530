use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{ErrorAlert, Page},
    hooks::NotificationHandle,
    util::time::format_relative_time,
};

#[component]
pub fn Notifications() -> Element {
    let notifications = use_context::<NotificationHandle>();

    let signal = notifications.state();
    let state = signal.read();
    let unread = state.unread();
    let error = state.error().map(|err| err.user_message());
    let entries: Vec<_> = state
        .notifications()
        .iter()
        .map(|n| {
            (
                n.id,
                n.title.clone(),
                n.message.clone(),
                format_relative_time(&n.created_at),
                n.read,
            )
        })
        .collect();
    drop(state);

    rsx!(
        Title { "Notificaciones | LogiRefrigeración" }
        Page { class: "flex flex-col gap-4",
            h1 { class: "text-2xl font-bold", "Notificaciones" }
            p { class: "text-sm opacity-70", "{unread} sin leer" }
            if let Some(message) = error {
                ErrorAlert { message }
            }
            if entries.is_empty() {
                p { "No hay notificaciones." }
            }
            ul { class: "flex flex-col gap-2",
                for (id, title, message, when, read) in entries {
                    li { key: "{id}",
                        class: if read { "card bg-base-200" } else { "card bg-base-300 border-l-4 border-primary" },
                        div { class: "card-body p-4",
                            div { class: "flex justify-between items-start gap-2",
                                div {
                                    p { class: "font-semibold", "{title}" }
                                    p { class: "text-sm", "{message}" }
                                    p { class: "text-xs opacity-60", "{when}" }
                                }
                                if !read {
                                    button {
                                        class: "btn btn-xs btn-outline",
                                        onclick: move |_| notifications.mark_read(id),
                                        "Marcar como leída"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
