use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{ErrorAlert, Page},
    error::ClientError,
    hooks::{use_api, use_session},
    resources::fetch_dashboard,
};

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let api = use_api();

    let summary = use_resource(move || {
        let api = api.clone();
        let current = session.read().session().cloned();
        async move {
            let current = current.ok_or(ClientError::SessionRequired)?;
            fetch_dashboard(&api, &current).await
        }
    });

    rsx!(
        Title { "Inicio | LogiRefrigeración" }
        Page { class: "flex flex-col gap-4",
            h1 { class: "text-2xl font-bold", "Inicio" }
            match &*summary.read_unchecked() {
                Some(Ok(summary)) => rsx!(
                    div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4",
                        SummaryCard { label: "Freezers", value: summary.total_freezers }
                        SummaryCard { label: "Disponibles", value: summary.available_freezers }
                        SummaryCard { label: "Asignados", value: summary.assigned_freezers }
                        SummaryCard { label: "En mantenimiento", value: summary.in_maintenance_freezers }
                        SummaryCard { label: "Clientes", value: summary.total_clients }
                        SummaryCard { label: "Mantenimientos pendientes", value: summary.pending_maintenance }
                        SummaryCard { label: "Eventos de hoy", value: summary.events_today }
                    }
                ),
                Some(Err(err)) => rsx!(ErrorAlert { message: err.user_message() }),
                None => rsx!(
                    div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4",
                        for i in 0..4 {
                            div { key: "{i}", class: "skeleton h-24 w-full" }
                        }
                    }
                ),
            }
        }
    )
}

#[component]
fn SummaryCard(label: &'static str, value: u64) -> Element {
    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                p { class: "text-sm opacity-70", "{label}" }
                p { class: "text-3xl font-semibold", "{value}" }
            }
        }
    )
}
