use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{CopyButton, ListView, Page},
    hooks::{use_list, use_session, ListHandle},
    resources::{
        FreezerEdit, FreezerList, FreezerMaintenanceHistory, RowAction, FREEZER_STATUSES,
        FREEZER_TYPES,
    },
    router::Route,
    session::Role,
};

#[component]
pub fn Freezers() -> Element {
    let list = use_list(FreezerList);
    let session = use_session();
    let mut assigning = use_signal(|| None::<i64>);
    let mut editing = use_signal(|| None::<i64>);

    let is_admin = session.read().role() == Some(Role::Administrator);

    let row_actions = use_callback(move |id: i64| {
        let (assigned, serial) = {
            let state = list.state();
            let state = state.read();
            let assigned = state
                .rows()
                .iter()
                .any(|freezer| freezer.id == id && freezer.client_id.is_some());
            (assigned, FreezerList.serial_number(state.rows(), id))
        };

        rsx!(
            if let Some(serial) = serial {
                CopyButton { text: serial, label: "Copiar serie" }
            }
            Link {
                to: Route::FreezerMaintenance { id },
                class: "btn btn-xs btn-ghost",
                "Historial"
            }
            if assigned {
                button {
                    class: "btn btn-xs btn-outline",
                    onclick: move |_| list.perform(RowAction::UnassignFreezer { freezer_id: id }),
                    "Retirar"
                }
            } else {
                button {
                    class: "btn btn-xs btn-outline",
                    onclick: move |_| assigning.set(Some(id)),
                    "Asignar"
                }
            }
            button {
                class: "btn btn-xs btn-outline",
                onclick: move |_| editing.set(Some(id)),
                "Editar"
            }
            if is_admin {
                button {
                    class: "btn btn-xs btn-error",
                    onclick: move |_| list.perform(RowAction::Delete { id }),
                    "Eliminar"
                }
            }
        )
    });

    rsx!(
        Title { "Freezers | LogiRefrigeración" }
        Page {
            ListView { list, row_actions }
            if let Some(freezer_id) = assigning() {
                AssignModal {
                    list,
                    freezer_id,
                    on_close: move |_| assigning.set(None),
                }
            }
            if let Some(freezer_id) = editing() {
                EditModal {
                    list,
                    freezer_id,
                    on_close: move |_| editing.set(None),
                }
            }
        }
    )
}

#[component]
fn AssignModal(
    list: ListHandle<FreezerList>,
    freezer_id: i64,
    on_close: EventHandler<()>,
) -> Element {
    let mut client_id = use_signal(String::new);
    let mut invalid = use_signal(|| false);

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box flex flex-col gap-3",
                h3 { class: "text-lg font-bold", "Asignar freezer" }
                label { class: "form-control",
                    span { class: "label-text", "ID del cliente" }
                    input {
                        class: "input input-bordered",
                        r#type: "number",
                        value: "{client_id}",
                        oninput: move |evt| client_id.set(evt.value()),
                    }
                }
                if invalid() {
                    p { class: "text-error text-sm", "Ingrese un ID de cliente válido" }
                }
                div { class: "modal-action",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| match client_id.read().trim().parse::<i64>() {
                            Ok(client_id) => {
                                list.perform(RowAction::AssignFreezer { freezer_id, client_id });
                                on_close.call(());
                            }
                            Err(_) => invalid.set(true),
                        },
                        "Asignar"
                    }
                }
            }
        }
    )
}

#[component]
fn EditModal(list: ListHandle<FreezerList>, freezer_id: i64, on_close: EventHandler<()>) -> Element {
    let current = list
        .state()
        .read()
        .rows()
        .iter()
        .find(|freezer| freezer.id == freezer_id)
        .cloned();
    let initial = current.as_ref().map(FreezerEdit::from_row).unwrap_or_default();
    let mut form = use_signal(move || initial);
    let mut invalid = use_signal(|| None::<String>);

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box flex flex-col gap-3",
                h3 { class: "text-lg font-bold", "Editar freezer" }
                label { class: "form-control",
                    span { class: "label-text", "N° Serie" }
                    input {
                        class: "input input-bordered",
                        value: "{form.read().serial_number}",
                        oninput: move |evt| form.write().serial_number = evt.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Modelo" }
                    input {
                        class: "input input-bordered",
                        value: "{form.read().model}",
                        oninput: move |evt| form.write().model = evt.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Marca" }
                    input {
                        class: "input input-bordered",
                        value: "{form.read().brand}",
                        oninput: move |evt| form.write().brand = evt.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Capacidad (litros)" }
                    input {
                        class: "input input-bordered",
                        r#type: "number",
                        value: "{form.read().capacity_liters}",
                        oninput: move |evt| form.write().capacity_liters = evt.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Tipo" }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| form.write().kind = evt.value(),
                        for choice in FREEZER_TYPES.iter() {
                            option {
                                key: "{choice}",
                                value: "{choice}",
                                selected: form.read().kind == *choice,
                                "{choice}"
                            }
                        }
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Estado" }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| form.write().status = evt.value(),
                        for choice in FREEZER_STATUSES.iter() {
                            option {
                                key: "{choice}",
                                value: "{choice}",
                                selected: form.read().status == *choice,
                                "{choice}"
                            }
                        }
                    }
                }
                if let Some(message) = invalid() {
                    p { class: "text-error text-sm", "{message}" }
                }
                div { class: "modal-action",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            let Some(freezer) = current.as_ref() else {
                                on_close.call(());
                                return;
                            };
                            match form().into_action(freezer) {
                                Ok(action) => {
                                    list.perform(action);
                                    on_close.call(());
                                }
                                Err(err) => invalid.set(Some(err.user_message())),
                            }
                        },
                        "Guardar"
                    }
                }
            }
        }
    )
}

#[component]
pub fn FreezerMaintenance(id: i64) -> Element {
    rsx!(
        Title { "Historial de mantenimiento | LogiRefrigeración" }
        Page {
            div { class: "flex flex-col gap-4",
                Link { to: Route::Freezers {}, class: "btn btn-ghost btn-sm w-fit", "« Freezers" }
                // Keyed so a different freezer mounts a fresh list.
                MaintenanceHistory { key: "{id}", freezer_id: id }
            }
        }
    )
}

#[component]
fn MaintenanceHistory(freezer_id: i64) -> Element {
    let list = use_list(FreezerMaintenanceHistory { freezer_id });

    rsx!(ListView { list })
}
