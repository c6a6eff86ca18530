use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{ListView, Page},
    hooks::{use_list, use_session, ListHandle},
    resources::{ClientEdit, ClientList, RowAction, CLIENT_TYPES},
    session::Role,
};

#[component]
pub fn Clients() -> Element {
    let list = use_list(ClientList);
    let session = use_session();
    let mut editing = use_signal(|| None::<i64>);

    let is_admin = session.read().role() == Some(Role::Administrator);

    let row_actions = use_callback(move |id: i64| {
        rsx!(
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
        Title { "Clientes | LogiRefrigeración" }
        Page {
            ListView { list, row_actions }
            if let Some(client_id) = editing() {
                EditModal {
                    list,
                    client_id,
                    on_close: move |_| editing.set(None),
                }
            }
        }
    )
}

#[component]
fn EditModal(list: ListHandle<ClientList>, client_id: i64, on_close: EventHandler<()>) -> Element {
    let current = list
        .state()
        .read()
        .rows()
        .iter()
        .find(|client| client.id == client_id)
        .cloned();
    let initial = current.as_ref().map(ClientEdit::from_row).unwrap_or_default();
    let mut form = use_signal(move || initial);
    let mut invalid = use_signal(|| None::<String>);

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box flex flex-col gap-3",
                h3 { class: "text-lg font-bold", "Editar cliente" }
                label { class: "form-control",
                    span { class: "label-text", "Nombre" }
                    input {
                        class: "input input-bordered",
                        value: "{form.read().name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Tipo" }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| form.write().kind = evt.value(),
                        for choice in CLIENT_TYPES.iter() {
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
                    span { class: "label-text", "RUT" }
                    input {
                        class: "input input-bordered",
                        value: "{form.read().tax_id}",
                        oninput: move |evt| form.write().tax_id = evt.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Teléfono" }
                    input {
                        class: "input input-bordered",
                        r#type: "tel",
                        value: "{form.read().phone}",
                        oninput: move |evt| form.write().phone = evt.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Dirección" }
                    input {
                        class: "input input-bordered",
                        value: "{form.read().address}",
                        oninput: move |evt| form.write().address = evt.value(),
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
                            let Some(client) = current.as_ref() else {
                                on_close.call(());
                                return;
                            };
                            match form().into_action(client) {
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
