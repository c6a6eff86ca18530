use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{ListView, Page},
    hooks::{use_list, ListHandle},
    resources::{RowAction, UserList},
    session::Role,
};

#[component]
pub fn Administrators() -> Element {
    let directory_key = "administrators";
    rsx!(
        Title { "Administradores | LogiRefrigeración" }
        Page {
            UserDirectory { key: "{directory_key}", role: Role::Administrator }
        }
    )
}

#[component]
pub fn Operators() -> Element {
    let directory_key = "operators";
    rsx!(
        Title { "Operadores | LogiRefrigeración" }
        Page {
            UserDirectory { key: "{directory_key}", role: Role::Operator }
        }
    )
}

#[component]
fn UserDirectory(role: Role) -> Element {
    let list = use_list(UserList { role });
    let mut resetting = use_signal(|| None::<i64>);

    let row_actions = use_callback(move |id: i64| {
        let active = list
            .state()
            .read()
            .rows()
            .iter()
            .find(|user| user.id == id)
            .map(|user| user.active);

        rsx!(
            if let Some(active) = active {
                button {
                    class: "btn btn-xs btn-outline",
                    onclick: move |_| list.perform(RowAction::SetUserActive { user_id: id, active: !active }),
                    if active { "Desactivar" } else { "Activar" }
                }
            }
            button {
                class: "btn btn-xs btn-outline",
                onclick: move |_| resetting.set(Some(id)),
                "Restablecer contraseña"
            }
        )
    });

    rsx!(
        ListView { list, row_actions }
        if let Some(user_id) = resetting() {
            PasswordResetModal {
                list,
                user_id,
                on_close: move |_| resetting.set(None),
            }
        }
    )
}

/// Collects and locally validates a new password before it is sent.
#[component]
fn PasswordResetModal(list: ListHandle<UserList>, user_id: i64, on_close: EventHandler<()>) -> Element {
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut field_error = use_signal(|| None::<String>);

    let submit = move |_| {
        let action = RowAction::ResetPassword {
            user_id,
            password: password(),
            confirmation: confirmation(),
        };

        match action.validate() {
            Ok(()) => {
                list.perform(action);
                on_close.call(());
            }
            Err(err) => field_error.set(Some(err.user_message())),
        }
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box flex flex-col gap-3",
                h3 { class: "text-lg font-bold", "Restablecer contraseña" }
                label { class: "form-control",
                    span { class: "label-text", "Nueva contraseña" }
                    input {
                        class: "input input-bordered",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Confirmar contraseña" }
                    input {
                        class: "input input-bordered",
                        r#type: "password",
                        value: "{confirmation}",
                        oninput: move |evt| confirmation.set(evt.value()),
                    }
                }
                if let Some(message) = field_error() {
                    p { class: "text-error text-sm", "{message}" }
                }
                div { class: "modal-action",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    button { class: "btn btn-primary", onclick: submit, "Guardar" }
                }
            }
        }
    )
}
