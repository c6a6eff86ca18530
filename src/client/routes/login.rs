use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::MessageModal,
    hooks::{use_api, use_session},
    login::{self, Credentials},
};

#[component]
pub fn Login(from: String) -> Element {
    let mut session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    if let Some(target) = login::entry_redirect(session.read().state()) {
        nav.replace(target);
        return rsx!();
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let api = api.clone();
        let from = from.clone();
        let credentials = Credentials {
            username: username(),
            password: password(),
        };

        submitting.set(true);
        spawn(async move {
            match login::login(&api, &mut session, &credentials).await {
                Ok(()) => {
                    nav.replace(login::post_login_destination(&from));
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            submitting.set(false);
        });
    };

    rsx!(
        Title { "Ingresar | LogiRefrigeración" }
        Meta {
            name: "description",
            content: "Consola de administración de LogiRefrigeración."
        }
        div { class: "min-h-screen flex items-center justify-center p-4",
            form {
                class: "card bg-base-200 shadow-sm w-full max-w-96",
                onsubmit: on_submit,
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "LogiRefrigeración" }
                    label { class: "form-control",
                        span { class: "label-text", "Usuario" }
                        input {
                            class: "input input-bordered",
                            r#type: "text",
                            autocomplete: "username",
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Contraseña" }
                        input {
                            class: "input input-bordered",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        if submitting() { "Ingresando..." } else { "Ingresar" }
                    }
                }
            }
        }
        if let Some(message) = error() {
            MessageModal {
                title: "No se pudo ingresar",
                message,
                on_close: move |_| error.set(None),
            }
        }
    )
}
