use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{ErrorAlert, ListView, Page},
    error::ClientError,
    hooks::{use_api, use_list, use_session},
    resources::{fetch_departments, ZoneList},
    router::Route,
};

/// Departments, each leading to its zones.
#[component]
pub fn Departments() -> Element {
    let session = use_session();
    let api = use_api();

    let departments = use_resource(move || {
        let api = api.clone();
        let current = session.read().session().cloned();
        async move {
            let current = current.ok_or(ClientError::SessionRequired)?;
            fetch_departments(&api, &current).await
        }
    });

    rsx!(
        Title { "Zonas | LogiRefrigeración" }
        Page { class: "flex flex-col gap-4",
            h1 { class: "text-2xl font-bold", "Departamentos" }
            match &*departments.read_unchecked() {
                Some(Ok(departments)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-zebra table-md",
                            thead {
                                tr {
                                    th { "Departamento" }
                                    th { "Zonas" }
                                }
                            }
                            tbody {
                                for department in departments.iter() {
                                    tr { key: "{department.id}",
                                        td {
                                            Link {
                                                to: Route::Zones { department_id: department.id },
                                                class: "link",
                                                "{department.name}"
                                            }
                                        }
                                        td { "{department.zone_count}" }
                                    }
                                }
                            }
                        }
                    }
                ),
                Some(Err(err)) => rsx!(ErrorAlert { message: err.user_message() }),
                None => rsx!(span { class: "loading loading-spinner" }),
            }
        }
    )
}

#[component]
pub fn Zones(department_id: i64) -> Element {
    rsx!(
        Title { "Zonas | LogiRefrigeración" }
        Page {
            div { class: "flex flex-col gap-4",
                Link { to: Route::Departments {}, class: "btn btn-ghost btn-sm w-fit", "« Departamentos" }
                DepartmentZones { key: "{department_id}", department_id }
            }
        }
    )
}

#[component]
fn DepartmentZones(department_id: i64) -> Element {
    let list = use_list(ZoneList { department_id });

    rsx!(ListView { list })
}
