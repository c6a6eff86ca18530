use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{ListView, Page},
    hooks::use_list,
    resources::AuditList,
};

#[component]
pub fn Audit() -> Element {
    let list = use_list(AuditList);

    rsx!(
        Title { "Auditoría | LogiRefrigeración" }
        Page {
            ListView { list }
        }
    )
}
