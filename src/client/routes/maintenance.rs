use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{ListView, Page},
    hooks::use_list,
    resources::MaintenanceList,
};

#[component]
pub fn Maintenance() -> Element {
    let list = use_list(MaintenanceList);

    rsx!(
        Title { "Mantenimientos | LogiRefrigeración" }
        Page {
            ListView { list }
        }
    )
}
