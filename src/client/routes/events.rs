use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{ListView, Page},
    hooks::use_list,
    resources::EventList,
};

#[component]
pub fn Events() -> Element {
    let list = use_list(EventList);

    rsx!(
        Title { "Eventos | LogiRefrigeración" }
        Page {
            ListView { list }
        }
    )
}
