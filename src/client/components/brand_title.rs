use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaSnowflake;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn BrandTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Dashboard {},
            class: "btn btn-ghost flex items-center gap-2",
            Icon {
                width: 20,
                height: 20,
                icon: FaSnowflake
            }
            p { class: "text-xl",
                "LogiRefrigeración"
            }
        }
    )
}
