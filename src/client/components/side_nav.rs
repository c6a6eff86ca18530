use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronDown, FaChevronRight, FaHouse};
use dioxus_free_icons::Icon;

use crate::client::{
    hooks::use_session,
    nav::{NavMenuState, Surface},
    router::Route,
};

/// Role-filtered navigation tree for one surface.
#[component]
pub fn SideNav(menu: Signal<NavMenuState>) -> Element {
    let mut menu = menu;
    let session = use_session();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let Some(role) = session.read().role() else {
        return rsx!();
    };
    let path = route.to_string();

    let (surface, sections) = {
        let state = menu.read();
        let sections: Vec<_> = state
            .tree()
            .for_role(role)
            .map(|section| {
                (
                    section,
                    state.is_expanded(section, &path),
                    state.is_active(section, &path),
                )
            })
            .collect();
        (state.surface(), sections)
    };

    let surface_class = match surface {
        Surface::Desktop => "hidden lg:block fixed top-[64px] left-0 bottom-0 w-64 z-20",
        Surface::Mobile => "fixed top-0 left-0 bottom-0 w-72 z-50",
    };

    rsx!(
        aside { class: "bg-base-200 overflow-y-auto {surface_class}",
            ul { class: "menu w-full",
                li {
                    Link {
                        to: Route::Dashboard {},
                        onclick: move |_| {
                            if surface == Surface::Mobile {
                                menu.write().close_overlay();
                            }
                        },
                        Icon {
                            width: 14,
                            height: 14,
                            icon: FaHouse
                        }
                        "Inicio"
                    }
                }
                for (section, expanded, active) in sections {
                    li { key: "{section.id}",
                        button {
                            class: if active { "flex justify-between font-semibold menu-active" } else { "flex justify-between font-semibold" },
                            onclick: move |_| menu.write().toggle(section.id),
                            span { "{section.label}" }
                            if expanded {
                                Icon {
                                    width: 12,
                                    height: 12,
                                    icon: FaChevronDown
                                }
                            } else {
                                Icon {
                                    width: 12,
                                    height: 12,
                                    icon: FaChevronRight
                                }
                            }
                        }
                        if expanded {
                            ul {
                                for item in section.items.iter() {
                                    li { key: "{item.path}",
                                        a {
                                            class: if path.starts_with(item.path) { "menu-active" } else { "" },
                                            onclick: move |_| {
                                                let selection = menu.write().select(item);
                                                nav.push(selection.path);
                                            },
                                            "{item.label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
