use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaBell, FaRightFromBracket};
use dioxus_free_icons::Icon;

use crate::client::{
    components::BrandTitleButton,
    gate::LOGIN_PATH,
    hooks::{use_session, NotificationHandle},
    login,
    nav::NavMenuState,
    router::Route,
};

#[component]
pub fn TopBar(mobile_menu: Signal<NavMenuState>) -> Element {
    let mut mobile_menu = mobile_menu;
    let mut session = use_session();
    let notifications = use_context::<NotificationHandle>();
    let nav = use_navigator();

    let unread = notifications.state().read().unread();
    let role = session.read().role().map(|role| role.label()).unwrap_or_default();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-30",
            div {
                class: "navbar-start",
                button {
                    class: "btn btn-ghost lg:hidden",
                    onclick: move |_| mobile_menu.write().open_overlay(),
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaBars
                    }
                }
                BrandTitleButton {}
            }
            div {
                class: "navbar-end gap-2",
                Link {
                    to: Route::Notifications {},
                    class: "btn btn-ghost btn-circle",
                    div { class: "indicator",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaBell
                        }
                        if unread > 0 {
                            span { class: "badge badge-sm badge-primary indicator-item",
                                "{unread}"
                            }
                        }
                    }
                }
                span { class: "text-sm hidden sm:inline",
                    "{role}"
                }
                button {
                    class: "btn btn-outline flex gap-2",
                    onclick: move |_| {
                        login::logout(&mut *session.write());
                        nav.replace(LOGIN_PATH);
                    },
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaRightFromBracket
                    }
                    "Salir"
                }
            }
        }
    }
}
