//! Layouts guarding every protected route.

use dioxus::prelude::*;

use crate::client::{
    components::{page::LoadingScreen, SideNav, TopBar},
    gate::{self, GateDecision},
    hooks::{use_notifications, use_session},
    nav::{NavMenuState, NavTree, Surface},
    router::Route,
    session::Role,
};

const ADMIN_ONLY: &[Role] = &[Role::Administrator];

/// Renders the console shell for authenticated viewers, otherwise redirects.
#[component]
pub fn ProtectedLayout() -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let decision = gate::decide(session.read().state(), None, &route.to_string());

    match decision {
        GateDecision::Loading => rsx!(LoadingScreen {}),
        GateDecision::RedirectToLogin { from } => {
            nav.replace(gate::login_url(&from));
            rsx!(LoadingScreen {})
        }
        GateDecision::AccessDenied => {
            nav.replace(Route::AccessDenied {});
            rsx!()
        }
        GateDecision::Allow => rsx!(Shell {}),
    }
}

/// Administrator-only routes nested inside [`ProtectedLayout`].
#[component]
pub fn AdminLayout() -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let decision = gate::decide(session.read().state(), Some(ADMIN_ONLY), &route.to_string());

    match decision {
        GateDecision::Allow => rsx!(Outlet::<Route> {}),
        GateDecision::AccessDenied => {
            nav.replace(Route::AccessDenied {});
            rsx!()
        }
        // The outer layout already handles missing sessions.
        GateDecision::Loading | GateDecision::RedirectToLogin { .. } => rsx!(LoadingScreen {}),
    }
}

#[component]
fn Shell() -> Element {
    let notifications = use_notifications();
    use_context_provider(|| notifications);

    let desktop_menu = use_signal(|| NavMenuState::new(NavTree::console(), Surface::Desktop));
    let mut mobile_menu = use_signal(|| NavMenuState::new(NavTree::console(), Surface::Mobile));

    rsx!(
        TopBar { mobile_menu }
        SideNav { menu: desktop_menu }
        if mobile_menu.read().is_overlay_open() {
            div { class: "fixed inset-0 z-40 lg:hidden",
                div {
                    class: "absolute inset-0 bg-black/40",
                    onclick: move |_| mobile_menu.write().close_overlay(),
                }
                SideNav { menu: mobile_menu }
            }
        }
        Outlet::<Route> {}
    )
}
