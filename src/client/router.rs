use dioxus::prelude::*;

use crate::client::{
    components::{AdminLayout, ProtectedLayout},
    routes::{
        AccessDenied, Administrators, Audit, Clients, Dashboard, Departments, Events,
        FreezerMaintenance, Freezers, Login, Maintenance, NotFound, Notifications, Operators,
        Zones,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:from")]
    Login { from: String },

    #[route("/access-denied")]
    AccessDenied {},

    #[layout(ProtectedLayout)]

        #[route("/")]
        Dashboard {},

        #[route("/freezers")]
        Freezers {},

        #[route("/freezers/:id/maintenance")]
        FreezerMaintenance { id: i64 },

        #[route("/clients")]
        Clients {},

        #[route("/maintenance")]
        Maintenance {},

        #[route("/events")]
        Events {},

        #[route("/zones")]
        Departments {},

        #[route("/zones/:department_id")]
        Zones { department_id: i64 },

        #[route("/notifications")]
        Notifications {},

        #[layout(AdminLayout)]

            #[route("/users/administrators")]
            Administrators {},

            #[route("/users/operators")]
            Operators {},

            #[route("/audit")]
            Audit {},

        #[end_layout]

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
