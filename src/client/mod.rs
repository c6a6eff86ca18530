//! Console client: session handling, REST access, list controllers and the Dioxus UI.
//!
//! Everything outside the `web` feature gate is runtime-agnostic and is exercised by the
//! native test suite; the UI modules wire those pieces into Dioxus signals and routes.

pub mod api;
pub mod config;
pub mod error;
pub mod gate;
pub mod list;
pub mod login;
pub mod nav;
pub mod notification;
pub mod resources;
pub mod session;
pub mod store;
pub mod util;

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod components;
#[cfg(feature = "web")]
pub mod hooks;
#[cfg(feature = "web")]
pub mod router;
#[cfg(feature = "web")]
pub mod routes;

#[cfg(feature = "web")]
pub use app::App;
