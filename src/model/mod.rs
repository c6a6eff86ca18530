//! Wire types exchanged with the LogiRefrigeración REST API.

pub mod api;
pub mod audit;
pub mod client;
pub mod dashboard;
pub mod datetime;
pub mod event;
pub mod freezer;
pub mod maintenance;
pub mod notification;
pub mod session;
pub mod user;
pub mod zone;
