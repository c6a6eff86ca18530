pub mod access_denied;
pub mod audit;
pub mod clients;
pub mod dashboard;
pub mod events;
pub mod freezers;
pub mod login;
pub mod maintenance;
pub mod not_found;
pub mod notifications;
pub mod users;
pub mod zones;

pub use access_denied::AccessDenied;
pub use audit::Audit;
pub use clients::Clients;
pub use dashboard::Dashboard;
pub use events::Events;
pub use freezers::{FreezerMaintenance, Freezers};
pub use login::Login;
pub use maintenance::Maintenance;
pub use not_found::NotFound;
pub use notifications::Notifications;
pub use users::{Administrators, Operators};
pub use zones::{Departments, Zones};
