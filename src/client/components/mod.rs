pub mod alert;
pub mod brand_title;
pub mod copy_button;
pub mod layout;
pub mod list_view;
pub mod page;
pub mod side_nav;
pub mod top_bar;

pub use alert::{ErrorAlert, MessageModal};
pub use brand_title::BrandTitleButton;
pub use copy_button::CopyButton;
pub use layout::{AdminLayout, ProtectedLayout};
pub use list_view::{DataTable, FilterBar, ListView, Paginator};
pub use page::Page;
pub use side_nav::SideNav;
pub use top_bar::TopBar;
