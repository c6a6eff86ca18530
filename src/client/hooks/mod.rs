//! Dioxus hooks exposing the client state to components.

pub mod list;
pub mod notification;

pub use list::{use_list, ListHandle};
pub use notification::{use_notifications, NotificationHandle};

use dioxus::prelude::*;

use crate::client::{
    api::{ApiClient, BrowserTransport},
    config::ClientConfig,
    session::{BrowserSessionStorage, SessionContext},
    store::StateStore,
};

pub type WebApiClient = ApiClient<BrowserTransport>;
pub type WebSessionContext = SessionContext<BrowserSessionStorage>;

impl<T: 'static> StateStore<T> for Signal<T> {
    fn update<O>(&mut self, f: impl FnOnce(&mut T) -> O) -> O {
        f(&mut self.write())
    }
}

/// The tab's session context, provided by the root component.
pub fn use_session() -> Signal<WebSessionContext> {
    use_context::<Signal<WebSessionContext>>()
}

pub fn use_api() -> WebApiClient {
    use_context::<WebApiClient>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}
