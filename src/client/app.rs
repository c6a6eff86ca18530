use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{ApiClient, BrowserTransport},
    config::ClientConfig,
    router::Route,
    session::{BrowserSessionStorage, SessionContext},
};

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        ClientConfig::from_env().unwrap_or_else(|err| {
            tracing::error!("Invalid client configuration, using defaults: {}", err);
            ClientConfig::default()
        })
    });

    use_context_provider(|| ApiClient::new(BrowserTransport, &config));
    use_context_provider(|| config.clone());

    let mut session =
        use_context_provider(|| Signal::new(SessionContext::new(BrowserSessionStorage)));

    // Protected routes render a loading state until this runs.
    use_effect(move || {
        session.write().resolve();
    });

    rsx! {
        Router::<Route> {}
    }
}
