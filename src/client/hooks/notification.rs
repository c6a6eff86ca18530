use dioxus::prelude::*;

use crate::client::{
    api::BrowserTransport,
    hooks::{use_api, use_config, use_session, WebSessionContext},
    notification::{NotificationPoller, NotificationState},
};

/// Notification badge state shared by the top bar and the notifications page.
#[derive(Clone, Copy, PartialEq)]
pub struct NotificationHandle {
    state: Signal<NotificationState>,
    session: Signal<WebSessionContext>,
    poller: Signal<NotificationPoller<BrowserTransport>>,
}

/// Starts polling notifications for the lifetime of the calling component.
pub fn use_notifications() -> NotificationHandle {
    let config = use_config();
    let api = use_api();
    let session = use_session();
    let state = use_signal(NotificationState::default);
    let poller =
        use_signal(move || NotificationPoller::new(api, config.notification_poll_interval()));

    // Dropped with the component, which cancels the timer.
    use_future(move || async move {
        let poller = poller.peek().clone();
        let mut state = state;

        poller
            .run(
                move || session.peek().session().cloned(),
                gloo_timers::future::sleep,
                move |result| state.write().apply(result),
            )
            .await;
    });

    NotificationHandle {
        state,
        session,
        poller,
    }
}

impl NotificationHandle {
    pub fn state(&self) -> Signal<NotificationState> {
        self.state
    }

    /// Marks `id` read and replaces the list with a fresh fetch.
    pub fn mark_read(&self, id: i64) {
        let Some(session) = self.session.read().session().cloned() else {
            return;
        };
        let poller = self.poller.peek().clone();
        let mut state = self.state;

        spawn(async move {
            let result = poller.mark_read(&session, id).await;
            state.write().apply(result);
        });
    }
}
