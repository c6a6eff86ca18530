//! Notification badge polling.
//!
//! The poller fetches the notification collection once, then again every interval for as
//! long as a session exists. The unread count is always recomputed from the fetched list;
//! marking a notification read sends the update and refetches instead of editing locally.

use std::future::Future;
use std::time::Duration;

use dioxus_logger::tracing;
use serde::Deserialize;

use crate::{
    client::{
        api::{ApiClient, ApiTransport},
        error::ClientError,
        session::Session,
    },
    model::{api::Paginated, notification::NotificationDto},
};

/// The notifications endpoint answers either a bare array or a `{data, total}` page.
#[derive(Deserialize)]
#[serde(untagged)]
enum NotificationPayload {
    Page(Paginated<NotificationDto>),
    List(Vec<NotificationDto>),
}

impl From<NotificationPayload> for Vec<NotificationDto> {
    fn from(payload: NotificationPayload) -> Self {
        match payload {
            NotificationPayload::Page(page) => page.data,
            NotificationPayload::List(list) => list,
        }
    }
}

/// Notifications shown in the top bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationState {
    notifications: Vec<NotificationDto>,
    unread: usize,
    error: Option<ClientError>,
}

impl NotificationState {
    pub fn notifications(&self) -> &[NotificationDto] {
        &self.notifications
    }

    pub fn unread(&self) -> usize {
        self.unread
    }

    pub fn error(&self) -> Option<&ClientError> {
        self.error.as_ref()
    }

    /// Applies a fetch outcome. A failure keeps the previous list so the badge stays put.
    pub fn apply(&mut self, result: Result<Vec<NotificationDto>, ClientError>) {
        match result {
            Ok(notifications) => {
                self.unread = notifications.iter().filter(|n| !n.read).count();
                self.notifications = notifications;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!("Failed to refresh notifications: {}", err);
                self.error = Some(err);
            }
        }
    }
}

/// Fetches notifications on a fixed period.
#[derive(Clone, Debug)]
pub struct NotificationPoller<T> {
    client: ApiClient<T>,
    interval: Duration,
}

impl<T: ApiTransport> NotificationPoller<T> {
    pub fn new(client: ApiClient<T>, interval: Duration) -> Self {
        Self { client, interval }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn fetch(&self, session: &Session) -> Result<Vec<NotificationDto>, ClientError> {
        let payload: NotificationPayload = self.client.get(session, "/notifications").await?;

        Ok(payload.into())
    }

    /// Marks notification `id` read, then refetches the whole collection.
    pub async fn mark_read(
        &self,
        session: &Session,
        id: i64,
    ) -> Result<Vec<NotificationDto>, ClientError> {
        self.client
            .put::<()>(session, &format!("/notifications/{}/read", id), None)
            .await
            .inspect_err(|err| tracing::error!("Failed to mark notification {} read: {}", id, err))?;

        self.fetch(session).await
    }

    /// Polls until `current_session` reports no session.
    ///
    /// Each tick fetches once and hands the outcome to `on_update`; failures do not change
    /// the period. Dropping the returned future stops polling.
    pub async fn run<F, S, Fut, U>(&self, mut current_session: F, mut sleep: S, mut on_update: U)
    where
        F: FnMut() -> Option<Session>,
        S: FnMut(Duration) -> Fut,
        Fut: Future<Output = ()>,
        U: FnMut(Result<Vec<NotificationDto>, ClientError>),
    {
        while let Some(session) = current_session() {
            on_update(self.fetch(&session).await);
            sleep(self.interval).await;
        }

        tracing::debug!("Notification polling stopped, no active session");
    }
}

#[cfg(test)]
mod tests {
    use crate::client::util::test::UTC_TIMESTAMP;

    fn notifications_json(read_flags: &[bool]) -> String {
        let rows: Vec<String> = read_flags
            .iter()
            .enumerate()
            .map(|(i, read)| {
                format!(
                    r#"{{"id":{},"title":"Mantenimiento pendiente","message":"","createdAt":"{}","read":{}}}"#,
                    i + 1,
                    UTC_TIMESTAMP,
                    read
                )
            })
            .collect();

        format!("[{}]", rows.join(","))
    }

    mod apply {
        use super::notifications_json;
        use crate::{
            client::{error::ClientError, notification::NotificationState},
            model::notification::NotificationDto,
        };

        #[test]
        /// Expected: a failed refresh keeps the previous list and badge count
        fn failure_keeps_previous_list() {
            let previous: Vec<NotificationDto> =
                serde_json::from_str(&notifications_json(&[false, true])).unwrap();
            let mut state = NotificationState::default();
            state.apply(Ok(previous.clone()));

            state.apply(Err(ClientError::Request("offline".to_string())));

            assert_eq!(state.notifications(), previous.as_slice());
            assert_eq!(state.unread(), 1);
            assert!(state.error().is_some());
        }
    }

    mod fetch {
        use std::time::Duration;

        use super::notifications_json;
        use crate::client::{
            notification::{NotificationPoller, NotificationState},
            util::test::{admin_session, mock_client},
        };

        #[tokio::test]
        /// Expected: unread equals the number of entries with read == false
        async fn counts_unread() {
            let client = mock_client();
            client
                .transport()
                .respond(200, &notifications_json(&[false, true, false]));
            let poller = NotificationPoller::new(client, Duration::from_secs(60));
            let mut state = NotificationState::default();

            state.apply(poller.fetch(&admin_session()).await);

            assert_eq!(state.notifications().len(), 3);
            assert_eq!(state.unread(), 2);
        }

        #[tokio::test]
        /// Expected: paginated payloads accepted as well as bare arrays
        async fn accepts_paginated_payload() {
            let client = mock_client();
            client.transport().respond(
                200,
                &format!(r#"{{"data":{},"total":1}}"#, notifications_json(&[false])),
            );
            let poller = NotificationPoller::new(client, Duration::from_secs(60));

            let notifications = poller.fetch(&admin_session()).await.unwrap();

            assert_eq!(notifications.len(), 1);
        }
    }

    mod mark_read {
        use std::time::Duration;

        use super::notifications_json;
        use crate::client::{
            api::Method,
            notification::{NotificationPoller, NotificationState},
            util::test::{admin_session, mock_client},
        };

        #[tokio::test]
        /// Expected: PUT /notifications/{id}/read then a full refetch recomputing unread
        async fn refetches_after_update() {
            let client = mock_client();
            client
                .transport()
                .respond(200, &notifications_json(&[false, false]));
            client.transport().respond(204, "");
            client
                .transport()
                .respond(200, &notifications_json(&[true, false]));
            let poller = NotificationPoller::new(client, Duration::from_secs(60));
            let session = admin_session();
            let mut state = NotificationState::default();
            state.apply(poller.fetch(&session).await);
            assert_eq!(state.unread(), 2);

            state.apply(poller.mark_read(&session, 1).await);

            let requests = poller.client().transport().requests();
            assert_eq!(requests[1].method, Method::Put);
            assert_eq!(requests[1].url, "/api/notifications/1/read");
            assert_eq!(requests[2].url, "/api/notifications");
            assert_eq!(state.unread(), 1);
        }

        #[tokio::test]
        /// Expected: a failed update skips the refetch
        async fn failed_update_skips_refetch() {
            let client = mock_client();
            client.transport().respond(500, "");
            let poller = NotificationPoller::new(client, Duration::from_secs(60));

            let result = poller.mark_read(&admin_session(), 1).await;

            assert!(result.is_err());
            assert_eq!(poller.client().transport().request_count(), 1);
        }
    }

    mod run {
        use std::cell::{Cell, RefCell};
        use std::time::Duration;

        use super::notifications_json;
        use crate::client::{
            notification::{NotificationPoller, NotificationState},
            util::test::{admin_session, mock_client},
        };

        #[tokio::test]
        /// Expected: one fetch per tick at the configured period, stopping when the session ends,
        /// and a failing tick does not stop the next one
        async fn polls_while_session_exists() {
            let client = mock_client();
            client.transport().respond(200, &notifications_json(&[false]));
            client.transport().fail("offline");
            client
                .transport()
                .respond(200, &notifications_json(&[false, false, true]));
            let poller = NotificationPoller::new(client, Duration::from_secs(60));
            let ticks = Cell::new(0);
            let sleeps = RefCell::new(Vec::new());
            let mut state = NotificationState::default();

            poller
                .run(
                    || {
                        ticks.set(ticks.get() + 1);
                        (ticks.get() <= 3).then(admin_session)
                    },
                    |period| {
                        sleeps.borrow_mut().push(period);
                        async {}
                    },
                    |result| state.apply(result),
                )
                .await;

            assert_eq!(poller.client().transport().request_count(), 3);
            assert_eq!(sleeps.borrow().as_slice(), &[Duration::from_secs(60); 3]);
            assert_eq!(state.unread(), 2);
        }

        #[tokio::test]
        /// Expected: no request at all without a session
        async fn does_not_poll_without_session() {
            let poller = NotificationPoller::new(mock_client(), Duration::from_secs(60));

            poller.run(|| None, |_| async {}, |_| {}).await;

            assert_eq!(poller.client().transport().request_count(), 0);
        }
    }
}
