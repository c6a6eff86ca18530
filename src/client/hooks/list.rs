use dioxus::prelude::*;

use crate::client::{
    hooks::{use_api, use_config, use_session, WebApiClient, WebSessionContext},
    list::{self, ListResource, ListState},
    resources::RowAction,
};

/// Reactive list controller for one mounted listing view.
///
/// Every operation updates the state synchronously and spawns the shared fetch step.
/// The response is applied only if no newer fetch was issued meanwhile.
pub struct ListHandle<R: ListResource> {
    resource: R,
    state: Signal<ListState<R::Row>>,
    session: Signal<WebSessionContext>,
    client: Signal<WebApiClient>,
}

impl<R: ListResource + Copy> Clone for ListHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListResource + Copy> Copy for ListHandle<R> {}

impl<R: ListResource + Copy> PartialEq for ListHandle<R> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

/// Mounts a list controller for `resource` and fetches its first page.
pub fn use_list<R: ListResource + Copy>(resource: R) -> ListHandle<R> {
    let config = use_config();
    let session = use_session();
    let api = use_api();
    let state = use_signal(|| ListState::new(config.default_page_size));
    let client = use_signal(move || api);

    let handle = ListHandle {
        resource,
        state,
        session,
        client,
    };

    use_effect(move || handle.refresh());

    handle
}

impl<R: ListResource + Copy> ListHandle<R> {
    pub fn resource(&self) -> R {
        self.resource
    }

    pub fn state(&self) -> Signal<ListState<R::Row>> {
        self.state
    }

    pub fn set_filter(&self, key: &str, value: String) {
        let mut state = self.state;
        state.write().set_filter(key, value);
    }

    pub fn apply_filters(&self) {
        let mut state = self.state;
        state.write().apply_filters();
        self.refresh();
    }

    pub fn clear_filters(&self) {
        let mut state = self.state;
        state.write().clear_filters();
        self.refresh();
    }

    pub fn change_page(&self, index: u64) {
        let mut state = self.state;
        state.write().change_page(index);
        self.refresh();
    }

    pub fn change_page_size(&self, size: u32) {
        let mut state = self.state;
        state.write().change_page_size(size);
        self.refresh();
    }

    /// Refetches the current page with the current filters.
    pub fn refresh(&self) {
        let mut state = self.state;
        let session = self.session.read().session().cloned();
        let client = self.client.peek().clone();
        let resource = self.resource;

        spawn(async move {
            list::refresh(&mut state, &resource, &client, session.as_ref()).await;
        });
    }

    /// Sends a row-level action and refreshes the page once it succeeds.
    pub fn perform(&self, action: RowAction) {
        let mut state = self.state;
        let session = self.session.read().session().cloned();
        let client = self.client.peek().clone();
        let resource = self.resource;

        spawn(async move {
            // Failures are already recorded on the state for the view.
            let _ = list::perform(&mut state, &resource, &client, session.as_ref(), &action).await;
        });
    }

    pub fn dismiss_action_error(&self) {
        let mut state = self.state;
        state.write().set_action_error(None);
    }
}
