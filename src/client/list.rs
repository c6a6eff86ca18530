//! Paginated list-filter controller shared by every listing view.
//!
//! A listing view is described by a [`ListResource`] (endpoint, filter schema, table columns).
//! [`ListState`] holds the view's filters, pagination, rows and fetch status. [`refresh`] and
//! [`perform`] drive fetches and row actions through an [`ApiClient`] against any
//! [`StateStore`] of that state. Filters only take effect when applied; typing into a filter
//! field never fetches on its own.
//!
//! Every fetch is stamped with a sequence number and a response is applied only when it
//! answers the most recently issued fetch, so a slow earlier response never overwrites a
//! newer one.

use std::collections::BTreeMap;

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{
    client::{
        api::{ApiClient, ApiTransport},
        error::ClientError,
        resources::{perform_action, RowAction},
        session::Session,
        store::StateStore,
    },
    model::api::Paginated,
};

/// Input control used for a filter field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    /// Free text.
    Text,
    /// One of a fixed set of values; empty means "all".
    Select(&'static [&'static str]),
    /// ISO date (`YYYY-MM-DD`).
    Date,
}

/// A named, user-editable constraint applied to a list query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterField {
    /// Query parameter name sent to the API.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterField {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::Text,
        }
    }

    pub const fn select(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::Select(options),
        }
    }

    pub const fn date(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::Date,
        }
    }
}

/// Current value of each filter field; absent means empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    values: BTreeMap<String, String>,
}

impl FilterState {
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(key);
        } else {
            self.values.insert(key.to_string(), value);
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|value| value.trim().is_empty())
    }

    /// Non-empty values in schema order, trimmed.
    pub fn active(&self, schema: &[FilterField]) -> Vec<(String, String)> {
        schema
            .iter()
            .filter_map(|field| {
                let value = self.get(field.key).trim();
                (!value.is_empty()).then(|| (field.key.to_string(), value.to_string()))
            })
            .collect()
    }
}

/// Pagination of a list view; `total` is always the server's figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    pub index: u64,
    pub size: u32,
    pub total: u64,
}

impl PageState {
    pub fn new(size: u32) -> Self {
        Self {
            index: 0,
            size: size.max(1),
            total: 0,
        }
    }

    /// Number of pages needed for `total`, at least one.
    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(u64::from(self.size)).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        (self.index + 1) * u64::from(self.size) < self.total
    }

    /// Paginator caption for a page currently showing `rows` rows, e.g. "1–5 of 47".
    pub fn displayed_range(&self, rows: usize) -> String {
        if rows == 0 {
            return format!("0–0 of {}", self.total);
        }

        let from = self.index * u64::from(self.size) + 1;
        let to = from + rows as u64 - 1;

        format!("{}–{} of {}", from, to, self.total)
    }
}

/// The query issued by a single fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    /// Sequence number of the fetch that issued this query.
    pub seq: u64,
    pub filters: Vec<(String, String)>,
    pub page: u64,
    pub page_size: u32,
}

impl ListQuery {
    /// Query string with filters first, then `page` and `pageSize`.
    pub fn to_query_string(&self) -> String {
        self.filters
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .chain([
                format!("page={}", self.page),
                format!("pageSize={}", self.page_size),
            ])
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// A listable REST collection.
pub trait ListResource: 'static {
    type Row: DeserializeOwned + Clone + PartialEq + 'static;

    /// Title of the listing page.
    fn title(&self) -> &'static str;

    /// Collection path relative to the API base, e.g. `/freezers`.
    fn endpoint(&self) -> String;

    /// Path of a single row, used by row-level actions.
    fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.endpoint(), id)
    }

    fn filters(&self) -> &'static [FilterField];

    fn columns(&self) -> &'static [&'static str];

    /// Display text for each column of `row`.
    fn cells(&self, row: &Self::Row) -> Vec<String>;

    fn row_id(&self, row: &Self::Row) -> i64;
}

/// State of one listing view.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    filters: FilterState,
    page: PageState,
    rows: Vec<T>,
    loading: bool,
    error: Option<ClientError>,
    action_error: Option<ClientError>,
    issued: u64,
}

impl<T> ListState<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            filters: FilterState::default(),
            page: PageState::new(page_size),
            rows: Vec::new(),
            loading: false,
            error: None,
            action_error: None,
            issued: 0,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ClientError> {
        self.error.as_ref()
    }

    /// Error of the last failed row-level action, if any.
    pub fn action_error(&self) -> Option<&ClientError> {
        self.action_error.as_ref()
    }

    /// Sequence number of the most recently issued fetch.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Edits a filter value without fetching.
    pub fn set_filter(&mut self, key: &str, value: impl Into<String>) {
        self.filters.set(key, value);
    }

    /// Prepares `apply_filters`: back to the first page.
    pub fn apply_filters(&mut self) {
        self.page.index = 0;
    }

    /// Prepares `clear_filters`: every filter empty and back to the first page.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page.index = 0;
    }

    pub fn change_page(&mut self, index: u64) {
        self.page.index = index;
    }

    /// Sets the page size and returns to the first page.
    pub fn change_page_size(&mut self, size: u32) {
        self.page.size = size.max(1);
        self.page.index = 0;
    }

    pub fn set_action_error(&mut self, error: Option<ClientError>) {
        self.action_error = error;
    }

    /// Starts a fetch with the current filters and page, marking the view as loading.
    pub fn begin_fetch(&mut self, schema: &[FilterField]) -> ListQuery {
        self.issued += 1;
        self.loading = true;

        ListQuery {
            seq: self.issued,
            filters: self.filters.active(schema),
            page: self.page.index,
            page_size: self.page.size,
        }
    }

    /// Starts a fetch for `session`; without one, records the error and returns `None`.
    pub fn prepare_refresh(
        &mut self,
        schema: &[FilterField],
        session: Option<&Session>,
    ) -> Option<ListQuery> {
        match session {
            Some(_) => Some(self.begin_fetch(schema)),
            None => {
                self.fail_unauthenticated();
                None
            }
        }
    }

    /// Records that no session exists; no fetch is issued.
    pub fn fail_unauthenticated(&mut self) {
        // Invalidates any fetch still in flight.
        self.issued += 1;
        self.loading = false;
        self.rows.clear();
        self.page.total = 0;
        self.error = Some(ClientError::SessionRequired);
    }

    /// Applies the outcome of fetch `seq`; returns false when a newer fetch superseded it.
    pub fn complete_fetch(&mut self, seq: u64, result: Result<Paginated<T>, ClientError>) -> bool {
        if seq != self.issued {
            tracing::debug!(seq, latest = self.issued, "Discarding stale list response");
            return false;
        }

        self.loading = false;

        match result {
            Ok(page) => {
                self.rows = page.data;
                self.page.total = page.total;
                self.error = None;
            }
            Err(err) => {
                tracing::error!("Failed to load list: {}", err);
                self.rows.clear();
                self.page.total = 0;
                self.error = Some(err);
            }
        }

        true
    }
}

/// Fetches one page of `resource` for `query`.
pub async fn fetch_page<R: ListResource, T: ApiTransport>(
    client: &ApiClient<T>,
    resource: &R,
    session: &Session,
    query: &ListQuery,
) -> Result<Paginated<R::Row>, ClientError> {
    let path = format!("{}?{}", resource.endpoint(), query.to_query_string());

    client.get(session, &path).await
}

/// Fetches the current page with the current filters into `store`.
///
/// Without a session the error is set immediately and no request is made.
pub async fn refresh<R, T, S>(
    store: &mut S,
    resource: &R,
    client: &ApiClient<T>,
    session: Option<&Session>,
) where
    R: ListResource,
    T: ApiTransport,
    S: StateStore<ListState<R::Row>>,
{
    let query = store.update(|state| state.prepare_refresh(resource.filters(), session));
    let (Some(session), Some(query)) = (session, query) else {
        return;
    };

    let result = fetch_page(client, resource, session, &query).await;
    store.update(|state| state.complete_fetch(query.seq, result));
}

/// Runs a row-level action and, once it succeeds, refreshes the current page.
///
/// A failed action leaves the rows untouched and records the error for the view.
pub async fn perform<R, T, S>(
    store: &mut S,
    resource: &R,
    client: &ApiClient<T>,
    session: Option<&Session>,
    action: &RowAction,
) -> Result<(), ClientError>
where
    R: ListResource,
    T: ApiTransport,
    S: StateStore<ListState<R::Row>>,
{
    let result = match session {
        Some(session) => perform_action(client, resource, session, action).await,
        None => Err(ClientError::SessionRequired),
    };

    match result {
        Ok(()) => {
            store.update(|state| state.set_action_error(None));
            refresh(store, resource, client, session).await;
            Ok(())
        }
        Err(err) => {
            store.update(|state| state.set_action_error(Some(err.clone())));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {

    mod filter_state {
        use crate::client::list::{FilterField, FilterState};

        const SCHEMA: &[FilterField] = &[
            FilterField::text("search", "Buscar"),
            FilterField::select("estado", "Estado", &["Disponible", "Asignado"]),
            FilterField::date("fechaDesde", "Desde"),
        ];

        #[test]
        /// Expected: only non-empty values, in schema order, trimmed
        fn active_skips_empty_values() {
            let mut filters = FilterState::default();
            filters.set("fechaDesde", "2026-01-01");
            filters.set("search", "   ");
            filters.set("estado", "Disponible");

            assert_eq!(
                filters.active(SCHEMA),
                vec![
                    ("estado".to_string(), "Disponible".to_string()),
                    ("fechaDesde".to_string(), "2026-01-01".to_string()),
                ]
            );
        }

        #[test]
        /// Expected: setting an empty value removes the entry
        fn empty_value_clears_field() {
            let mut filters = FilterState::default();
            filters.set("estado", "Disponible");
            filters.set("estado", "");

            assert_eq!(filters.get("estado"), "");
            assert!(filters.is_empty());
        }
    }

    mod page_state {
        use crate::client::list::PageState;

        #[test]
        /// Expected: caption counts the rows actually shown
        fn displayed_range_uses_row_count() {
            let page = PageState {
                index: 0,
                size: 10,
                total: 47,
            };

            assert_eq!(page.displayed_range(5), "1–5 of 47");
        }

        #[test]
        /// Expected: later pages offset by index * size
        fn displayed_range_on_later_page() {
            let page = PageState {
                index: 4,
                size: 10,
                total: 47,
            };

            assert_eq!(page.displayed_range(7), "41–47 of 47");
            assert!(!page.has_next());
            assert!(page.has_previous());
            assert_eq!(page.page_count(), 5);
        }

        #[test]
        /// Expected: empty pages render as 0–0
        fn displayed_range_when_empty() {
            assert_eq!(PageState::new(10).displayed_range(0), "0–0 of 0");
        }
    }

    mod list_query {
        use crate::client::list::ListQuery;

        #[test]
        /// Expected: filters precede page and pageSize, values percent-encoded
        fn builds_query_string() {
            let query = ListQuery {
                seq: 1,
                filters: vec![
                    ("estado".to_string(), "Disponible".to_string()),
                    ("search".to_string(), "Av. Perú & 5".to_string()),
                ],
                page: 2,
                page_size: 25,
            };

            assert_eq!(
                query.to_query_string(),
                "estado=Disponible&search=Av.%20Per%C3%BA%20%26%205&page=2&pageSize=25"
            );
        }
    }

    mod complete_fetch {
        use crate::{
            client::{error::ClientError, list::ListState},
            model::api::Paginated,
        };

        #[test]
        /// Expected: a response to a superseded fetch is discarded
        fn ignores_stale_response() {
            let mut state: ListState<i64> = ListState::new(10);
            let first = state.begin_fetch(&[]);
            state.change_page(1);
            let second = state.begin_fetch(&[]);

            let applied_second = state.complete_fetch(
                second.seq,
                Ok(Paginated {
                    data: vec![11, 12],
                    total: 12,
                }),
            );
            let applied_first = state.complete_fetch(
                first.seq,
                Ok(Paginated {
                    data: vec![1, 2, 3],
                    total: 99,
                }),
            );

            assert!(applied_second);
            assert!(!applied_first);
            assert_eq!(state.rows(), &[11, 12]);
            assert_eq!(state.page().total, 12);
        }

        #[test]
        /// Expected: loading stays true until the latest fetch answers
        fn loading_tracks_latest_fetch() {
            let mut state: ListState<i64> = ListState::new(10);
            let first = state.begin_fetch(&[]);
            let second = state.begin_fetch(&[]);

            state.complete_fetch(first.seq, Ok(Paginated::default()));
            assert!(state.is_loading());

            state.complete_fetch(second.seq, Ok(Paginated::default()));
            assert!(!state.is_loading());
        }

        #[test]
        /// Expected: failure clears rows and total but keeps filters and page
        fn failure_clears_rows() {
            let mut state: ListState<i64> = ListState::new(10);
            let query = state.begin_fetch(&[]);
            state.complete_fetch(
                query.seq,
                Ok(Paginated {
                    data: vec![1],
                    total: 1,
                }),
            );
            state.set_filter("estado", "Baja");
            state.change_page(3);

            let query = state.begin_fetch(&[]);
            state.complete_fetch(query.seq, Err(ClientError::Request("offline".to_string())));

            assert!(state.rows().is_empty());
            assert_eq!(state.page().total, 0);
            assert_eq!(state.page().index, 3);
            assert_eq!(state.filters().get("estado"), "Baja");
            assert!(!state.is_loading());
            assert!(state.error().is_some());
        }
    }

    mod refresh {
        use crate::{
            client::{
                error::ClientError,
                list::{refresh, ListState},
                resources::{EventList, FreezerList},
                util::test::{admin_session, event_page, freezer_page, mock_client},
            },
            model::{event::EventDto, freezer::FreezerDto},
        };

        fn freezers() -> ListState<FreezerDto> {
            ListState::new(10)
        }

        #[tokio::test]
        /// Expected: first fetch requests page=0&pageSize=10 and renders "1–5 of 47"
        async fn first_fetch_uses_defaults() {
            let client = mock_client();
            client.transport().respond(200, &freezer_page(5, 47));
            let mut state = freezers();

            refresh(&mut state, &FreezerList, &client, Some(&admin_session())).await;

            let request = client.transport().last_request().unwrap();
            assert_eq!(request.url, "/api/freezers?page=0&pageSize=10");
            assert_eq!(state.rows().len(), 5);
            assert_eq!(state.page().displayed_range(state.rows().len()), "1–5 of 47");
        }

        #[tokio::test]
        /// Expected: applying the Estado filter resets to page 0 and sends estado=Disponible
        async fn apply_filters_resets_page() {
            let client = mock_client();
            client.transport().respond(200, &freezer_page(10, 47));
            client.transport().respond(200, &freezer_page(3, 3));
            let mut state = freezers();
            let session = admin_session();
            state.change_page(2);
            refresh(&mut state, &FreezerList, &client, Some(&session)).await;

            state.set_filter("estado", "Disponible");
            state.apply_filters();
            refresh(&mut state, &FreezerList, &client, Some(&session)).await;

            let request = client.transport().last_request().unwrap();
            assert!(request
                .url
                .ends_with("estado=Disponible&page=0&pageSize=10"));
            assert_eq!(state.page().index, 0);
            assert_eq!(state.page().total, 3);
        }

        #[tokio::test]
        /// Expected: every filter empty, page 0, exactly one fetch without filters
        async fn clear_filters_fetches_once() {
            let client = mock_client();
            client.transport().respond(200, &freezer_page(10, 47));
            client.transport().respond(200, &freezer_page(10, 47));
            let mut state = freezers();
            let session = admin_session();
            state.set_filter("estado", "Disponible");
            state.set_filter("search", "FZ");
            state.change_page(3);
            refresh(&mut state, &FreezerList, &client, Some(&session)).await;

            state.clear_filters();
            refresh(&mut state, &FreezerList, &client, Some(&session)).await;

            let requests = client.transport().requests();
            assert_eq!(requests.len(), 2);
            assert_eq!(requests[1].url, "/api/freezers?page=0&pageSize=10");
            assert!(state.filters().is_empty());
            assert_eq!(state.page().index, 0);
        }

        #[tokio::test]
        /// Expected: page size n, page index 0, fetch of page 0 with size n
        async fn change_page_size_resets_index() {
            let client = mock_client();
            client.transport().respond(200, &freezer_page(10, 47));
            client.transport().respond(200, &freezer_page(25, 47));
            let mut state = freezers();
            let session = admin_session();
            state.change_page(3);
            refresh(&mut state, &FreezerList, &client, Some(&session)).await;

            state.change_page_size(25);
            refresh(&mut state, &FreezerList, &client, Some(&session)).await;

            let request = client.transport().last_request().unwrap();
            assert_eq!(request.url, "/api/freezers?page=0&pageSize=25");
            assert_eq!(state.page().size, 25);
            assert_eq!(state.page().index, 0);
        }

        #[tokio::test]
        /// Expected: changing page keeps the applied filters
        async fn change_page_keeps_filters() {
            let client = mock_client();
            client.transport().respond(200, &freezer_page(10, 47));
            let mut state = freezers();
            state.set_filter("estado", "Asignado");

            state.change_page(1);
            refresh(&mut state, &FreezerList, &client, Some(&admin_session())).await;

            let request = client.transport().last_request().unwrap();
            assert_eq!(
                request.url,
                "/api/freezers?estado=Asignado&page=1&pageSize=10"
            );
        }

        #[tokio::test]
        /// Expected: failed fetch leaves an empty result with total 0
        async fn fetch_failure_empties_result() {
            let client = mock_client();
            client.transport().respond(200, &freezer_page(5, 47));
            client.transport().respond(500, r#"{"error":"Internal server error"}"#);
            let mut state = freezers();
            let session = admin_session();
            refresh(&mut state, &FreezerList, &client, Some(&session)).await;

            state.change_page(1);
            refresh(&mut state, &FreezerList, &client, Some(&session)).await;

            assert!(state.rows().is_empty());
            assert_eq!(state.page().total, 0);
            assert_eq!(state.page().index, 1);
            assert_eq!(
                state.error(),
                Some(&ClientError::Status {
                    status: 500,
                    message: "Internal server error".to_string()
                })
            );
        }

        #[tokio::test]
        /// Expected: no request without a session and SessionRequired set
        async fn missing_session_short_circuits() {
            let client = mock_client();
            let mut state = freezers();

            refresh(&mut state, &FreezerList, &client, None).await;

            assert_eq!(client.transport().request_count(), 0);
            assert_eq!(state.error(), Some(&ClientError::SessionRequired));
            assert!(!state.is_loading());
        }

        #[tokio::test]
        /// Expected: rows stamped with UTC offsets load instead of failing the whole page
        async fn loads_rows_with_utc_timestamps() {
            let client = mock_client();
            client.transport().respond(200, &event_page(3, 3));
            let mut state: ListState<EventDto> = ListState::new(10);

            refresh(&mut state, &EventList, &client, Some(&admin_session())).await;

            assert!(state.error().is_none());
            assert_eq!(state.rows().len(), 3);
        }
    }

    mod perform {
        use crate::{
            client::{
                api::Method,
                list::{perform, refresh, ListState},
                resources::{ClientEdit, ClientList, FreezerList, RowAction},
                util::test::{admin_session, freezer_page, mock_client},
            },
            model::{client::ClientDto, freezer::FreezerDto},
        };

        #[tokio::test]
        /// Expected: a successful action triggers one refetch of the current page and filters
        async fn action_success_refreshes_page() {
            let client = mock_client();
            client.transport().respond(200, &freezer_page(10, 47));
            client.transport().respond(204, "");
            client.transport().respond(200, &freezer_page(10, 46));
            let mut state: ListState<FreezerDto> = ListState::new(10);
            let session = admin_session();
            state.set_filter("estado", "Baja");
            state.change_page(1);
            refresh(&mut state, &FreezerList, &client, Some(&session)).await;

            perform(
                &mut state,
                &FreezerList,
                &client,
                Some(&session),
                &RowAction::Delete { id: 4 },
            )
            .await
            .unwrap();

            let requests = client.transport().requests();
            assert_eq!(requests.len(), 3);
            assert_eq!(requests[1].url, "/api/freezers/4");
            assert_eq!(requests[2].url, "/api/freezers?estado=Baja&page=1&pageSize=10");
            assert_eq!(state.page().total, 46);
        }

        #[tokio::test]
        /// Expected: a failed action keeps the rows and records the error without refetching
        async fn action_failure_keeps_rows() {
            let client = mock_client();
            client.transport().respond(200, &freezer_page(5, 5));
            client.transport().respond(500, r#"{"error":"Internal server error"}"#);
            let mut state: ListState<FreezerDto> = ListState::new(10);
            let session = admin_session();
            refresh(&mut state, &FreezerList, &client, Some(&session)).await;

            let result = perform(
                &mut state,
                &FreezerList,
                &client,
                Some(&session),
                &RowAction::UnassignFreezer { freezer_id: 2 },
            )
            .await;

            assert!(result.is_err());
            assert_eq!(client.transport().request_count(), 2);
            assert_eq!(state.rows().len(), 5);
            assert!(state.action_error().is_some());
            assert!(state.error().is_none());
        }

        #[tokio::test]
        /// Expected: an edit sends PUT /freezers/{id} with the row body, then refetches
        async fn edit_sends_put_and_refreshes() {
            let client = mock_client();
            client.transport().respond(204, "");
            client.transport().respond(200, &freezer_page(1, 1));
            let mut state: ListState<FreezerDto> = ListState::new(10);
            let body = serde_json::json!({ "status": "Mantenimiento" });

            perform(
                &mut state,
                &FreezerList,
                &client,
                Some(&admin_session()),
                &RowAction::Update { id: 7, body },
            )
            .await
            .unwrap();

            let requests = client.transport().requests();
            assert_eq!(requests[0].url, "/api/freezers/7");
            assert_eq!(requests[0].body.as_deref(), Some(r#"{"status":"Mantenimiento"}"#));
            assert_eq!(requests[1].url, "/api/freezers?page=0&pageSize=10");
        }

        #[tokio::test]
        /// Expected: an edited client row is PUT to /clients/{id} and the edit shows after refetch
        async fn client_edit_form_updates_row() {
            let client = mock_client();
            client.transport().respond(
                200,
                r#"{"data":[{"id":3,"name":"Heladería Sur","type":"Minorista","phone":"099 123"}],"total":1}"#,
            );
            client.transport().respond(204, "");
            client.transport().respond(
                200,
                r#"{"data":[{"id":3,"name":"Heladería Norte","type":"Minorista","phone":"099 123"}],"total":1}"#,
            );
            let mut state: ListState<ClientDto> = ListState::new(10);
            let session = admin_session();
            refresh(&mut state, &ClientList, &client, Some(&session)).await;

            let mut form = ClientEdit::from_row(&state.rows()[0]);
            form.name = "Heladería Norte".to_string();
            let action = form.into_action(&state.rows()[0]).unwrap();
            perform(&mut state, &ClientList, &client, Some(&session), &action)
                .await
                .unwrap();

            let requests = client.transport().requests();
            assert_eq!(requests[1].method, Method::Put);
            assert_eq!(requests[1].url, "/api/clients/3");
            assert!(requests[1]
                .body
                .as_deref()
                .is_some_and(|body| body.contains(r#""name":"Heladería Norte""#)));
            assert_eq!(state.rows()[0].name, "Heladería Norte");
        }
    }
}
