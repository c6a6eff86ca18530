//! Generic listing view: filter bar, data table and paginator bound to a [`ListHandle`].

use dioxus::prelude::*;

use crate::client::{
    components::ErrorAlert,
    hooks::{use_config, ListHandle},
    list::{FilterField, FilterKind, FilterState, ListResource, PageState},
};

#[component]
pub fn ListView<R: ListResource + Copy + PartialEq>(
    list: ListHandle<R>,
    row_actions: Option<Callback<i64, Element>>,
) -> Element {
    let config = use_config();
    let resource = list.resource();

    let signal = list.state();
    let state = signal.read();
    let title = resource.title();
    let page = state.page();
    let loading = state.is_loading();
    let filters = state.filters().clone();
    let error = state.error().map(|err| err.user_message());
    let action_error = state.action_error().map(|err| err.user_message());
    let rows: Vec<(i64, Vec<String>)> = state
        .rows()
        .iter()
        .map(|row| (resource.row_id(row), resource.cells(row)))
        .collect();
    let row_count = rows.len();
    drop(state);

    rsx!(
        div { class: "flex flex-col gap-4",
            h1 { class: "text-2xl font-bold", "{title}" }
            FilterBar {
                fields: resource.filters(),
                values: filters,
                on_change: move |(key, value): (&'static str, String)| list.set_filter(key, value),
                on_apply: move |_| list.apply_filters(),
                on_clear: move |_| list.clear_filters(),
            }
            if let Some(message) = action_error {
                ErrorAlert {
                    message,
                    on_close: move |_| list.dismiss_action_error(),
                }
            }
            if let Some(message) = error {
                ErrorAlert { message }
            }
            DataTable {
                columns: resource.columns(),
                rows,
                loading,
                row_actions,
            }
            Paginator {
                page,
                rows: row_count,
                options: config.page_size_options.clone(),
                on_page: move |index| list.change_page(index),
                on_page_size: move |size| list.change_page_size(size),
            }
        }
    )
}

/// Filter inputs; edits are reported per key and only submitted on apply.
#[component]
pub fn FilterBar(
    fields: &'static [FilterField],
    values: FilterState,
    on_change: EventHandler<(&'static str, String)>,
    on_apply: EventHandler<()>,
    on_clear: EventHandler<()>,
) -> Element {
    rsx!(
        form {
            class: "flex flex-wrap items-end gap-2",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_apply.call(());
            },
            for field in fields.iter() {
                label { key: "{field.key}", class: "form-control",
                    span { class: "label-text", "{field.label}" }
                    {filter_input(*field, values.get(field.key).to_string(), on_change)}
                }
            }
            button { r#type: "submit", class: "btn btn-primary btn-sm", "Filtrar" }
            button {
                r#type: "button",
                class: "btn btn-ghost btn-sm",
                onclick: move |_| on_clear.call(()),
                "Limpiar"
            }
        }
    )
}

fn filter_input(
    field: FilterField,
    value: String,
    on_change: EventHandler<(&'static str, String)>,
) -> Element {
    let key = field.key;

    match field.kind {
        FilterKind::Text => rsx!(
            input {
                class: "input input-bordered input-sm",
                r#type: "text",
                value: "{value}",
                oninput: move |evt| on_change.call((key, evt.value())),
            }
        ),
        FilterKind::Date => rsx!(
            input {
                class: "input input-bordered input-sm",
                r#type: "date",
                value: "{value}",
                onchange: move |evt| on_change.call((key, evt.value())),
            }
        ),
        FilterKind::Select(choices) => rsx!(
            select {
                class: "select select-bordered select-sm",
                onchange: move |evt| on_change.call((key, evt.value())),
                option { value: "", selected: value.is_empty(), "Todos" }
                for choice in choices.iter() {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: value == *choice,
                        "{choice}"
                    }
                }
            }
        ),
    }
}

#[component]
pub fn DataTable(
    columns: &'static [&'static str],
    rows: Vec<(i64, Vec<String>)>,
    loading: bool,
    row_actions: Option<Callback<i64, Element>>,
) -> Element {
    let span = columns.len() + usize::from(row_actions.is_some());

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra table-md",
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column}", "{column}" }
                        }
                        if row_actions.is_some() {
                            th { "Acciones" }
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { colspan: "{span}", class: "text-center",
                                if loading { "Cargando..." } else { "Sin resultados" }
                            }
                        }
                    }
                    for (id, cells) in rows {
                        tr { key: "{id}",
                            for (i, cell) in cells.into_iter().enumerate() {
                                td { key: "{i}", "{cell}" }
                            }
                            if let Some(actions) = row_actions {
                                td { class: "flex gap-1", {actions.call(id)} }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn Paginator(
    page: PageState,
    rows: usize,
    options: Vec<u32>,
    on_page: EventHandler<u64>,
    on_page_size: EventHandler<u32>,
) -> Element {
    let range = page.displayed_range(rows);
    let current = page.index + 1;
    let count = page.page_count();

    rsx!(
        div { class: "flex flex-wrap items-center justify-between gap-2",
            span { class: "text-sm", "{range}" }
            div { class: "flex items-center gap-2",
                select {
                    class: "select select-bordered select-sm",
                    onchange: move |evt| {
                        if let Ok(size) = evt.value().parse::<u32>() {
                            on_page_size.call(size);
                        }
                    },
                    for size in options {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: size == page.size,
                            "{size} por página"
                        }
                    }
                }
                div { class: "join",
                    button {
                        class: "join-item btn btn-sm",
                        disabled: !page.has_previous(),
                        onclick: move |_| on_page.call(page.index.saturating_sub(1)),
                        "«"
                    }
                    span { class: "join-item btn btn-sm btn-disabled",
                        "Página {current} de {count}"
                    }
                    button {
                        class: "join-item btn btn-sm",
                        disabled: !page.has_next(),
                        onclick: move |_| on_page.call(page.index + 1),
                        "»"
                    }
                }
            }
        }
    )
}
