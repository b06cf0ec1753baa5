use super::model::{
    derive_view, page_numbers, ColumnDef, FilterDef, PageItem, SortDirection, TableQuery,
    TableRow, TableView, DEFAULT_PAGE_SIZE,
};
use super::selection::{HeaderCheckboxState, Selection};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => " ⇅",
    }
}

/// Generic searchable, filterable, sortable and paginated table with row
/// selection.
///
/// Rows are selected by [`TableRow::row_key`]; the selection is kept across
/// pages and cleared after a bulk delete. `on_edit`/`on_delete` add an action
/// column; delete asks for an inline "Ya/Tidak" confirmation first.
#[component]
pub fn DataTable<T>(
    #[prop(into)] data: Signal<Vec<T>>,
    columns: Vec<ColumnDef<T>>,
    /// Fields matched by the search box. No search box when empty.
    #[prop(optional)]
    search_fields: Vec<&'static str>,
    #[prop(optional)] filters: Vec<FilterDef>,
    #[prop(optional, default = DEFAULT_PAGE_SIZE)] page_size: usize,
    #[prop(optional, into)] search_placeholder: Option<String>,
    /// Adds the checkbox column.
    #[prop(optional)]
    selectable: bool,
    #[prop(optional, into)] empty_message: Option<String>,
    /// Receives every selected key.
    #[prop(optional)]
    on_bulk_delete: Option<Callback<Vec<T::Key>>>,
    #[prop(optional)] on_edit: Option<Callback<T::Key>>,
    #[prop(optional)] on_delete: Option<Callback<T::Key>>,
    /// Extra content on the right side of the toolbar.
    #[prop(optional)]
    toolbar: Option<ChildrenFn>,
) -> impl IntoView
where
    T: TableRow + Clone + Send + Sync + 'static,
    T::Key: Send + Sync + 'static,
{
    let query = RwSignal::new(TableQuery::default());
    let selection = RwSignal::new(Selection::<T::Key>::new());
    let confirm_delete = RwSignal::new(None::<T::Key>);

    let has_search = !search_fields.is_empty();
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let column_count = columns.len() + usize::from(selectable) + usize::from(has_actions);
    let empty_message = StoredValue::new(
        empty_message.unwrap_or_else(|| "Tidak ada data ditemukan.".to_string()),
    );

    let columns = StoredValue::new(columns);
    let filters = StoredValue::new(filters);
    let search_fields = StoredValue::new(search_fields);

    let table_view: Signal<TableView<T>> = Signal::derive(move || {
        query.with(|q| {
            data.with(|rows| {
                search_fields.with_value(|fields| {
                    filters.with_value(|defs| derive_view(rows, fields, defs, q, page_size))
                })
            })
        })
    });

    let page_keys = move || table_view.with(|v| v.rows.iter().map(TableRow::row_key).collect::<Vec<_>>());

    // ---- Header checkbox ----
    let header_state = Signal::derive(move || {
        let keys = page_keys();
        selection.with(|s| s.header_state(&keys))
    });
    let header_checkbox = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        let state = header_state.get();
        if let Some(input) = header_checkbox.get() {
            input.set_indeterminate(state == HeaderCheckboxState::Indeterminate);
        }
    });

    let handle_bulk_delete = move || {
        let Some(callback) = on_bulk_delete else {
            return;
        };
        let mut keys = Vec::new();
        selection.update(|s| keys = s.take_all());
        if !keys.is_empty() {
            log::info!("bulk delete of {} rows", keys.len());
            callback.run(keys);
        }
    };

    let placeholder = search_placeholder.unwrap_or_else(|| "Cari...".to_string());

    // ---- Toolbar ----
    let toolbar_view = view! {
        <div class="data-table__toolbar">
            <div class="data-table__toolbar-left">
                {has_search.then(|| view! {
                    <div class="data-table__search">
                        {icon("search")}
                        <input
                            type="text"
                            class="data-table__search-input"
                            placeholder=placeholder.clone()
                            prop:value=move || query.with(|q| q.search.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                query.update(|q| q.set_search(value));
                            }
                        />
                    </div>
                })}

                {filters.get_value().into_iter().map(|filter| {
                    let key = filter.key;
                    let label = filter.label.clone();
                    view! {
                        <select
                            class="data-table__filter"
                            prop:value=move || query.with(|q| q.filter_value(key).to_string())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                query.update(|q| q.set_filter(key, value));
                            }
                        >
                            <option value="">{format!("Semua {}", label)}</option>
                            {filter.options.into_iter().map(|opt| view! {
                                <option value=opt.value.clone()>{opt.label}</option>
                            }).collect_view()}
                        </select>
                    }
                }).collect_view()}

                <Show when=move || query.with(TableQuery::has_active_filters)>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| query.update(TableQuery::reset_filters)
                    >
                        {icon("x")}
                        "Reset"
                    </Button>
                </Show>
            </div>

            <div class="data-table__toolbar-right">
                {(selectable && on_bulk_delete.is_some()).then(|| view! {
                    <Show when=move || selection.with(|s| !s.is_empty())>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            class="button--danger"
                            on_click=move |_| handle_bulk_delete()
                        >
                            {icon("delete")}
                            {move || format!("Hapus {}", selection.with(Selection::len))}
                        </Button>
                    </Show>
                })}
                {toolbar.as_ref().map(|children| children())}
            </div>
        </div>
    };

    // ---- Header ----
    let header_cells = move || {
        columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let key = col.key;
                    let header = col.header;
                    let align_class = col.align.class();
                    let min_width = col.width.unwrap_or(100.0);
                    if col.sortable {
                        view! {
                            <TableHeaderCell resizable=false min_width=min_width class=align_class>
                                <div
                                    class="table__sortable-header"
                                    on:click=move |_| query.update(|q| q.toggle_sort(key))
                                >
                                    {header}
                                    <span class=move || {
                                        if query.with(|q| q.sort.direction_for(key).is_some()) {
                                            "table__sort-icon table__sort-icon--active"
                                        } else {
                                            "table__sort-icon"
                                        }
                                    }>
                                        {move || sort_indicator(query.with(|q| q.sort.direction_for(key)))}
                                    </span>
                                </div>
                            </TableHeaderCell>
                        }
                        .into_any()
                    } else {
                        view! {
                            <TableHeaderCell resizable=false min_width=min_width class=align_class>
                                {header}
                            </TableHeaderCell>
                        }
                        .into_any()
                    }
                })
                .collect_view()
        })
    };

    // ---- Row actions ----
    let actions_cell = move |key: T::Key| {
        let key_for_edit = key.clone();
        let key_for_confirm = key.clone();
        let key_for_yes = key.clone();
        let is_confirming = move || confirm_delete.with(|c| c.as_ref() == Some(&key));
        view! {
            <TableCell class="table__cell--actions">
                <Show
                    when=is_confirming
                    fallback=move || {
                        let key_for_edit = key_for_edit.clone();
                        let key_for_confirm = key_for_confirm.clone();
                        view! {
                            <div class="table__actions">
                                {on_edit.map(|cb| {
                                    let key = key_for_edit.clone();
                                    view! {
                                        <button
                                            class="button button--icon"
                                            title="Edit"
                                            on:click=move |_| cb.run(key.clone())
                                        >
                                            {icon("edit")}
                                        </button>
                                    }
                                })}
                                {on_delete.is_some().then(|| {
                                    let key = key_for_confirm.clone();
                                    view! {
                                        <button
                                            class="button button--icon button--danger"
                                            title="Hapus"
                                            on:click=move |_| confirm_delete.set(Some(key.clone()))
                                        >
                                            {icon("delete")}
                                        </button>
                                    }
                                })}
                            </div>
                        }
                    }
                >
                    {
                        let key = key_for_yes.clone();
                        view! {
                            <div class="table__confirm">
                                <span class="table__confirm-text">"Hapus?"</span>
                                <button
                                    class="button button--small button--danger"
                                    on:click=move |_| {
                                        confirm_delete.set(None);
                                        selection.update(|s| s.remove(&key));
                                        if let Some(cb) = on_delete {
                                            cb.run(key.clone());
                                        }
                                    }
                                >
                                    "Ya"
                                </button>
                                <button
                                    class="button button--small button--ghost"
                                    on:click=move |_| confirm_delete.set(None)
                                >
                                    "Tidak"
                                </button>
                            </div>
                        }
                    }
                </Show>
            </TableCell>
        }
    };

    // ---- Body ----
    let body_rows = move || {
        let rows = table_view.with(|v| v.rows.clone());
        if rows.is_empty() {
            return view! {
                <TableRow>
                    <TableCell attr:colspan=column_count.to_string()>
                        <div class="data-table__empty">
                            <span>{empty_message.get_value()}</span>
                            <Show when=move || query.with(TableQuery::has_active_filters)>
                                <button
                                    class="button button--link"
                                    on:click=move |_| query.update(TableQuery::reset_filters)
                                >
                                    "Reset filter"
                                </button>
                            </Show>
                        </div>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        rows.into_iter()
            .map(|row| {
                let key = row.row_key();
                let key_for_checked = key.clone();
                let key_for_toggle = key.clone();
                let key_for_class = key.clone();
                let cells = columns.with_value(|cols| {
                    cols.iter()
                        .map(|col| {
                            let content = match col.cell {
                                Some(render) => render(&row),
                                None => row.field(col.key).display().into_any(),
                            };
                            view! {
                                <TableCell class=col.align.class()>
                                    <TableCellLayout truncate=true>{content}</TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view()
                });
                view! {
                    <TableRow class=Signal::derive(move || {
                        if selection.with(|s| s.contains(&key_for_class)) {
                            "table__row table__row--selected".to_string()
                        } else {
                            "table__row".to_string()
                        }
                    })>
                        {selectable.then(|| view! {
                            <TableCell class="table__cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    prop:checked=move || selection.with(|s| s.contains(&key_for_checked))
                                    on:change=move |_| selection.update(|s| s.toggle(key_for_toggle.clone()))
                                />
                            </TableCell>
                        })}
                        {cells}
                        {has_actions.then(|| actions_cell(key.clone()))}
                    </TableRow>
                }
                .into_any()
            })
            .collect_view()
            .into_any()
    };

    // ---- Footer ----
    let pager = move || {
        let (total, current) = table_view.with(|v| (v.total_pages, v.page));
        page_numbers(total, current)
            .into_iter()
            .map(|item| match item {
                PageItem::Page(p) => view! {
                    <button
                        class="pagination-btn"
                        class:pagination-btn--active=p == current
                        on:click=move |_| query.update(|q| q.set_page(p))
                    >
                        {p.to_string()}
                    </button>
                }
                .into_any(),
                PageItem::Ellipsis => view! { <span class="pagination-ellipsis">"..."</span> }.into_any(),
            })
            .collect_view()
    };

    view! {
        <div class="data-table">
            {toolbar_view}

            <div class="data-table__scroll">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {selectable.then(|| view! {
                                <TableHeaderCell resizable=false class="fixed-checkbox-column">
                                    <input
                                        node_ref=header_checkbox
                                        type="checkbox"
                                        class="table__checkbox"
                                        prop:checked=move || header_state.get() == HeaderCheckboxState::Checked
                                        on:change=move |_| {
                                            let keys = page_keys();
                                            selection.update(|s| s.toggle_page(&keys));
                                        }
                                    />
                                </TableHeaderCell>
                            })}
                            {header_cells}
                            {has_actions.then(|| view! {
                                <TableHeaderCell resizable=false min_width=90.0 class="table__cell--actions">
                                    "Aksi"
                                </TableHeaderCell>
                            })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {body_rows}
                    </TableBody>
                </Table>
            </div>

            <div class="data-table__footer">
                <span class="data-table__range">
                    {move || table_view.with(|v| {
                        format!("Menampilkan {} – {} dari {}", v.range_start(), v.range_end(), v.filtered_count)
                    })}
                </span>
                <div class="pagination-controls">
                    <button
                        class="pagination-btn"
                        title="Sebelumnya"
                        disabled=move || !table_view.with(TableView::has_prev)
                        on:click=move |_| {
                            let page = table_view.with(|v| v.page);
                            query.update(|q| q.set_page(page.saturating_sub(1)));
                        }
                    >
                        {icon("chevron-left")}
                    </button>
                    {pager}
                    <button
                        class="pagination-btn"
                        title="Berikutnya"
                        disabled=move || !table_view.with(TableView::has_next)
                        on:click=move |_| {
                            let page = table_view.with(|v| v.page);
                            query.update(|q| q.set_page(page + 1));
                        }
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            </div>
        </div>
    }
}
