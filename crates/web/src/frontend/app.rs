//! Catalog page: toolbar, table and pager.

use leptos::*;

use catalog_query::SortDirection;

use crate::columns::cell_text;
use crate::frontend::filters::FilterDialog;
use crate::view::CatalogView;

/// Main application component.
#[component]
pub fn App(initial: CatalogView) -> impl IntoView {
    let state = create_rw_signal(initial);
    let dialog_open = create_memo(move |_| state.with(|v| v.is_filter_dialog_open()));

    view! {
        <div class="catalog">
            <Toolbar state=state/>
            <div class="table-wrap">
                <CatalogTable state=state/>
            </div>
            <Pager state=state/>
            {move || dialog_open.get().then(|| view! { <FilterDialog state=state/> })}
        </div>
    }
}

#[component]
fn Toolbar(state: RwSignal<CatalogView>) -> impl IntoView {
    view! {
        <div class="toolbar">
            <button title="Filter products" on:click=move |_| state.update(|v| v.open_filters())>
                "Filter"
            </button>
            <button
                title="Show or hide the category column"
                on:click=move |_| state.update(|v| {
                    v.toggle_category_column();
                })
            >
                "Group"
            </button>
            <span class="status">{move || state.with(|v| v.status_line())}</span>
        </div>
    }
}

#[component]
fn CatalogTable(state: RwSignal<CatalogView>) -> impl IntoView {
    let header = move || {
        state.with(|v| {
            let sort = v.sort();
            v.visibility()
                .visible_defs()
                .map(|def| {
                    let column = def.column;
                    let marker = match sort {
                        Some(spec) if spec.column == column => match spec.direction {
                            SortDirection::Ascending => " ▲",
                            SortDirection::Descending => " ▼",
                        },
                        _ => "",
                    };
                    view! {
                        <th
                            data-column=column.key()
                            class:sortable=def.sortable
                            on:click=move |_| {
                                if def.sortable {
                                    state.update(|v| v.toggle_sort(column));
                                }
                            }
                        >
                            {def.header}
                            {marker}
                        </th>
                    }
                })
                .collect_view()
        })
    };

    let rows = move || {
        state.with(|v| {
            let columns: Vec<_> = v.visibility().visible_defs().map(|d| d.column).collect();
            v.visible_rows()
                .into_iter()
                .map(|record| {
                    let cells = columns
                        .iter()
                        .map(|column| {
                            view! { <td data-column=column.key()>{cell_text(record, *column)}</td> }
                        })
                        .collect_view();
                    view! { <tr>{cells}</tr> }
                })
                .collect_view()
        })
    };

    let empty = move || {
        state.with(|v| v.result_len() == 0).then(|| {
            view! { <p class="empty">"No products match the current filters."</p> }
        })
    };

    view! {
        <table>
            <thead>
                <tr>{header}</tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
        {empty}
    }
}

#[component]
fn Pager(state: RwSignal<CatalogView>) -> impl IntoView {
    let page_buttons = move || {
        let (count, current) = state.with(|v| (v.page_count(), v.page_state().page_index() + 1));
        (1..=count)
            .map(|n| {
                view! {
                    <button
                        class:active=n == current
                        on:click=move |_| state.update(|v| v.go_to_page(n))
                    >
                        {n}
                    </button>
                }
            })
            .collect_view()
    };

    let size_options = state.with_untracked(|v| v.config().page_size_options.clone());

    view! {
        <div class="pager">
            <button
                disabled=move || state.with(|v| !v.page().has_previous())
                on:click=move |_| state.update(|v| v.previous_page())
            >
                "‹"
            </button>
            {page_buttons}
            <button
                disabled=move || state.with(|v| !v.page().has_next())
                on:click=move |_| state.update(|v| v.next_page())
            >
                "›"
            </button>
            <label>
                "Rows per page "
                <select
                    prop:value=move || state.with(|v| v.page_state().page_size().to_string())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        match value.parse::<usize>() {
                            Ok(size) => state.update(|v| {
                                if let Err(err) = v.set_page_size(size) {
                                    tracing::warn!(%err, "page size rejected");
                                }
                            }),
                            Err(_) => tracing::warn!(%value, "page size is not a number"),
                        }
                    }
                >
                    {size_options
                        .into_iter()
                        .map(|n| view! { <option value=n.to_string()>{n}</option> })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}
