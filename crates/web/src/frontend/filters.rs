//! "Filter Products" dialog.
//!
//! Edits go to the view's draft criteria; nothing changes in the table until
//! Apply is pressed.

use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;

use catalog_core::Bounds;

use crate::view::CatalogView;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

fn draft_price(view: &CatalogView, slider: Bounds<f64>) -> (f64, f64) {
    view.draft()
        .and_then(|d| d.price_range)
        .map(|r| (*r.min(), *r.max()))
        .unwrap_or((*slider.min(), *slider.max()))
}

fn draft_days(view: &CatalogView) -> (NaiveDate, NaiveDate) {
    view.draft()
        .and_then(|d| d.created_range)
        .map(|r| (r.min().date_naive(), r.max().date_naive()))
        .unwrap_or_else(|| (DateTime::<Utc>::UNIX_EPOCH.date_naive(), Utc::now().date_naive()))
}

#[component]
pub fn FilterDialog(state: RwSignal<CatalogView>) -> impl IntoView {
    // Labels are memoized by the catalog; reading them once per open is enough.
    let (categories, subcategories, slider) = state.with_untracked(|v| {
        (
            v.labels().categories().map(str::to_string).collect::<Vec<_>>(),
            v.labels().subcategories().map(str::to_string).collect::<Vec<_>>(),
            v.config().price_slider,
        )
    });

    let set_price = move |lo: Option<f64>, hi: Option<f64>| {
        state.update(|v| {
            let (cur_lo, cur_hi) = draft_price(v, slider);
            v.set_draft_price_range(lo.unwrap_or(cur_lo), hi.unwrap_or(cur_hi));
        })
    };

    let set_days = move |from: Option<NaiveDate>, to: Option<NaiveDate>| {
        state.update(|v| {
            let (cur_from, cur_to) = draft_days(v);
            let (from, to) = (from.unwrap_or(cur_from), to.unwrap_or(cur_to));
            if let Err(err) = v.set_draft_created_days(from, to) {
                tracing::warn!(%err, "date range rejected");
            }
        })
    };

    let parse_day = |raw: String| NaiveDate::parse_from_str(&raw, DATE_INPUT_FORMAT).ok();

    let category_options = categories
        .into_iter()
        .map(|label| {
            let checked_label = label.clone();
            let toggle_label = label.clone();
            view! {
                <label class="option">
                    <input
                        type="checkbox"
                        prop:checked=move || {
                            state.with(|v| v.draft().is_some_and(|d| d.categories.contains(&checked_label)))
                        }
                        on:change=move |_| state.update(|v| {
                            v.toggle_draft_category(&toggle_label);
                        })
                    />
                    {label}
                </label>
            }
        })
        .collect_view();

    let subcategory_options = subcategories
        .into_iter()
        .map(|label| {
            let checked_label = label.clone();
            let toggle_label = label.clone();
            view! {
                <label class="option">
                    <input
                        type="checkbox"
                        prop:checked=move || {
                            state.with(|v| v.draft().is_some_and(|d| d.subcategories.contains(&checked_label)))
                        }
                        on:change=move |_| state.update(|v| {
                            v.toggle_draft_subcategory(&toggle_label);
                        })
                    />
                    {label}
                </label>
            }
        })
        .collect_view();

    let slider_min = slider.min().to_string();
    let slider_max = slider.max().to_string();

    view! {
        <div class="dialog-backdrop">
            <div class="dialog" role="dialog" aria-labelledby="filter-title">
                <h2 id="filter-title">"Filter Products"</h2>

                <label>
                    "Search by Name"
                    <input
                        type="text"
                        prop:value=move || state.with(|v| v.draft().map(|d| d.name.clone()).unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|v| {
                                v.set_draft_name(value);
                            });
                        }
                    />
                </label>

                <fieldset>
                    <legend>"Category"</legend>
                    {category_options}
                </fieldset>

                <fieldset>
                    <legend>"Subcategory"</legend>
                    {subcategory_options}
                </fieldset>

                <fieldset>
                    <legend>
                        "Price Range "
                        {move || state.with(|v| {
                            let (lo, hi) = draft_price(v, slider);
                            format!("({lo:.0} to {hi:.0})")
                        })}
                    </legend>
                    <input
                        type="range"
                        min=slider_min.clone()
                        max=slider_max.clone()
                        prop:value=move || state.with(|v| draft_price(v, slider).0.to_string())
                        on:input=move |ev| set_price(event_target_value(&ev).parse().ok(), None)
                    />
                    <input
                        type="range"
                        min=slider_min
                        max=slider_max
                        prop:value=move || state.with(|v| draft_price(v, slider).1.to_string())
                        on:input=move |ev| set_price(None, event_target_value(&ev).parse().ok())
                    />
                </fieldset>

                <fieldset>
                    <legend>"Created At Range"</legend>
                    <input
                        type="date"
                        prop:value=move || state.with(|v| draft_days(v).0.format(DATE_INPUT_FORMAT).to_string())
                        on:input=move |ev| {
                            if let Some(day) = parse_day(event_target_value(&ev)) {
                                set_days(Some(day), None);
                            }
                        }
                    />
                    <input
                        type="date"
                        prop:value=move || state.with(|v| draft_days(v).1.format(DATE_INPUT_FORMAT).to_string())
                        on:input=move |ev| {
                            if let Some(day) = parse_day(event_target_value(&ev)) {
                                set_days(None, Some(day));
                            }
                        }
                    />
                </fieldset>

                <div class="actions">
                    <button on:click=move |_| state.update(|v| v.cancel_filters())>"Cancel"</button>
                    <button on:click=move |_| state.update(|v| v.apply_filters())>"Apply"</button>
                </div>
            </div>
        </div>
    }
}
