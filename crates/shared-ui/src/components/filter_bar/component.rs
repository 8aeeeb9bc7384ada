use dioxus::prelude::*;
use shared_types::{
    parse_filter_date, FilterDescriptor, FilterKind, FilterOption, FilterValue, FilterValues,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::button::{Button, ButtonVariant};
use crate::components::checkbox::Checkbox;
use crate::components::form_select::FormSelect;
use crate::components::input::Input;
use crate::table::selection::toggle;
use crate::table::use_debounce;

/// Row of filter controls, one per descriptor.
///
/// The bar owns its filter values. `initial_filters` seeds them on mount and
/// replaces them whenever the caller passes a different map. Every change,
/// including "Clear all", reports the complete pruned map.
#[component]
pub fn FilterBar(
    filters: Vec<FilterDescriptor>,
    #[props(default)] initial_filters: FilterValues,
    #[props(default = 500)] debounce_ms: u64,
    #[props(default)] on_filter_change: Option<EventHandler<FilterValues>>,
) -> Element {
    let mut values = use_signal(|| initial_filters.clone());
    // Bumped whenever the values are replaced wholesale; text filters drop
    // their pending keystrokes when it changes.
    let mut reset = use_signal(|| 0u64);

    use_effect(use_reactive((&initial_filters,), move |(seed,)| {
        if *values.peek() != seed {
            tracing::debug!(active = seed.active_count(), "filters re-seeded");
            values.set(seed);
            *reset.write() += 1;
        }
    }));

    let update = move |id: String, value: Option<FilterValue>| {
        let mut next = values.peek().clone();
        next.set(id.clone(), value);
        tracing::debug!(filter = %id, active = next.active_count(), "filters changed");
        values.set(next.clone());
        if let Some(handler) = &on_filter_change {
            handler.call(next);
        }
    };

    let clear_all = move |_: MouseEvent| {
        tracing::debug!("filters cleared");
        values.set(FilterValues::new());
        *reset.write() += 1;
        if let Some(handler) = &on_filter_change {
            handler.call(FilterValues::new());
        }
    };

    let current = values.read().clone();
    let active = current.active_count();
    let generation = reset();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "filter-bar",
            for descriptor in filters.iter() {
                FilterField {
                    key: "{descriptor.id}",
                    descriptor: descriptor.clone(),
                    value: current.get(&descriptor.id).cloned().unwrap_or(FilterValue::Null),
                    debounce_ms: debounce_ms,
                    reset: generation,
                    on_change: {
                        let id = descriptor.id.clone();
                        let mut update = update;
                        move |value: Option<FilterValue>| update(id.clone(), value)
                    },
                }
            }
            div { class: "filter-bar-actions",
                if active > 0 {
                    Badge { variant: BadgeVariant::Primary, "{active} active" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Clear all filters",
                    disabled: current.is_empty(),
                    onclick: clear_all,
                    "Clear all"
                }
            }
        }
    }
}

/// Label plus the control matching the descriptor's kind. Unknown kinds get
/// the label only.
#[component]
fn FilterField(
    descriptor: FilterDescriptor,
    value: FilterValue,
    debounce_ms: u64,
    reset: u64,
    on_change: EventHandler<Option<FilterValue>>,
) -> Element {
    let placeholder = descriptor
        .placeholder
        .clone()
        .unwrap_or_else(|| format!("Filter by {}", descriptor.label.to_lowercase()));

    let control = match descriptor.kind {
        Some(FilterKind::Text) => Some(rsx! {
            TextFilter {
                value: value.input_text(),
                placeholder: placeholder,
                clear_label: format!("Clear {}", descriptor.label.to_lowercase()),
                debounce_ms: debounce_ms,
                reset: reset,
                on_change: on_change,
            }
        }),
        Some(FilterKind::Number) => Some(rsx! {
            Input {
                input_type: "number",
                value: value.input_text(),
                placeholder: placeholder,
                on_input: move |evt: FormEvent| {
                    on_change.call(evt.value().trim().parse::<f64>().ok().map(FilterValue::Number));
                },
            }
        }),
        Some(FilterKind::Date) => Some(rsx! {
            Input {
                input_type: "date",
                value: value.input_text(),
                on_input: move |evt: FormEvent| {
                    on_change.call(parse_filter_date(&evt.value()).map(FilterValue::Date));
                },
            }
        }),
        Some(FilterKind::DateRange) => Some(rsx! {
            DateRangeFilter { value: value.clone(), on_change: on_change }
        }),
        Some(FilterKind::Select) => Some(rsx! {
            FormSelect {
                value: value.input_text(),
                options: descriptor.options.clone(),
                empty_label: "All".to_string(),
                aria_label: "{descriptor.label}",
                on_select: move |picked: String| {
                    on_change.call((!picked.is_empty()).then_some(FilterValue::Text(picked)));
                },
            }
        }),
        Some(FilterKind::MultiSelect) => Some(rsx! {
            MultiSelectFilter {
                options: descriptor.options.clone(),
                value: value.clone(),
                on_change: on_change,
            }
        }),
        Some(FilterKind::Unsupported) | None => None,
    };

    rsx! {
        div { class: "filter-field", "data-filter": "{descriptor.id}",
            label { class: "filter-label", "{descriptor.label}" }
            {control}
        }
    }
}

/// Free-text filter. Keystrokes update the field immediately; the value is
/// reported once typing pauses for `debounce_ms`.
#[component]
fn TextFilter(
    value: String,
    #[props(default)] placeholder: String,
    #[props(default)] clear_label: String,
    debounce_ms: u64,
    #[props(default)] reset: u64,
    on_change: EventHandler<Option<FilterValue>>,
) -> Element {
    let mut draft = use_signal(|| value.clone());
    let last_emitted = use_hook(|| Rc::new(RefCell::new(value.clone())));

    let emitted = last_emitted.clone();
    let on_settle = use_callback(move |text: String| {
        *emitted.borrow_mut() = text.clone();
        on_change.call((!text.is_empty()).then_some(FilterValue::Text(text)));
    });
    let debounce = use_debounce(Duration::from_millis(debounce_ms), on_settle);

    // A value we did not emit, or a reset of the whole bar, came from
    // outside: drop the pending keystrokes and show the value.
    let pending = debounce.clone();
    let seen = last_emitted.clone();
    let last_reset = use_hook(|| Rc::new(Cell::new(reset)));
    use_effect(use_reactive((&value, &reset), move |(value, reset)| {
        let was_reset = last_reset.replace(reset) != reset;
        if was_reset || *seen.borrow() != value {
            pending.cancel();
            *seen.borrow_mut() = value.clone();
            draft.set(value);
        }
    }));

    let cancel = debounce.clone();
    let cleared = last_emitted.clone();

    rsx! {
        Input {
            value: draft(),
            placeholder: placeholder,
            clear_label: clear_label,
            on_input: move |evt: FormEvent| {
                let text = evt.value();
                draft.set(text.clone());
                debounce.schedule(text);
            },
            on_clear: move |_| {
                cancel.cancel();
                cleared.borrow_mut().clear();
                draft.set(String::new());
                on_change.call(None);
            },
        }
    }
}

#[component]
fn DateRangeFilter(value: FilterValue, on_change: EventHandler<Option<FilterValue>>) -> Element {
    let (from, to) = match &value {
        FilterValue::DateRange { from, to } => (
            from.map(|d| d.format(shared_types::FILTER_DATE_FORMAT).to_string())
                .unwrap_or_default(),
            to.map(|d| d.format(shared_types::FILTER_DATE_FORMAT).to_string())
                .unwrap_or_default(),
        ),
        _ => (String::new(), String::new()),
    };
    let keep_to = to.clone();
    let keep_from = from.clone();

    rsx! {
        div { class: "filter-date-range",
            Input {
                input_type: "date",
                value: from,
                aria_label: "From",
                on_input: move |evt: FormEvent| {
                    on_change.call(FilterValue::date_range(&evt.value(), &keep_to));
                },
            }
            span { class: "filter-date-range-separator", "to" }
            Input {
                input_type: "date",
                value: to,
                aria_label: "To",
                on_input: move |evt: FormEvent| {
                    on_change.call(FilterValue::date_range(&keep_from, &evt.value()));
                },
            }
        }
    }
}

#[component]
fn MultiSelectFilter(
    options: Vec<FilterOption>,
    value: FilterValue,
    on_change: EventHandler<Option<FilterValue>>,
) -> Element {
    let selected = match value {
        FilterValue::List(items) => items,
        _ => Vec::new(),
    };

    let choices = options.into_iter().map(|opt| {
        let checked = selected.contains(&opt.value);
        let current = selected.clone();
        let option_value = opt.value.clone();
        rsx! {
            label { key: "{opt.value}", class: "filter-multiselect-option",
                Checkbox {
                    checked: checked,
                    on_change: move |_| {
                        let next = toggle(&current, &option_value);
                        on_change.call((!next.is_empty()).then_some(FilterValue::List(next)));
                    },
                }
                "{opt.label}"
            }
        }
    });

    rsx! {
        div { class: "filter-multiselect", {choices} }
    }
}
