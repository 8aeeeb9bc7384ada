use dioxus::prelude::*;
use shared_types::FilterOption;

/// Native `<select>` over a list of choices.
///
/// `empty_label` adds a leading choice with an empty value ("All"), which
/// select filters use to mean "no filter". `on_select` receives the chosen
/// value.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    options: Vec<FilterOption>,
    #[props(default)] empty_label: Option<String>,
    #[props(default)] label: String,
    #[props(default)] on_select: Option<EventHandler<String>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "form-select", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let empty = empty_label.map(|text| {
        rsx! {
            option { value: "", selected: value.is_empty(), "{text}" }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "form-select-wrapper",
            if !label.is_empty() {
                span { class: "form-select-label", "{label}" }
            }
            select {
                value: value.clone(),
                onchange: move |evt: Event<FormData>| {
                    if let Some(handler) = &on_select {
                        handler.call(evt.value());
                    }
                },
                ..merged,
                {empty}
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
