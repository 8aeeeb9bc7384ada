use dioxus::prelude::*;

/// Native checkbox used for row selection and multi-select filters.
///
/// Always controlled: `on_change` receives the toggled value and the owner
/// decides whether `checked` follows.
#[component]
pub fn Checkbox(
    #[props(default)] checked: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_change: Option<EventHandler<bool>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "checkbox", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "checkbox",
            checked: checked,
            disabled: disabled,
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            onchange: move |_| {
                if let Some(handler) = &on_change {
                    handler.call(!checked);
                }
            },
            ..merged,
        }
    }
}
