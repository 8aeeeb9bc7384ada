use dioxus::prelude::*;

/// Single-line filter input; `input_type` picks the native control (text,
/// number, date).
///
/// With `on_clear`, a non-empty value gets a trailing clear button whose
/// title is `clear_label`.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: Option<EventHandler<FormEvent>>,
    #[props(default)] on_clear: Option<EventHandler<()>>,
    #[props(default = "Clear".to_string())] clear_label: String,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let clear = on_clear.filter(|_| !value.is_empty()).map(|handler| {
        rsx! {
            button {
                r#type: "button",
                class: "input-clear",
                title: clear_label,
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    handler.call(());
                },
                "×"
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-field",
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| {
                    if let Some(handler) = &on_input {
                        handler.call(evt);
                    }
                },
                ..merged,
            }
            {clear}
        }
    }
}
