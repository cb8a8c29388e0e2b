use leptos::prelude::*;

/// Textarea bound to a signal.
///
/// Uses `prop:value`, so clearing the signal clears the field.
#[component]
pub fn Textarea(
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Keydown handler (e.g. Enter to submit)
    #[prop(optional)]
    on_keydown: Option<Callback<web_sys::KeyboardEvent>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(1);

    view! {
        <textarea
            class=move || format!("form__textarea {}", additional_class())
            placeholder=textarea_placeholder
            disabled=move || disabled.get()
            rows=textarea_rows
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
            on:keydown=move |ev| {
                if let Some(handler) = on_keydown {
                    handler.run(ev);
                }
            }
        ></textarea>
    }
}
