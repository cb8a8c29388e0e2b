use leptos::prelude::*;

/// Выпадающий список из фиксированного набора строк (value == label)
#[component]
pub fn Select(
    label: &'static str,
    id: &'static str,
    /// Текущее значение
    #[prop(into)]
    value: Signal<String>,
    options: &'static [&'static str],
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <select
                id=id
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|&option| {
                        let is_selected = move || value.with(|v| v.as_str() == option);
                        view! { <option value=option selected=is_selected>{option}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
