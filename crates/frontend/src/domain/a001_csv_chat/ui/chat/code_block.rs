use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::code_highlight::highlight_python;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Подсвеченный Python-код с кнопкой копирования
#[component]
#[allow(non_snake_case)]
pub fn CodeBlock(code: String) -> impl IntoView {
    let copied = RwSignal::new(false);
    let highlighted = highlight_python(&code);

    let handle_copy = move |_| {
        copy_to_clipboard(&code, move || copied.set(true));
    };

    view! {
        <div class="code-block">
            <div class="code-block__header">
                <span class="code-block__lang">"python"</span>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=handle_copy
                >
                    {move || if copied.get() {
                        view! { {icon("check")} " Copied" }.into_any()
                    } else {
                        view! { {icon("copy")} " Copy" }.into_any()
                    }}
                </Button>
            </div>
            <pre class="code-block__body"><code inner_html=highlighted></code></pre>
        </div>
    }
}
