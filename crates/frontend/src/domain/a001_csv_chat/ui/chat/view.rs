//! CSV Chat - View Component

use super::turn_view::TurnView;
use super::view_model::CsvChatVm;
use crate::shared::components::ui::Textarea;
use crate::shared::icons::icon;
use contracts::domain::a001_csv_session::ConversationTurn;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CsvChat() -> impl IntoView {
    let vm = use_context::<CsvChatVm>().expect("CsvChatVm not found");
    let chat_area_ref = NodeRef::<leptos::html::Main>::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let turns = Memo::new(move |_| vm.session.with(|s| s.turns.clone()));
    let input_text = Signal::derive(move || vm.session.with(|s| s.input_text.clone()));
    let submit_blocked = Signal::derive(move || vm.session.with(|s| !s.can_submit()));

    // Прокрутка вниз при любом изменении истории
    Effect::new(move |_| {
        turns.track();
        if let Some(container) = chat_area_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_file_change = move |ev: leptos::ev::Event| {
        use wasm_bindgen::JsCast;
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            log!("📎 Selected file: {}", file.name());
            vm.upload_file(file);
        }
        // Повторный выбор того же файла тоже должен срабатывать
        input.set_value("");
    };

    let open_file_dialog = move |_| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let handle_keydown = Callback::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            vm.submit_question();
        }
    });

    view! {
        <main class="chat-area" node_ref=chat_area_ref>
            <Show when=move || turns.with(|t| t.is_empty())>
                <div class="welcome-message">
                    <h1>"CSV Data Assistant"</h1>
                    <p>"Upload a CSV file and ask questions to analyze your data."</p>
                </div>
            </Show>
            <For
                each=move || turns.get().into_iter().enumerate()
                key=|(index, turn): &(usize, ConversationTurn)| (*index, turn.is_pending())
                let:item
            >
                <TurnView turn=item.1 />
            </For>
        </main>

        <footer class="input-area">
            <div class="input-form">
                <input
                    type="file"
                    accept=".csv"
                    hidden=true
                    node_ref=file_input_ref
                    on:change=handle_file_change
                />
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=open_file_dialog
                    attr:title="Upload CSV"
                >
                    {icon("attach")}
                </Button>

                {move || {
                    vm.session.with(|s| {
                        if let Some(name) = s.upload_in_flight.clone() {
                            Some(view! {
                                <div class="uploaded-file-chip uploaded-file-chip--busy">
                                    <Spinner size=SpinnerSize::ExtraTiny />
                                    {name}
                                </div>
                            }.into_any())
                        } else {
                            s.uploaded_file_name.clone().map(|name| view! {
                                <div class="uploaded-file-chip">
                                    {icon("file-csv")}
                                    {name}
                                </div>
                            }.into_any())
                        }
                    })
                }}

                <Textarea
                    value=input_text
                    on_input=Callback::new(move |text: String| vm.set_input(text))
                    on_keydown=handle_keydown
                    placeholder="Ask a question..."
                    disabled=submit_blocked
                    class="input-form__textarea"
                />

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=submit_blocked
                    on_click=move |_| vm.submit_question()
                    attr:title="Send"
                >
                    {icon("send")}
                </Button>
            </div>
        </footer>
    }
}
