use crate::domain::a001_csv_chat::ui::chat::CsvChatVm;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let vm = leptos::context::use_context::<CsvChatVm>().expect("CsvChatVm context not found");
    let is_open = move || vm.session.with(|s| s.sidebar_open);

    view! {
        <aside data-zone="left" class="left sidebar" class:hidden=move || !is_open()>
            {children()}
        </aside>
    }
}
