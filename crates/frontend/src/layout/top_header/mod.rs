//! TopHeader component - верхняя панель над чатом.
//!
//! Contains:
//! - Toggle button for the sidebar
//! - Name of the selected model

use crate::domain::a001_csv_chat::ui::chat::CsvChatVm;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let vm = leptos::context::use_context::<CsvChatVm>().expect("CsvChatVm not found");

    let is_sidebar_visible = move || vm.session.with(|s| s.sidebar_open);

    view! {
        <header class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=move |_| vm.toggle_sidebar()
                title=move || if is_sidebar_visible() { "Hide sidebar" } else { "Show sidebar" }
            >
                {move || if is_sidebar_visible() {
                    icon("panel-left-close")
                } else {
                    icon("panel-left-open")
                }}
            </button>
            <h1 class="top-header__title">
                {move || vm.session.with(|s| s.selected_model.clone())}
            </h1>
        </header>
    }
}
