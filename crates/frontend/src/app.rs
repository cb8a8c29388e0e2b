use crate::domain::a001_csv_chat::ui::chat::{CsvChat, CsvChatVm};
use crate::layout::left::Sidebar;
use crate::layout::{NotificationService, Shell};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Notifications first: the chat view model reports through them.
    let notifications = NotificationService::new();
    provide_context(notifications);

    // One session per page; it is gone on reload.
    provide_context(CsvChatVm::new(notifications));

    view! {
        <ConfigProvider>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <CsvChat /> }.into_any()
            />
        </ConfigProvider>
    }
}
