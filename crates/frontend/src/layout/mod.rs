pub mod left;
pub mod notification_service;
pub mod top_header;

pub use notification_service::{NotificationDialog, NotificationService};

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +-----------+------------------------------+
/// |           |          TopHeader           |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |     Content (chat + input)   |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    // Left берёт видимость из CsvChatVm сам

    view! {
        <div class="app-layout">
            <left::Left>
                {left()}
            </left::Left>

            <div class="app-main">
                <TopHeader />
                {center()}
            </div>

            <NotificationDialog />
        </div>
    }
}
