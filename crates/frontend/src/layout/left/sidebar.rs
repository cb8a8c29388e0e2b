//! Sidebar: выбор модели, сводка по датасету, загрузка по пути, сброс сессии

use crate::domain::a001_csv_chat::ui::chat::CsvChatVm;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use contracts::domain::a001_csv_session::{DatasetSummary, MODELS};
use leptos::prelude::*;
use thaw::*;

/// Сколько имён колонок показывать до «и ещё N»
const MAX_VISIBLE_COLUMNS: usize = 12;

#[component]
fn DatasetCard(summary: DatasetSummary) -> impl IntoView {
    let hidden = summary.column_names.len().saturating_sub(MAX_VISIBLE_COLUMNS);
    let columns = summary
        .column_names
        .iter()
        .take(MAX_VISIBLE_COLUMNS)
        .cloned()
        .collect::<Vec<_>>();

    view! {
        <div class="dataset-card">
            <div class="dataset-card__title">
                {icon("database")}
                <span>{summary.filename.clone().unwrap_or_else(|| "dataset".to_string())}</span>
            </div>
            <div class="dataset-card__meta">
                {format!("{} rows × {} columns", summary.rows, summary.columns)}
            </div>
            <div class="dataset-card__columns">
                {columns
                    .into_iter()
                    .map(|c| view! { <span class="dataset-card__column">{c}</span> })
                    .collect_view()}
                {(hidden > 0).then(|| view! {
                    <span class="dataset-card__more">{format!("+{} more", hidden)}</span>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let vm = use_context::<CsvChatVm>().expect("CsvChatVm not found");
    let server_path = RwSignal::new(String::new());

    let selected_model = Signal::derive(move || vm.session.with(|s| s.selected_model.clone()));
    let is_loading_dataset = Signal::derive(move || vm.session.with(|s| s.is_uploading()));
    let is_resetting = Signal::derive(move || vm.session.with(|s| s.reset_in_flight));

    let submit_path = move || {
        vm.load_path(server_path.get_untracked());
        server_path.set(String::new());
    };

    view! {
        <div class="sidebar-header">
            <div class="sidebar-logo">"🚀"</div>
            <h2 class="sidebar-title">"CSV Assistant"</h2>
        </div>

        <div class="sidebar-content">
            <Select
                label="Model"
                id="model-select"
                value=selected_model
                options=MODELS
                on_change=Callback::new(move |model: String| vm.select_model(model))
            />

            {move || vm.session.with(|s| s.dataset.clone()).map(|summary| view! {
                <DatasetCard summary=summary />
            })}

            <div class="form__group">
                <label class="form__label" for="server-path">"Load from server path"</label>
                <input
                    id="server-path"
                    class="form__input"
                    placeholder="/data/sales.csv"
                    prop:value=move || server_path.get()
                    disabled=move || is_loading_dataset.get()
                    on:input=move |ev| server_path.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit_path();
                        }
                    }
                />
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    disabled=is_loading_dataset
                    on_click=move |_| submit_path()
                >
                    "Load"
                </Button>
            </div>
        </div>

        <div class="sidebar-footer">
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=is_resetting
                on_click=move |_| vm.reset()
            >
                {icon("refresh")}
                " Reset Session"
            </Button>
        </div>
    }
}
