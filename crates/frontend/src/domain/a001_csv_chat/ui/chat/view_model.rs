//! CSV Chat - View Model

use super::model;
use crate::domain::a001_csv_chat::session::{reduce, Command, SessionEvent, SessionState};
use crate::layout::NotificationService;
use contracts::domain::a001_csv_session::RequestId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Держит снимок `SessionState` и выполняет команды reducer-а.
///
/// Предоставляется через context в `App`: его читают и сайдбар, и чат.
#[derive(Clone, Copy)]
pub struct CsvChatVm {
    pub session: RwSignal<SessionState>,
    notifications: NotificationService,
}

impl CsvChatVm {
    pub fn new(notifications: NotificationService) -> Self {
        Self {
            session: RwSignal::new(SessionState::default()),
            notifications,
        }
    }

    /// Применить событие и вернуть команду, если она есть
    fn dispatch(&self, event: SessionEvent) -> Option<Command> {
        let transition = self.session.with_untracked(|state| reduce(state, event));
        self.session.set(transition.state);
        if let Some(notice) = transition.notice {
            self.notifications.show(notice);
        }
        transition.command
    }

    pub fn set_input(&self, text: String) {
        self.dispatch(SessionEvent::InputChanged(text));
    }

    pub fn select_model(&self, model: String) {
        self.dispatch(SessionEvent::ModelSelected(model));
    }

    pub fn toggle_sidebar(&self) {
        self.dispatch(SessionEvent::SidebarToggled);
    }

    pub fn submit_question(&self) {
        let request_id = RequestId::new_v4();
        let Some(Command::Ask {
            request_id,
            request,
        }) = self.dispatch(SessionEvent::AskSubmitted { request_id })
        else {
            return;
        };

        let vm = *self;
        spawn_local(async move {
            let result = model::ask(&request).await;
            if let Err(e) = &result {
                log::warn!("ask {} failed: {}", request_id.as_string(), e);
            }
            vm.dispatch(SessionEvent::AskFinished { request_id, result });
        });
    }

    pub fn upload_file(&self, file: web_sys::File) {
        let file_name = file.name();
        if self.dispatch(SessionEvent::UploadStarted { file_name }) != Some(Command::UploadCsv) {
            return;
        }

        let vm = *self;
        spawn_local(async move {
            let result = model::upload_csv(file).await;
            if let Err(e) = &result {
                log::warn!("upload failed: {}", e);
            }
            vm.dispatch(SessionEvent::DatasetLoaded(result));
        });
    }

    pub fn load_path(&self, path: String) {
        let Some(Command::LoadCsv(request)) =
            self.dispatch(SessionEvent::LoadPathSubmitted { path })
        else {
            return;
        };

        let vm = *self;
        spawn_local(async move {
            let result = model::load_csv(&request).await;
            if let Err(e) = &result {
                log::warn!("load_csv failed: {}", e);
            }
            vm.dispatch(SessionEvent::DatasetLoaded(result));
        });
    }

    pub fn reset(&self) {
        if self.dispatch(SessionEvent::ResetRequested) != Some(Command::Reset) {
            return;
        }

        let vm = *self;
        spawn_local(async move {
            let result = model::reset().await;
            if let Err(e) = &result {
                log::warn!("reset failed: {}", e);
            }
            vm.dispatch(SessionEvent::ResetFinished(result));
        });
    }
}
