//! CSV Chat - Session state and reducer
//!
//! Вся логика экрана — чистая функция `reduce(&SessionState, SessionEvent)`.
//! Она возвращает новый снимок состояния, команду для бэкенда и уведомление.
//! HTTP-вызовы выполняет view model, а их результат приходит обратно событием.

use crate::shared::api_error::ApiError;
use contracts::domain::a001_csv_session::{
    default_model, AskRequest, AskResponse, ConversationTurn, DatasetLoadResponse,
    DatasetSummary, LoadCsvRequest, RequestId,
};

/// Состояние экрана. Живёт только в памяти вкладки.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub input_text: String,
    pub turns: Vec<ConversationTurn>,
    pub ask_in_flight: Option<RequestId>,
    /// Имя файла (или путь), который сейчас загружается
    pub upload_in_flight: Option<String>,
    pub reset_in_flight: bool,
    pub selected_model: String,
    pub sidebar_open: bool,
    pub uploaded_file_name: Option<String>,
    pub dataset: Option<DatasetSummary>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            input_text: String::new(),
            turns: Vec::new(),
            ask_in_flight: None,
            upload_in_flight: None,
            reset_in_flight: false,
            selected_model: default_model().to_string(),
            sidebar_open: true,
            uploaded_file_name: None,
            dataset: None,
        }
    }
}

impl SessionState {
    pub fn is_uploading(&self) -> bool {
        self.upload_in_flight.is_some()
    }

    pub fn is_asking(&self) -> bool {
        self.ask_in_flight.is_some()
    }

    /// Можно ли сейчас отправить вопрос (без учёта текста)
    pub fn can_submit(&self) -> bool {
        !self.is_asking() && !self.is_uploading()
    }

    fn clear_conversation(&mut self) {
        self.turns.clear();
    }

    fn clear_dataset(&mut self) {
        self.uploaded_file_name = None;
        self.dataset = None;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    InputChanged(String),
    ModelSelected(String),
    SidebarToggled,
    UploadStarted { file_name: String },
    LoadPathSubmitted { path: String },
    DatasetLoaded(Result<DatasetLoadResponse, ApiError>),
    AskSubmitted { request_id: RequestId },
    AskFinished {
        request_id: RequestId,
        result: Result<AskResponse, ApiError>,
    },
    ResetRequested,
    ResetFinished(Result<(), ApiError>),
}

/// Запрос к бэкенду, который нужно выполнить после перехода
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Файл держит view model, в состоянии только имя
    UploadCsv,
    LoadCsv(LoadCsvRequest),
    Ask {
        request_id: RequestId,
        request: AskRequest,
    },
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Блокирующее уведомление для пользователя
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: SessionState,
    pub command: Option<Command>,
    pub notice: Option<Notice>,
}

impl Transition {
    fn unchanged(state: &SessionState) -> Self {
        Self::to(state.clone())
    }

    fn to(state: SessionState) -> Self {
        Self {
            state,
            command: None,
            notice: None,
        }
    }

    fn with_command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

pub const UPLOAD_SUCCESS: &str = "CSV uploaded and loaded successfully!";
const UPLOAD_FALLBACK: &str = "Upload failed";
const ASK_FALLBACK: &str = "API request failed";
const RESET_FALLBACK: &str = "Reset failed";

pub fn reduce(state: &SessionState, event: SessionEvent) -> Transition {
    match event {
        SessionEvent::InputChanged(text) => {
            let mut next = state.clone();
            next.input_text = text;
            Transition::to(next)
        }
        SessionEvent::ModelSelected(model) => {
            let mut next = state.clone();
            next.selected_model = model;
            Transition::to(next)
        }
        SessionEvent::SidebarToggled => {
            let mut next = state.clone();
            next.sidebar_open = !next.sidebar_open;
            Transition::to(next)
        }
        SessionEvent::UploadStarted { file_name } => {
            if state.is_uploading() {
                return Transition::unchanged(state);
            }
            let mut next = state.clone();
            next.upload_in_flight = Some(file_name);
            Transition::to(next).with_command(Command::UploadCsv)
        }
        SessionEvent::LoadPathSubmitted { path } => {
            let path = path.trim();
            if path.is_empty() || state.is_uploading() {
                return Transition::unchanged(state);
            }
            let mut next = state.clone();
            next.upload_in_flight = Some(path.to_string());
            Transition::to(next).with_command(Command::LoadCsv(LoadCsvRequest::single(path)))
        }
        SessionEvent::DatasetLoaded(result) => dataset_loaded(state, result),
        SessionEvent::AskSubmitted { request_id } => ask_submitted(state, request_id),
        SessionEvent::AskFinished { request_id, result } => {
            ask_finished(state, request_id, result)
        }
        SessionEvent::ResetRequested => {
            if state.reset_in_flight {
                return Transition::unchanged(state);
            }
            let mut next = state.clone();
            next.reset_in_flight = true;
            Transition::to(next).with_command(Command::Reset)
        }
        SessionEvent::ResetFinished(result) => {
            let mut next = state.clone();
            next.reset_in_flight = false;
            next.clear_conversation();
            next.clear_dataset();
            let transition = Transition::to(next);
            match result {
                Ok(()) => transition,
                Err(e) => transition.with_notice(Notice::error(format!(
                    "Error resetting session: {}",
                    e.user_message(RESET_FALLBACK)
                ))),
            }
        }
    }
}

fn dataset_loaded(
    state: &SessionState,
    result: Result<DatasetLoadResponse, ApiError>,
) -> Transition {
    let mut next = state.clone();
    let source = next.upload_in_flight.take();
    match result {
        Ok(response) => {
            let summary = response.first_file().cloned();
            let file_name = summary
                .as_ref()
                .and_then(|s| s.filename.clone())
                .or_else(|| source.as_deref().map(basename))
                .unwrap_or_default();
            let text = match &summary {
                Some(s) => format!(
                    "{} ({} rows × {} columns)",
                    UPLOAD_SUCCESS, s.rows, s.columns
                ),
                None => UPLOAD_SUCCESS.to_string(),
            };
            next.clear_conversation();
            next.uploaded_file_name = Some(file_name);
            next.dataset = summary;
            Transition::to(next).with_notice(Notice::success(text))
        }
        Err(e) => {
            next.clear_dataset();
            Transition::to(next).with_notice(Notice::error(format!(
                "Error uploading CSV: {}",
                e.user_message(UPLOAD_FALLBACK)
            )))
        }
    }
}

fn ask_submitted(state: &SessionState, request_id: RequestId) -> Transition {
    if state.input_text.trim().is_empty() || !state.can_submit() {
        return Transition::unchanged(state);
    }
    let mut next = state.clone();
    let question = std::mem::take(&mut next.input_text);
    next.turns.push(ConversationTurn::pending(question.clone(), request_id));
    next.ask_in_flight = Some(request_id);
    let request = AskRequest {
        question,
        model: state.selected_model.clone(),
    };
    Transition::to(next).with_command(Command::Ask {
        request_id,
        request,
    })
}

fn ask_finished(
    state: &SessionState,
    request_id: RequestId,
    result: Result<AskResponse, ApiError>,
) -> Transition {
    let mut next = state.clone();
    if next.ask_in_flight == Some(request_id) {
        next.ask_in_flight = None;
    }

    // Заглушку могли убрать сброс или новая загрузка; тогда ответ устарел
    let Some(index) = next.turns.iter().position(|t| t.is_pending_for(request_id)) else {
        return match result {
            Ok(_) => Transition::to(next),
            Err(e) => Transition::to(next).with_notice(Notice::error(format!(
                "Error: {}",
                e.user_message(ASK_FALLBACK)
            ))),
        };
    };

    match result {
        Ok(response) => {
            let question = next.turns[index].question.clone();
            next.turns[index] = ConversationTurn::answered(question, response);
            Transition::to(next)
        }
        Err(e) => {
            next.turns.remove(index);
            Transition::to(next).with_notice(Notice::error(format!(
                "Error: {}",
                e.user_message(ASK_FALLBACK)
            )))
        }
    }
}

fn basename(path: &str) -> String {
    path.rsplit(['/', '\\'])
        .next()
        .unwrap_or(path)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_csv_session::{TurnStatus, PLACEHOLDER_EXPLANATION};

    fn step(state: &SessionState, event: SessionEvent) -> SessionState {
        reduce(state, event).state
    }

    fn with_input(text: &str) -> SessionState {
        step(&SessionState::default(), SessionEvent::InputChanged(text.into()))
    }

    fn revenue_response() -> AskResponse {
        AskResponse {
            code: Some("df['rev'].sum()".into()),
            stdout: Some("12345".into()),
            explanation: "Total revenue is 12345.".into(),
            images: vec![],
            model_used: Some("gpt-4o".into()),
        }
    }

    fn uploaded(name: &str) -> DatasetLoadResponse {
        DatasetLoadResponse {
            message: Some("CSV file uploaded and loaded successfully".into()),
            files: vec![DatasetSummary {
                filename: Some(name.into()),
                path: None,
                rows: 3,
                columns: 2,
                column_names: vec!["rev".into(), "region".into()],
            }],
        }
    }

    fn answered_state() -> SessionState {
        let state = with_input("first");
        let id = RequestId::new_v4();
        let state = step(&state, SessionEvent::AskSubmitted { request_id: id });
        step(
            &state,
            SessionEvent::AskFinished {
                request_id: id,
                result: Ok(revenue_response()),
            },
        )
    }

    #[test]
    fn test_blank_input_is_ignored() {
        for text in ["", "   ", "\n\t"] {
            let state = with_input(text);
            let t = reduce(
                &state,
                SessionEvent::AskSubmitted {
                    request_id: RequestId::new_v4(),
                },
            );
            assert_eq!(t.command, None);
            assert_eq!(t.state, state);
        }
    }

    #[test]
    fn test_submit_appends_placeholder_and_clears_input() {
        let state = step(
            &with_input("How many rows?"),
            SessionEvent::ModelSelected("gpt-4o".into()),
        );
        let id = RequestId::new_v4();
        let t = reduce(&state, SessionEvent::AskSubmitted { request_id: id });

        assert_eq!(t.state.input_text, "");
        assert_eq!(t.state.turns.len(), 1);
        let turn = &t.state.turns[0];
        assert!(turn.is_pending_for(id));
        assert_eq!(turn.question, "How many rows?");
        assert_eq!(turn.explanation, PLACEHOLDER_EXPLANATION);
        assert_eq!(t.state.ask_in_flight, Some(id));
        assert_eq!(
            t.command,
            Some(Command::Ask {
                request_id: id,
                request: AskRequest {
                    question: "How many rows?".into(),
                    model: "gpt-4o".into(),
                },
            })
        );
    }

    #[test]
    fn test_second_submit_while_pending_is_noop() {
        let id = RequestId::new_v4();
        let state = step(&with_input("one"), SessionEvent::AskSubmitted { request_id: id });
        let state = step(&state, SessionEvent::InputChanged("two".into()));

        let t = reduce(
            &state,
            SessionEvent::AskSubmitted {
                request_id: RequestId::new_v4(),
            },
        );
        assert_eq!(t.command, None);
        assert_eq!(t.state.turns.len(), 1);
        assert_eq!(t.state.input_text, "two");
    }

    #[test]
    fn test_successful_ask_replaces_placeholder() {
        let before = answered_state();
        let before_len = before.turns.len();

        let state = step(
            &before,
            SessionEvent::InputChanged("What is the total revenue?".into()),
        );
        let id = RequestId::new_v4();
        let state = step(&state, SessionEvent::AskSubmitted { request_id: id });
        let t = reduce(
            &state,
            SessionEvent::AskFinished {
                request_id: id,
                result: Ok(revenue_response()),
            },
        );

        assert_eq!(t.notice, None);
        assert_eq!(t.state.turns.len(), before_len + 1);
        assert!(t.state.turns.iter().all(|turn| !turn.is_pending()));
        assert!(t
            .state
            .turns
            .iter()
            .all(|turn| turn.explanation != PLACEHOLDER_EXPLANATION));
        assert_eq!(
            t.state.turns.last(),
            Some(&ConversationTurn {
                question: "What is the total revenue?".into(),
                code: "df['rev'].sum()".into(),
                stdout: "12345".into(),
                explanation: "Total revenue is 12345.".into(),
                images: vec![],
                model_used: Some("gpt-4o".into()),
                status: TurnStatus::Answered,
            })
        );
        assert_eq!(t.state.ask_in_flight, None);
    }

    #[test]
    fn test_answer_without_model_has_no_model() {
        let state = step(
            &with_input("q"),
            SessionEvent::ModelSelected("deepseek-r1".into()),
        );
        let id = RequestId::new_v4();
        let state = step(&state, SessionEvent::AskSubmitted { request_id: id });
        let mut response = revenue_response();
        response.model_used = None;
        let state = step(
            &state,
            SessionEvent::AskFinished {
                request_id: id,
                result: Ok(response),
            },
        );
        assert_eq!(state.turns.len(), 1);
        assert_eq!(state.turns[0].model_used, None);
    }

    #[test]
    fn test_failed_ask_restores_history() {
        let before = answered_state();
        let state = step(&before, SessionEvent::InputChanged("boom".into()));
        let id = RequestId::new_v4();
        let state = step(&state, SessionEvent::AskSubmitted { request_id: id });
        let t = reduce(
            &state,
            SessionEvent::AskFinished {
                request_id: id,
                result: Err(ApiError::from_http(400, r#"{"detail":"bad question"}"#)),
            },
        );

        assert_eq!(t.state.turns, before.turns);
        assert_eq!(t.state.ask_in_flight, None);
        assert_eq!(t.notice, Some(Notice::error("Error: bad question")));
    }

    #[test]
    fn test_failed_ask_without_detail_uses_fallback() {
        let id = RequestId::new_v4();
        let state = step(&with_input("q"), SessionEvent::AskSubmitted { request_id: id });
        let t = reduce(
            &state,
            SessionEvent::AskFinished {
                request_id: id,
                result: Err(ApiError::from_http(500, "")),
            },
        );
        assert_eq!(t.notice, Some(Notice::error("Error: API request failed")));
        assert!(t.state.turns.is_empty());
    }

    #[test]
    fn test_upload_success_clears_history_and_records_name() {
        let state = answered_state();
        let t = reduce(
            &state,
            SessionEvent::UploadStarted {
                file_name: "sales.csv".into(),
            },
        );
        assert_eq!(t.command, Some(Command::UploadCsv));
        assert!(t.state.is_uploading());

        let t = reduce(&t.state, SessionEvent::DatasetLoaded(Ok(uploaded("sales.csv"))));
        assert!(t.state.turns.is_empty());
        assert_eq!(t.state.uploaded_file_name.as_deref(), Some("sales.csv"));
        assert_eq!(t.state.dataset.as_ref().map(|d| d.rows), Some(3));
        assert!(!t.state.is_uploading());
        assert_eq!(t.notice.map(|n| n.level), Some(NoticeLevel::Success));
    }

    #[test]
    fn test_upload_failure_unsets_name() {
        let state = step(
            &SessionState::default(),
            SessionEvent::UploadStarted {
                file_name: "a.csv".into(),
            },
        );
        let state = step(&state, SessionEvent::DatasetLoaded(Ok(uploaded("a.csv"))));
        let state = step(
            &state,
            SessionEvent::UploadStarted {
                file_name: "broken.csv".into(),
            },
        );
        let t = reduce(
            &state,
            SessionEvent::DatasetLoaded(Err(ApiError::Network("Failed to fetch".into()))),
        );
        assert_eq!(t.state.uploaded_file_name, None);
        assert_eq!(t.state.dataset, None);
        assert_eq!(
            t.notice,
            Some(Notice::error("Error uploading CSV: Failed to fetch"))
        );
    }

    #[test]
    fn test_upload_failure_keeps_history() {
        let state = answered_state();
        let state = step(
            &state,
            SessionEvent::UploadStarted {
                file_name: "x.csv".into(),
            },
        );
        let t = reduce(
            &state,
            SessionEvent::DatasetLoaded(Err(ApiError::from_http(400, "{}"))),
        );
        assert_eq!(t.state.turns.len(), 1);
        assert_eq!(
            t.notice,
            Some(Notice::error("Error uploading CSV: Upload failed"))
        );
    }

    #[test]
    fn test_concurrent_upload_is_ignored() {
        let state = step(
            &SessionState::default(),
            SessionEvent::UploadStarted {
                file_name: "a.csv".into(),
            },
        );
        let t = reduce(
            &state,
            SessionEvent::UploadStarted {
                file_name: "b.csv".into(),
            },
        );
        assert_eq!(t.command, None);
        assert_eq!(t.state.upload_in_flight.as_deref(), Some("a.csv"));
    }

    #[test]
    fn test_ask_blocked_while_uploading() {
        let state = step(
            &with_input("q"),
            SessionEvent::UploadStarted {
                file_name: "a.csv".into(),
            },
        );
        let t = reduce(
            &state,
            SessionEvent::AskSubmitted {
                request_id: RequestId::new_v4(),
            },
        );
        assert_eq!(t.command, None);
        assert!(t.state.turns.is_empty());
    }

    #[test]
    fn test_upload_finish_does_not_clear_ask_flag() {
        let id = RequestId::new_v4();
        let state = step(&with_input("q"), SessionEvent::AskSubmitted { request_id: id });
        let state = step(
            &state,
            SessionEvent::UploadStarted {
                file_name: "a.csv".into(),
            },
        );
        let state = step(&state, SessionEvent::DatasetLoaded(Ok(uploaded("a.csv"))));
        assert_eq!(state.ask_in_flight, Some(id));
        assert!(state.turns.is_empty());

        // Ответ на вопрос к старому датасету отбрасывается
        let t = reduce(
            &state,
            SessionEvent::AskFinished {
                request_id: id,
                result: Ok(revenue_response()),
            },
        );
        assert!(t.state.turns.is_empty());
        assert_eq!(t.state.ask_in_flight, None);
    }

    #[test]
    fn test_load_by_path() {
        let t = reduce(
            &SessionState::default(),
            SessionEvent::LoadPathSubmitted {
                path: "  /data/sales.csv ".into(),
            },
        );
        assert_eq!(
            t.command,
            Some(Command::LoadCsv(LoadCsvRequest::single("/data/sales.csv")))
        );

        let t = reduce(
            &t.state,
            SessionEvent::DatasetLoaded(Ok(DatasetLoadResponse::default())),
        );
        assert_eq!(t.state.uploaded_file_name.as_deref(), Some("sales.csv"));

        let t = reduce(
            &SessionState::default(),
            SessionEvent::LoadPathSubmitted { path: " ".into() },
        );
        assert_eq!(t.command, None);
    }

    #[test]
    fn test_reset_always_clears() {
        let state = step(
            &answered_state(),
            SessionEvent::UploadStarted {
                file_name: "a.csv".into(),
            },
        );
        let state = step(&state, SessionEvent::DatasetLoaded(Ok(uploaded("a.csv"))));
        let state = step(&state, SessionEvent::InputChanged("q".into()));
        let state = step(
            &state,
            SessionEvent::AskSubmitted {
                request_id: RequestId::new_v4(),
            },
        );

        let t = reduce(&state, SessionEvent::ResetRequested);
        assert_eq!(t.command, Some(Command::Reset));
        assert_eq!(reduce(&t.state, SessionEvent::ResetRequested).command, None);

        let ok = reduce(&t.state, SessionEvent::ResetFinished(Ok(())));
        assert!(ok.state.turns.is_empty());
        assert_eq!(ok.state.uploaded_file_name, None);
        assert_eq!(ok.notice, None);

        let failed = reduce(
            &t.state,
            SessionEvent::ResetFinished(Err(ApiError::Network("offline".into()))),
        );
        assert!(failed.state.turns.is_empty());
        assert_eq!(failed.state.uploaded_file_name, None);
        assert_eq!(
            failed.notice,
            Some(Notice::error("Error resetting session: offline"))
        );
    }

    #[test]
    fn test_reset_keeps_model_and_sidebar() {
        let state = step(
            &SessionState::default(),
            SessionEvent::ModelSelected("deepseek-r1".into()),
        );
        let state = step(&state, SessionEvent::SidebarToggled);
        let state = step(&state, SessionEvent::ResetRequested);
        let state = step(&state, SessionEvent::ResetFinished(Ok(())));
        assert_eq!(state.selected_model, "deepseek-r1");
        assert!(!state.sidebar_open);
        assert!(!state.reset_in_flight);
    }

    #[test]
    fn test_example_session() {
        let state = SessionState::default();
        let state = step(
            &state,
            SessionEvent::UploadStarted {
                file_name: "sales.csv".into(),
            },
        );
        let state = step(&state, SessionEvent::DatasetLoaded(Ok(uploaded("sales.csv"))));
        assert!(state.turns.is_empty());
        assert_eq!(state.uploaded_file_name.as_deref(), Some("sales.csv"));

        let state = step(
            &state,
            SessionEvent::InputChanged("What is the total revenue?".into()),
        );
        let id = RequestId::new_v4();
        let state = step(&state, SessionEvent::AskSubmitted { request_id: id });
        let state = step(
            &state,
            SessionEvent::AskFinished {
                request_id: id,
                result: Ok(revenue_response()),
            },
        );
        assert_eq!(state.turns.len(), 1);
        let turn = &state.turns[0];
        assert_eq!(turn.question, "What is the total revenue?");
        assert_eq!(turn.code, "df['rev'].sum()");
        assert_eq!(turn.stdout, "12345");
        assert_eq!(turn.explanation, "Total revenue is 12345.");
        assert!(turn.images.is_empty());
        assert_eq!(turn.model_used.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("/data/sales.csv"), "sales.csv");
        assert_eq!(basename("C:\\data\\sales.csv"), "sales.csv");
        assert_eq!(basename("sales.csv"), "sales.csv");
    }
}
