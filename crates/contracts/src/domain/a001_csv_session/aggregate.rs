use super::dto::AskResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Текст ответа-заглушки, пока бэкенд не ответил
pub const PLACEHOLDER_EXPLANATION: &str = "Thinking...";

/// ID одного запроса `ask`, по нему сверяется заглушка с ответом
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RequestId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Статус реплики
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnStatus {
    /// Локальная заглушка, ответ ещё не пришёл
    Pending { request_id: RequestId },
    /// Ответ бэкенда получен
    Answered,
}

/// Одна пара вопрос/ответ в истории диалога.
///
/// `code` и `stdout` пустые, если бэкенд их не вернул.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub question: String,
    pub code: String,
    pub stdout: String,
    pub explanation: String,
    pub images: Vec<String>,
    pub model_used: Option<String>,
    pub status: TurnStatus,
}

impl ConversationTurn {
    /// Оптимистичная заглушка, которая показывается до ответа бэкенда
    pub fn pending(question: impl Into<String>, request_id: RequestId) -> Self {
        Self {
            question: question.into(),
            code: String::new(),
            stdout: String::new(),
            explanation: PLACEHOLDER_EXPLANATION.to_string(),
            images: Vec::new(),
            model_used: None,
            status: TurnStatus::Pending { request_id },
        }
    }

    /// Реплика из ответа бэкенда. `model_used` берётся как есть.
    pub fn answered(question: impl Into<String>, response: AskResponse) -> Self {
        Self {
            question: question.into(),
            code: response.code.unwrap_or_default(),
            stdout: response.stdout.unwrap_or_default(),
            explanation: response.explanation,
            images: response.images,
            model_used: response.model_used,
            status: TurnStatus::Answered,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, TurnStatus::Pending { .. })
    }

    pub fn is_pending_for(&self, id: RequestId) -> bool {
        matches!(&self.status, TurnStatus::Pending { request_id, .. } if *request_id == id)
    }

    pub fn has_code(&self) -> bool {
        !self.code.trim().is_empty()
    }

    pub fn has_stdout(&self) -> bool {
        !self.stdout.is_empty()
    }
}
