//! CSV-сессия: DTO для API бэкенда и агрегат реплики диалога

pub mod aggregate;
pub mod dto;
pub mod models;

pub use aggregate::{ConversationTurn, RequestId, TurnStatus, PLACEHOLDER_EXPLANATION};
pub use dto::{
    AskRequest, AskResponse, DatasetLoadResponse, DatasetSummary, ErrorBody, LoadCsvRequest,
    ResetResponse,
};
pub use models::{default_model, MODELS};
