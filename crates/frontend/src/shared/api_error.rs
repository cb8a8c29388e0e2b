use contracts::domain::a001_csv_session::ErrorBody;
use thiserror::Error;

/// Ошибки обращения к бэкенду
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Запрос не дошёл до сервера
    #[error("Network error: {0}")]
    Network(String),

    /// Сервер ответил не-2xx; `detail` из тела ответа, если его удалось разобрать
    #[error("HTTP {status}")]
    Http { status: u16, detail: Option<String> },

    /// Ответ 2xx, но тело не соответствует ожидаемому формату
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Разбор не-2xx ответа по статусу и сырому телу
    pub fn from_http(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message());
        ApiError::Http { status, detail }
    }

    /// Текст для пользователя: `detail` сервера, иначе `fallback` для HTTP-ошибок.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Http { detail: None, .. } => fallback.to_string(),
            ApiError::Network(e) | ApiError::Decode(e) => e.clone(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
