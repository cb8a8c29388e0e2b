use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST /ask
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub model: String,
}

/// Ответ на /ask. Все поля, кроме `explanation`, бэкенд может опустить.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, deserialize_with = "images_or_empty")]
    pub images: Vec<String>,
    #[serde(default)]
    pub model_used: Option<String>,
}

/// `"images": null` приходит от бэкенда как пустой список
fn images_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// POST /load_csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCsvRequest {
    pub paths: Vec<String>,
}

impl LoadCsvRequest {
    pub fn single(path: impl Into<String>) -> Self {
        Self {
            paths: vec![path.into()],
        }
    }
}

/// Сводка по загруженному датасету
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetSummary {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub rows: u64,
    #[serde(default)]
    pub columns: u64,
    #[serde(default)]
    pub column_names: Vec<String>,
}

/// Ответ на /upload_csv и /load_csv
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetLoadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub files: Vec<DatasetSummary>,
}

impl DatasetLoadResponse {
    /// Бэкенд загружает только первый файл
    pub fn first_file(&self) -> Option<&DatasetSummary> {
        self.files.first()
    }
}

/// Ответ на /reset
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResetResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Тело ошибки бэкенда (`{"detail": ...}`).
///
/// `detail` обычно строка, но ошибки валидации приходят массивом.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
