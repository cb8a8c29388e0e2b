//! CSV Chat - Model (API functions)

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;
use contracts::domain::a001_csv_session::{
    AskRequest, AskResponse, DatasetLoadResponse, LoadCsvRequest, ResetResponse,
};
use gloo_net::http::{Request, Response};

/// Не-2xx превращается в `ApiError::Http` с `detail` из тела
async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_http(status, &body))
}

/// Загрузить CSV (multipart, поле `file`)
pub async fn upload_csv(file: web_sys::File) -> Result<DatasetLoadResponse, ApiError> {
    let url = api_url("/upload_csv");
    let file_name = file.name();
    log::debug!("POST {} ({})", url, file_name);

    let form_data = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form_data
        .append_with_blob_and_filename("file", &file, &file_name)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let resp = Request::post(&url).body(form_data)?.send().await?;
    let data: DatasetLoadResponse = ensure_ok(resp).await?.json().await?;

    log::info!("CSV uploaded: {} ({} files)", file_name, data.files.len());
    Ok(data)
}

/// Загрузить CSV по пути на сервере
pub async fn load_csv(request: &LoadCsvRequest) -> Result<DatasetLoadResponse, ApiError> {
    let url = api_url("/load_csv");
    log::debug!("POST {} {:?}", url, request.paths);

    let resp = Request::post(&url).json(request)?.send().await?;
    let data: DatasetLoadResponse = ensure_ok(resp).await?.json().await?;

    log::info!("CSV loaded from path: {:?}", request.paths);
    Ok(data)
}

/// Задать вопрос по загруженным данным
pub async fn ask(request: &AskRequest) -> Result<AskResponse, ApiError> {
    let url = api_url("/ask");
    log::debug!("POST {} model={}", url, request.model);

    let resp = Request::post(&url).json(request)?.send().await?;
    let data: AskResponse = ensure_ok(resp).await?.json().await?;

    log::info!(
        "Answer received: model={:?}, images={}",
        data.model_used,
        data.images.len()
    );
    Ok(data)
}

/// Сбросить сессию на бэкенде. Важен только статус ответа.
pub async fn reset() -> Result<(), ApiError> {
    let url = api_url("/reset");
    log::debug!("POST {}", url);

    let resp = Request::post(&url).send().await?;
    let body: ResetResponse = ensure_ok(resp).await?.json().await.unwrap_or_default();

    log::info!("Session reset: {}", body.message.unwrap_or_default());
    Ok(())
}
