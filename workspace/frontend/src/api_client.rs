pub mod calculator;
pub mod eai;
pub mod metadata;
pub mod prediction;

use explorer::FetchError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Percent-encodes one query-string value.
pub(crate) fn encode(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

/// Error body the service sends on non-2xx responses.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Turns a non-OK response into a `FetchError`, preferring the service's own
/// detail message when the body carries one.
async fn error_from(response: Response, method: &str, endpoint: &str) -> FetchError {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => {
            log::error!("{} {} - service error: {}", method, endpoint, body.detail);
            FetchError::Service(body.detail)
        }
        Err(_) => {
            let msg = format!("HTTP error: {status}");
            log::error!("{} {} - {}", method, endpoint, msg);
            FetchError::Transport(msg)
        }
    }
}

/// Common GET request handler.
pub async fn get<T>(endpoint: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        log::error!("GET {} - request failed: {}", endpoint, e);
        FetchError::Transport(e.to_string())
    })?;

    if !response.ok() {
        return Err(error_from(response, "GET", endpoint).await);
    }

    let parsed = response.json::<T>().await.map_err(|e| {
        log::error!("GET {} - failed to parse response: {}", endpoint, e);
        FetchError::Transport(format!("failed to parse response: {e}"))
    })?;

    log::trace!("GET {} - Success", endpoint);
    Ok(parsed)
}

/// Common POST request handler.
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            log::error!("POST {} - failed to serialize request: {}", endpoint, e);
            FetchError::Transport(format!("failed to serialize request: {e}"))
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - request failed: {}", endpoint, e);
            FetchError::Transport(e.to_string())
        })?;

    if !response.ok() {
        return Err(error_from(response, "POST", endpoint).await);
    }

    let parsed = response.json::<T>().await.map_err(|e| {
        log::error!("POST {} - failed to parse response: {}", endpoint, e);
        FetchError::Transport(format!("failed to parse response: {e}"))
    })?;

    log::trace!("POST {} - Success", endpoint);
    Ok(parsed)
}
