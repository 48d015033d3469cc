//! Запросы к API с bearer-токеном и разбором конверта `{ message, data }`

use contracts::domain::common::{ApiResponse, ListQuery};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::shared::list_controller::{GatewayError, TransportError};

fn transport(context: &str, e: impl std::fmt::Display) -> GatewayError {
    GatewayError::Transport(TransportError(format!("{}: {}", context, e)))
}

fn with_auth(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

/// URL со строкой запроса, построенной из `ListQuery`
pub fn list_url(path: &str, query: &ListQuery) -> Result<String, GatewayError> {
    let qs = serde_qs::to_string(query).map_err(|e| transport("Failed to encode query", e))?;
    if qs.is_empty() {
        Ok(api_url(path))
    } else {
        Ok(format!("{}?{}", api_url(path), qs))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    if !response.ok() {
        return Err(GatewayError::Transport(TransportError(format!(
            "Request failed: {}",
            response.status()
        ))));
    }
    let envelope = response
        .json::<ApiResponse<T>>()
        .await
        .map_err(|e| transport("Failed to parse response", e))?;
    envelope.into_result().map_err(GatewayError::Rejected)
}

/// GET с параметрами списка
pub async fn get_enveloped<T: DeserializeOwned>(
    path: &str,
    query: &ListQuery,
    token: &str,
) -> Result<T, GatewayError> {
    let url = list_url(path, query)?;
    let response = with_auth(Request::get(&url), token)
        .send()
        .await
        .map_err(|e| transport("Failed to send request", e))?;
    decode(response).await
}

/// Метод запроса с телом
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMethod {
    Post,
    Put,
    Delete,
}

/// POST/PUT/DELETE с JSON-телом
pub async fn send_enveloped<B, T>(
    method: BodyMethod,
    path: &str,
    body: &B,
    token: &str,
) -> Result<T, GatewayError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = api_url(path);
    let builder = match method {
        BodyMethod::Post => Request::post(&url),
        BodyMethod::Put => Request::put(&url),
        BodyMethod::Delete => Request::delete(&url),
    };
    let response = with_auth(builder, token)
        .json(body)
        .map_err(|e| transport("Failed to serialize request", e))?
        .send()
        .await
        .map_err(|e| transport("Failed to send request", e))?;
    decode(response).await
}
