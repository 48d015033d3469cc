//! Ошибки сервисов и конверт ответа `{ message, data }`

use axum::Json;
use contracts::domain::common::ApiResponse;
use serde::Serialize;

/// Отказ сервиса, который видит клиент
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Category in use")]
    CategoryInUse,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Internal(e.into())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// `GET /api/<entity>` отдаёт страницу или, при заданном `id`, одну запись
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PageOrRecord<P, R> {
    Page(P),
    Record(R),
}

/// Сообщение для клиента при внутренней ошибке; подробности только в логе
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub fn envelope<T>(result: ServiceResult<T>) -> ApiResponse<T> {
    match result {
        Ok(data) => ApiResponse::ok(data),
        Err(ServiceError::Internal(e)) => {
            tracing::error!("request failed: {:#}", e);
            ApiResponse::error(INTERNAL_ERROR_MESSAGE)
        }
        Err(e) => {
            tracing::debug!("request rejected: {}", e);
            ApiResponse::error(e.to_string())
        }
    }
}

/// Ответ handler-а: всегда HTTP 200, результат в `message`
pub fn respond<T>(result: ServiceResult<T>) -> Json<ApiResponse<T>> {
    Json(envelope(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_reach_the_client_verbatim() {
        let r: ApiResponse<()> = envelope(Err(ServiceError::CategoryInUse));
        assert_eq!(r.message, "Category in use");
        assert!(r.data.is_none());

        let r: ApiResponse<()> = envelope(Err(ServiceError::NotFound("Item")));
        assert_eq!(r.message, "Item not found");
    }

    #[test]
    fn internal_errors_are_masked() {
        let r: ApiResponse<()> =
            envelope(Err(ServiceError::Internal(anyhow::anyhow!("disk I/O error"))));
        assert_eq!(r.message, INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn success_is_ok_envelope() {
        let r = envelope(Ok(7));
        assert!(r.is_ok());
        assert_eq!(r.data, Some(7));
    }
}
