use serde::{Deserialize, Serialize};
use std::fmt;

/// Значение `message`, которым сервер подтверждает успешный вызов
pub const OK_MESSAGE: &str = "ok";

/// Текст ошибки прикладного уровня.
///
/// Строка непрозрачна для клиента и показывается пользователю как есть.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMessage(pub String);

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Конверт, в который сервер заворачивает каждый ответ API.
///
/// `{ "message": "ok", "data": ... }` при успехе,
/// `{ "message": "<текст ошибки>", "data": null }` при отказе.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            message: OK_MESSAGE.to_string(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.message == OK_MESSAGE
    }

    /// Превращает строковый признак успеха в типизированный результат
    pub fn into_result(self) -> Result<T, ErrorMessage> {
        if !self.is_ok() {
            return Err(ErrorMessage(self.message));
        }
        self.data
            .ok_or_else(|| ErrorMessage::new("Server returned an empty response"))
    }
}

/// Ссылка на удалённую запись (ответ на DELETE)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedRef {
    #[serde(rename = "_id")]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_yields_payload() {
        let raw = r#"{"message":"ok","data":{"_id":"abc"}}"#;
        let response: ApiResponse<DeletedRef> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            response.into_result(),
            Ok(DeletedRef {
                id: "abc".to_string()
            })
        );
    }

    #[test]
    fn non_ok_message_is_passed_through_verbatim() {
        let raw = r#"{"message":"Item in use","data":null}"#;
        let response: ApiResponse<DeletedRef> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            response.into_result(),
            Err(ErrorMessage::new("Item in use"))
        );
    }

    #[test]
    fn error_without_data_field_decodes_for_any_payload() {
        #[derive(Debug, Deserialize)]
        struct Payload {
            #[allow(dead_code)]
            name: String,
        }
        let response: ApiResponse<Payload> =
            serde_json::from_str(r#"{"message":"Category not found"}"#).unwrap();
        assert!(response.data.is_none());
        assert_eq!(
            response.into_result().unwrap_err(),
            ErrorMessage::new("Category not found")
        );
    }

    #[test]
    fn missing_data_on_ok_is_an_error() {
        let raw = r#"{"message":"ok"}"#;
        let response: ApiResponse<DeletedRef> = serde_json::from_str(raw).unwrap();
        assert!(response.into_result().is_err());
    }
}
