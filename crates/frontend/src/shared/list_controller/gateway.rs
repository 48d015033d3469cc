use async_trait::async_trait;
use contracts::domain::common::{ErrorMessage, ListQuery, PagedCollection};
use std::fmt;

/// Network-level failure: the request never produced an API envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Failure of a single gateway call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Server answered with a non-"ok" message
    Rejected(ErrorMessage),
    /// Request failed before an answer could be decoded
    Transport(TransportError),
}

impl From<TransportError> for GatewayError {
    fn from(e: TransportError) -> Self {
        GatewayError::Transport(e)
    }
}

impl From<ErrorMessage> for GatewayError {
    fn from(m: ErrorMessage) -> Self {
        GatewayError::Rejected(m)
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Rejected(m) => write!(f, "{}", m),
            GatewayError::Transport(e) => write!(f, "transport error: {}", e),
        }
    }
}

/// Record to delete plus an optional linked-resource reference
/// (e.g. a banner's public id) handed through to the server untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: String,
    pub auxiliary: Option<String>,
}

/// Remote source of truth for one entity type.
///
/// Every call carries the bearer token of the current session.
#[async_trait(?Send)]
pub trait CollectionGateway {
    type Entity: Clone + 'static;
    type Form;

    /// Paged read; `query.id` must be unset.
    async fn list_page(
        &self,
        query: ListQuery,
        token: &str,
    ) -> Result<PagedCollection<Self::Entity>, GatewayError>;

    /// Full record by id (same endpoint as `list_page`, single-record shape).
    async fn fetch_one(&self, id: &str, token: &str) -> Result<Self::Entity, GatewayError>;

    async fn create(&self, form: &Self::Form, token: &str) -> Result<Self::Entity, GatewayError>;

    async fn update(
        &self,
        id: &str,
        form: &Self::Form,
        token: &str,
    ) -> Result<Self::Entity, GatewayError>;

    async fn delete(&self, target: &DeleteTarget, token: &str) -> Result<(), GatewayError>;
}
