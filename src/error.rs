use crate::services::{TodoError, quote_service::QuoteError};

/// Errors rendered to HTTP clients. The message is shown verbatim.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    BadGateway(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::BadGateway(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::NotFound(message)
            | Self::BadGateway(message)
            | Self::ServiceUnavailable(message)
            | Self::Internal(message) => message.as_str(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::InvalidIdentifier { .. } | TodoError::ValidationFailure(_) => {
                AppError::bad_request(err.to_string())
            }
            TodoError::NotFound { .. } => AppError::not_found("Todo not found"),
            TodoError::PersistenceFailure(source) => {
                tracing::error!(error = %source, "todo persistence failure");
                AppError::internal("Failed to save todo")
            }
        }
    }
}

impl From<QuoteError> for AppError {
    fn from(err: QuoteError) -> Self {
        tracing::warn!(error = %err, "quote fetch failed");
        AppError::bad_gateway("Failed to fetch quote")
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::AppError;
    use crate::services::TodoError;
    use crate::services::quote_service::QuoteError;

    #[test]
    fn todo_errors_map_to_client_messages() {
        let invalid = AppError::from(TodoError::InvalidIdentifier {
            id: 5,
            reason: "ID should not be provided",
        });
        let missing = AppError::from(TodoError::NotFound { id: 9 });
        let storage = AppError::from(TodoError::PersistenceFailure(DbErr::Custom(
            "password authentication failed".to_string(),
        )));

        assert!(matches!(invalid, AppError::BadRequest(ref m) if m == "ID should not be provided"));
        assert!(matches!(missing, AppError::NotFound(_)));
        assert!(matches!(storage, AppError::Internal(ref m) if m == "Failed to save todo"));
    }

    #[test]
    fn quote_errors_are_bad_gateway() {
        let err = AppError::from(QuoteError::UnexpectedStatus(500));
        assert_eq!(err.message(), "Failed to fetch quote");
        assert!(matches!(err, AppError::BadGateway(_)));
    }
}
