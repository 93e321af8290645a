use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("category '{0}' is not in the library")]
    UnknownCategory(String),
    #[error("every item of '{0}' is already in the daily list")]
    AlreadyAdded(String),
    #[error("failed to save the daily list: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<SelectionError> for AppError {
    fn from(err: SelectionError) -> Self {
        let status = match err {
            SelectionError::UnknownCategory(_) => StatusCode::NOT_FOUND,
            SelectionError::AlreadyAdded(_) => StatusCode::CONFLICT,
            SelectionError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_errors_map_to_status_codes() {
        let unknown = AppError::from(SelectionError::UnknownCategory("friday".into()));
        assert_eq!(unknown.status, StatusCode::NOT_FOUND);

        let duplicate = AppError::from(SelectionError::AlreadyAdded("sleep".into()));
        assert_eq!(duplicate.status, StatusCode::CONFLICT);

        let store = AppError::from(SelectionError::from(StoreError::Unavailable));
        assert_eq!(store.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(store.message.contains("failed to save the daily list"));
    }
}
