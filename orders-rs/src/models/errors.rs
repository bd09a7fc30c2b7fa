use thiserror::Error;

/// Service-level errors for order operations
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Storage error: {source}")]
    Storage {
        #[from]
        source: RepositoryError,
    },
}

/// Repository-level errors for the flat-file store
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let repo_error: RepositoryError = io_error.into();
        assert!(repo_error.to_string().starts_with("I/O error:"));

        let service_error: ServiceError = repo_error.into();
        assert!(service_error.to_string().starts_with("Storage error:"));
    }

    #[test]
    fn test_repository_error_from_serde() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();

        let repo_error: RepositoryError = json_error.into();
        match repo_error {
            RepositoryError::Serialization { .. } => {}
            _ => panic!("Expected Serialization error"),
        }
    }
}
