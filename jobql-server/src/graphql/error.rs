//! Conversion of repository failures into GraphQL field errors

use async_graphql::{Error, ErrorExtensions};

use crate::repository::RepositoryError;

impl ErrorExtensions for RepositoryError {
    fn extend(&self) -> Error {
        match self {
            RepositoryError::InvalidIdentifier(_) => Error::new(self.to_string())
                .extend_with(|_, e| e.set("code", "INVALID_IDENTIFIER")),
            RepositoryError::NotFound(_) => {
                Error::new(self.to_string()).extend_with(|_, e| e.set("code", "NOT_FOUND"))
            }
            RepositoryError::Store(err) => {
                tracing::error!("Store error: {:?}", err);
                Error::new("Internal server error")
                    .extend_with(|_, e| e.set("code", "INTERNAL_SERVER_ERROR"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;

    fn code(error: &Error) -> Option<Value> {
        error.extensions.as_ref()?.get("code").cloned()
    }

    #[test]
    fn test_not_found_code() {
        let error = RepositoryError::NotFound("65f1c0ffee0000000000abcd".to_string()).extend();

        assert_eq!(error.message, "job listing 65f1c0ffee0000000000abcd not found");
        assert_eq!(code(&error), Some(Value::from("NOT_FOUND")));
    }

    #[test]
    fn test_invalid_identifier_code() {
        let error = RepositoryError::InvalidIdentifier("abc".to_string()).extend();

        assert_eq!(code(&error), Some(Value::from("INVALID_IDENTIFIER")));
    }
}
