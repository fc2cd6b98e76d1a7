use thiserror::Error;

/// Application error
#[derive(Error, Debug)]
pub enum AppError {
    /// Business rule violation
    #[error("business error: {0}")]
    BizError(String),

    /// Database error
    #[error("database error: {0}")]
    DbError(String),

    #[error("NSE API error: {0}")]
    NseApiError(String),

    /// Unknown error
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NseApiError(err.to_string())
    }
}

impl From<rbatis::rbdc::Error> for AppError {
    fn from(err: rbatis::rbdc::Error) -> Self {
        AppError::DbError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::NseApiError(format!("decode error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_source_message() {
        let err = AppError::NseApiError("status 401".to_string());
        assert_eq!(err.to_string(), "NSE API error: status 401");

        let err: AppError = rbatis::rbdc::Error::from("pool exhausted").into();
        assert!(matches!(err, AppError::DbError(_)));
    }
}
