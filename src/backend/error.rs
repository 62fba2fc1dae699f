use reqwest::StatusCode;

#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Status(StatusCode, String),
    Json(serde_json::Error),
    Url(url::ParseError),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "HTTP error: {}", e),
            ApiError::Status(status, body) => write!(f, "HTTP {} error: {}", status, body),
            ApiError::Json(e) => write!(f, "JSON error: {}", e),
            ApiError::Url(e) => write!(f, "URL parse error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            ApiError::Json(e) => Some(e),
            ApiError::Url(e) => Some(e),
            ApiError::Status(..) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Json(err)
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Url(err)
    }
}
