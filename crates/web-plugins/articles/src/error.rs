use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures surfaced by the article endpoints.
///
/// Apart from identifier exhaustion, every variant originates at the HTTP
/// boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArticleError {
    #[error("{0}")]
    MalformedPayload(String),
    #[error("article not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    Serialization(String),
    #[error("article identifiers exhausted")]
    IdsExhausted,
}

impl ArticleError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ArticleError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ArticleError::NotFound => StatusCode::NOT_FOUND,
            ArticleError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ArticleError::Serialization(_) | ArticleError::IdsExhausted => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ArticleError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // Not-found carries no body.
            ArticleError::NotFound => status.into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let response = ArticleError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn method_not_allowed_is_plain_text() {
        let response = ArticleError::MethodNotAllowed.into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_text(response).await, "method not allowed");
    }

    #[tokio::test]
    async fn malformed_payload_echoes_error_text() {
        let response =
            ArticleError::MalformedPayload("expected value at line 1 column 1".to_owned())
                .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "expected value at line 1 column 1");
    }

    #[tokio::test]
    async fn exhausted_identifiers_map_to_internal_error() {
        let response = ArticleError::IdsExhausted.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "article identifiers exhausted");
    }

    #[test]
    fn serialization_maps_to_internal_error() {
        assert_eq!(
            ArticleError::Serialization("boom".to_owned()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
