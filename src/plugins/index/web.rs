use axum::{response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::time::SystemTime;

pub(crate) const APP_NAME: &str = env!("CARGO_PKG_NAME");

pub(crate) fn routes() -> Router {
    Router::new() //
        .route("/about", get(index))
}

pub(crate) async fn index() -> Json<Value> {
    let now: DateTime<Utc> = SystemTime::now().into();

    Json(json!({
        "app": APP_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "clk": now.to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn about_reports_app_and_clock() {
        let app = routes();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/about")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.get("app").unwrap(), APP_NAME);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(DateTime::parse_from_rfc3339(body["clk"].as_str().unwrap()).is_ok());
    }
}
