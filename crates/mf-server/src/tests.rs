use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::routes::RenderResponse;
use crate::state::AppState;
use crate::{app, app_with_state};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::IntoResponse,
    Router,
};
use http_body_util::BodyExt;
use mf_compactor::ModeFormatter;
use mf_core::{FormatError, FormatterConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn cafe_app() -> Router {
    let config = FormatterConfig::new().with_type_name("cafe", "Cafe", "Cafes");
    app_with_state(AppState::new(ModeFormatter::new(config).unwrap()))
}

fn weekdays() -> Value {
    json!(["9;18", "9;18", "9;18", "9;18", "9;18", "", ""])
}

// ========== Health ==========

#[tokio::test]
async fn test_health() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let v: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v["status"], "ok");
}

// ========== Render ==========

#[tokio::test]
async fn test_render_plain() {
    let body = json!({ "types": { "cafe": [{ "mode": weekdays() }] }, "format": "plain" });
    let (status, v) = post(cafe_app(), "/api/v1/render", body).await;
    assert_eq!(status, StatusCode::OK);
    let resp: RenderResponse = serde_json::from_value(v).unwrap();
    assert_eq!(resp.output, "Cafe: Mon-Fri 09:00\u{2014}18:00");
}

#[tokio::test]
async fn test_render_defaults_to_html() {
    let body = json!({ "types": { "cafe": [{ "mode": weekdays() }] } });
    let (status, v) = post(cafe_app(), "/api/v1/render", body).await;
    assert_eq!(status, StatusCode::OK);
    let output = v["output"].as_str().unwrap();
    assert!(output.starts_with("<div class=\"types\">"));
    assert!(output.contains("Mon-Fri 09:00\u{2014}18:00"));
}

#[tokio::test]
async fn test_render_null_category() {
    let body = json!({ "types": { "cafe": null }, "format": "plain" });
    let (status, v) = post(cafe_app(), "/api/v1/render", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["output"], "");
}

#[tokio::test]
async fn test_render_shape_mismatch_is_422() {
    let body = json!({ "types": { "cafe": [{ "mode": ["9;18"] }] } });
    let (status, v) = post(cafe_app(), "/api/v1/render", body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(v["error"]["code"], "unprocessable");
}

#[tokio::test]
async fn test_render_malformed_slot_is_422() {
    let body = json!({ "types": { "cafe": [{ "mode": ["x;18", "", "", "", "", "", ""] }] } });
    let (status, v) = post(cafe_app(), "/api/v1/render", body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(v["error"]["message"].as_str().unwrap().contains("x;18"));
}

// ========== Render modes ==========

#[tokio::test]
async fn test_render_modes_plain() {
    let body = json!({
        "modes": [["0;24", "0;24", "0;24", "0;24", "0;24", "0;24", "0;24"]],
        "format": "plain",
    });
    let (status, v) = post(app(), "/api/v1/render/modes", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["output"], "round-the-clock");
}

#[tokio::test]
async fn test_render_modes_missing_field() {
    let (status, _) = post(app(), "/api/v1/render/modes", json!({ "format": "plain" })).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_api_error_envelope() {
    let resp = ApiError::unprocessable("bad slot").into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let v: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v, json!({ "error": { "code": "unprocessable", "message": "bad slot" } }));
}

#[test]
fn test_api_error_from_format_error() {
    let json_err = serde_json::from_str::<Value>("{").unwrap_err();
    assert_eq!(ApiError::from(FormatError::from(json_err)).status, StatusCode::BAD_REQUEST);
    let config_err = FormatError::InvalidConfig("dayNames".into());
    assert_eq!(ApiError::from(config_err).status, StatusCode::INTERNAL_SERVER_ERROR);
    let index_err = FormatError::UnknownDayIndex(9);
    assert_eq!(ApiError::from(index_err).code, "unprocessable");
}

// ========== Config ==========

#[test]
fn test_server_config_defaults() {
    let c = ServerConfig::from_json("{}").unwrap();
    assert_eq!(c.addr(), "0.0.0.0:8080");
    assert_eq!(c.formatter, FormatterConfig::default());
}

#[test]
fn test_server_config_formatter_section() {
    let c = ServerConfig::from_json(
        r#"{"port": 9000, "formatter": {"noctidialName": "24/7", "typeNames": {"bar": ["Bar", "Bars"]}}}"#,
    )
    .unwrap();
    assert_eq!(c.port, 9000);
    assert_eq!(c.formatter.noctidial_name, "24/7");
}

#[test]
fn test_server_config_rejects_invalid_formatter() {
    assert!(ServerConfig::from_json(r#"{"formatter": {"dayNames": []}}"#).is_err());
}

#[test]
fn test_server_config_missing_file() {
    assert!(ServerConfig::load_from("/nonexistent/mf-config.json").is_err());
}
