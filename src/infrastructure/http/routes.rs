//! HTTP Routes
//!
//! API Endpoints:
//! - /                 GET   存活文案
//! - /ping             GET   健康检查
//! - /generate-script  POST  生成短视频脚本（script / title / hashtags）
//! - /generate-video   POST  脚本渲染为 mp4

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/ping", get(handlers::ping))
        .route("/generate-script", post(handlers::generate_script))
        .route("/generate-video", post(handlers::generate_video))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{RenderPipeline, ScriptSettings, SpeechSettings, VideoSettings};
    use crate::infrastructure::adapters::{FakeEncoder, FakeProvider, FileArtifactStorage};
    use crate::infrastructure::http::{HttpServer, ServerConfig};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    async fn local_app(provider: Arc<FakeProvider>, encoder: Arc<FakeEncoder>, dir: &TempDir) -> Router {
        let background = dir.path().join("background.jpg");
        tokio::fs::write(&background, b"jpeg").await.unwrap();
        let storage = FileArtifactStorage::new(dir.path().join("tmp"), background)
            .await
            .unwrap();

        let pipeline = RenderPipeline::Local {
            speech: provider.clone(),
            encoder,
            storage: Arc::new(storage),
            settings: SpeechSettings::default(),
        };
        let state = AppState::new(provider, ScriptSettings::default(), pipeline);
        HttpServer::new(ServerConfig::default(), state).router()
    }

    fn provider_app(provider: Arc<FakeProvider>) -> Router {
        let pipeline = RenderPipeline::Provider {
            generator: provider.clone(),
            settings: VideoSettings::default(),
        };
        let state = AppState::new(provider, ScriptSettings::default(), pipeline);
        HttpServer::new(ServerConfig::default(), state).router()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_index_message() {
        let dir = TempDir::new().unwrap();
        let app = local_app(Arc::new(FakeProvider::new()), Arc::new(FakeEncoder::new()), &dir).await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Faceless Factory API is running 🚀" })
        );
    }

    #[tokio::test]
    async fn test_ping() {
        let dir = TempDir::new().unwrap();
        let app = local_app(Arc::new(FakeProvider::new()), Arc::new(FakeEncoder::new()), &dir).await;

        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_generate_script_end_to_end() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(FakeProvider::new());
        let app = local_app(provider.clone(), Arc::new(FakeEncoder::new()), &dir).await;

        let response = app
            .oneshot(post_json(
                "/generate-script",
                json!({ "niche": "cats", "tone": "funny", "format": "hook", "length": "short" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "script": "Cats rule.", "title": "Cat Hook!!", "hashtags": "#cats #funny" })
        );
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_generate_script_fenced_reply() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(FakeProvider::new().with_chat_reply(
            "```json\n{\"script\":\"Dogs too.\",\"title\":\"Dogs\"}\n```",
        ));
        let app = local_app(provider, Arc::new(FakeEncoder::new()), &dir).await;

        let response = app
            .oneshot(post_json("/generate-script", json!({ "niche": "dogs" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "script": "Dogs too.", "title": "Dogs", "hashtags": "" })
        );
    }

    #[tokio::test]
    async fn test_generate_script_invalid_reply_echoes_raw() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(FakeProvider::new().with_chat_reply("Sorry, I can't do that."));
        let app = local_app(provider, Arc::new(FakeEncoder::new()), &dir).await;

        let response = app
            .oneshot(post_json("/generate-script", json!({ "niche": "cats" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Invalid AI JSON response", "raw": "Sorry, I can't do that." })
        );
    }

    #[tokio::test]
    async fn test_generate_script_provider_failure() {
        let dir = TempDir::new().unwrap();
        let app = local_app(Arc::new(FakeProvider::failing()), Arc::new(FakeEncoder::new()), &dir).await;

        let response = app
            .oneshot(post_json("/generate-script", json!({ "niche": "cats" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to generate script" })
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(FakeProvider::new());
        let app = local_app(provider.clone(), Arc::new(FakeEncoder::new()), &dir).await;

        for uri in ["/generate-script", "/generate-video"] {
            let request = Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap();

            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert!(body_json(response).await["error"].is_string());
        }
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_video_blank_script() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(FakeProvider::new());
        let encoder = Arc::new(FakeEncoder::new());
        let app = local_app(provider.clone(), encoder.clone(), &dir).await;

        for body in [json!({ "script": "" }), json!({ "script": "   " }), json!({})] {
            let response = app.clone().oneshot(post_json("/generate-video", body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_json(response).await, json!({ "error": "Script is required" }));
        }

        assert_eq!(provider.call_count(), 0);
        assert_eq!(encoder.call_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_video_local_returns_mp4() {
        let dir = TempDir::new().unwrap();
        let app = local_app(Arc::new(FakeProvider::new()), Arc::new(FakeEncoder::new()), &dir).await;

        let response = app
            .oneshot(post_json("/generate-video", json!({ "script": "Cats rule." })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "video/mp4");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[4..8], b"ftyp");
    }

    #[tokio::test]
    async fn test_generate_video_encoder_failure() {
        let dir = TempDir::new().unwrap();
        let app = local_app(Arc::new(FakeProvider::new()), Arc::new(FakeEncoder::failing()), &dir).await;

        let response = app
            .oneshot(post_json("/generate-video", json!({ "script": "Cats rule." })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Video processing failed" })
        );
    }

    #[tokio::test]
    async fn test_generate_video_provider_mode() {
        let video = b"\x00\x00\x00\x18ftypmp42provider".to_vec();
        let app = provider_app(Arc::new(FakeProvider::new().with_video(video.clone())));

        let response = app
            .oneshot(post_json("/generate-video", json!({ "script": "Cats rule." })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "video/mp4");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(bytes.as_ref(), video.as_slice());
    }

    #[tokio::test]
    async fn test_generate_video_provider_failure() {
        let app = provider_app(Arc::new(FakeProvider::failing()));

        let response = app
            .oneshot(post_json("/generate-video", json!({ "script": "Cats rule." })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to generate video" })
        );
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin() {
        let app = provider_app(Arc::new(FakeProvider::new()));

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/generate-script")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_requested_headers() {
        let app = provider_app(Arc::new(FakeProvider::new()));

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/generate-video")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-request-id")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS], "*");
    }
}
