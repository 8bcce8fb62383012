//! Local preview server for the static site and its WASM bundle.

use axum::{Json, Router, routing::get};
use serde::Serialize;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

const SERVICE: &str = "site-preview";

#[derive(Debug, Serialize)]
struct HealthResponse {
    service: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct VersionResponse {
    service: &'static str,
    version: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PreviewConfig {
    root: PathBuf,
    addr: SocketAddr,
}

impl PreviewConfig {
    fn from_env() -> anyhow::Result<Self> {
        let root = env::var("SITE_ROOT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "./site".to_owned());
        let addr = env::var("SITE_PREVIEW_ADDR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "127.0.0.1:8080".to_owned())
            .parse()?;
        Ok(Self {
            root: PathBuf::from(root),
            addr,
        })
    }
}

fn app(root: PathBuf) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .fallback_service(ServeDir::new(root).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = PreviewConfig::from_env()?;
    if !config.root.is_dir() {
        anyhow::bail!("site root {} is not a directory", config.root.display());
    }

    info!("{} serving {} on http://{}", SERVICE, config.root.display(), config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app(config.root)).await?;

    Ok(())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: SERVICE,
        status: "ok",
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: SERVICE,
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn site_dir() -> anyhow::Result<tempfile::TempDir> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("index.html"), "<h1>Laurel Cottage</h1>")?;
        std::fs::create_dir(dir.path().join("pkg"))?;
        std::fs::write(dir.path().join("pkg").join("site_wasm_bg.wasm"), b"\0asm")?;
        Ok(dir)
    }

    async fn get(router: Router, uri: &str) -> anyhow::Result<(StatusCode, String)> {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty())?)
            .await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, String::from_utf8_lossy(&bytes).into_owned()))
    }

    #[tokio::test]
    async fn serves_index_for_root() -> anyhow::Result<()> {
        let dir = site_dir()?;
        let (status, body) = get(app(dir.path().to_path_buf()), "/").await?;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Laurel Cottage"));
        Ok(())
    }

    #[tokio::test]
    async fn serves_wasm_with_wasm_mime() -> anyhow::Result<()> {
        let dir = site_dir()?;
        let response = app(dir.path().to_path_buf())
            .oneshot(Request::builder().uri("/pkg/site_wasm_bg.wasm").body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").and_then(|v| v.to_str().ok()),
            Some("application/wasm")
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_not_found() -> anyhow::Result<()> {
        let dir = site_dir()?;
        let (status, _) = get(app(dir.path().to_path_buf()), "/nope.css").await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn health_reports_ok() -> anyhow::Result<()> {
        let dir = site_dir()?;
        let (status, body) = get(app(dir.path().to_path_buf()), "/health").await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"service":"site-preview","status":"ok"}"#);
        Ok(())
    }

    #[tokio::test]
    async fn version_matches_crate() -> anyhow::Result<()> {
        let dir = site_dir()?;
        let (_, body) = get(app(dir.path().to_path_buf()), "/version").await?;
        assert!(body.contains(env!("CARGO_PKG_VERSION")));
        Ok(())
    }
}
