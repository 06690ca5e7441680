#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use image::{ImageFormat, Rgb, RgbImage};
use sqlx::SqlitePool;
use tower::ServiceExt;

use petshop_api::config::ServerConfig;
use petshop_api::router::build_app_router;
use petshop_api::state::AppState;
use petshop_core::media::MediaConfig;

/// Multipart boundary used by [`post_multipart`].
const BOUNDARY: &str = "petshop-test-boundary";

/// Build a test `ServerConfig` with safe defaults and the given media root.
///
/// The image size limit is 1 MB so oversize uploads stay cheap to build.
pub fn test_config(media_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        media: MediaConfig {
            root: media_root.to_path_buf(),
            url_prefix: "/media/".to_string(),
            max_image_size_mb: 1.0,
        },
    }
}

/// Build the full application router, as `main.rs` does, over `pool`.
pub fn build_test_app(pool: SqlitePool, media_root: &Path) -> Router {
    let config = test_config(media_root);
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::delete(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, body.to_string()).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PATCH", uri, body.to_string()).await
}

/// Send a raw string as a JSON body, for malformed-payload tests.
pub async fn send_json(app: Router, method: &str, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// One multipart part: field name, optional file name, and content.
pub struct Part<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub data: Vec<u8>,
}

impl<'a> Part<'a> {
    pub fn text(name: &'a str, value: &str) -> Self {
        Self {
            name,
            file_name: None,
            data: value.as_bytes().to_vec(),
        }
    }

    pub fn file(name: &'a str, file_name: &'a str, data: Vec<u8>) -> Self {
        Self {
            name,
            file_name: Some(file_name),
            data,
        }
    }
}

pub async fn post_multipart(app: Router, uri: &str, parts: Vec<Part<'_>>) -> Response<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part.file_name {
            Some(file_name) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{file_name}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n",
                    part.name
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", part.name)
                    .as_bytes(),
            ),
        }
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::post(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Upload `data` as the image for animal record `animal_id`.
pub async fn upload_image(app: Router, animal_id: i64, data: Vec<u8>) -> Response<Body> {
    post_multipart(
        app,
        "/api/v1/images/new",
        vec![
            Part::file("image", "upload.bin", data),
            Part::text("id", &animal_id.to_string()),
        ],
    )
    .await
}

/// A small encoded test image in `format`.
pub fn encoded_image(format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_fn(16, 16, |x, y| Rgb([(x * 16) as u8, (y * 16) as u8, 128]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).unwrap();
    out.into_inner()
}

pub fn jpeg_image() -> Vec<u8> {
    encoded_image(ImageFormat::Jpeg)
}

/// Regular files directly under `root`.
pub fn media_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(root)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|e| e.path())
                .filter(|p| p.is_file())
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a category through the API and return its id.
pub async fn seed_category(pool: &SqlitePool, media_root: &Path, name: &str) -> i64 {
    let app = build_test_app(pool.clone(), media_root);
    let response = post_json(
        app,
        "/api/v1/categories/new",
        serde_json::json!({"name": name}),
    )
    .await;
    assert_eq!(response.status(), 201);
    sqlx::query_scalar("SELECT id FROM categories WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Create a mark through the API and return its id.
pub async fn seed_mark(pool: &SqlitePool, media_root: &Path, name: &str) -> i64 {
    let app = build_test_app(pool.clone(), media_root);
    let response = post_json(app, "/api/v1/marks/new", serde_json::json!({"name": name})).await;
    assert_eq!(response.status(), 201);
    sqlx::query_scalar("SELECT id FROM marks WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Create an animal through the API and return its record id.
pub async fn seed_animal(
    pool: &SqlitePool,
    media_root: &Path,
    animal_id: i64,
    category_id: i64,
    mark_id: i64,
) -> i64 {
    let app = build_test_app(pool.clone(), media_root);
    let response = post_json(
        app,
        "/api/v1/animals/new",
        serde_json::json!({
            "animal_id": animal_id,
            "category_id": category_id,
            "mark_id": mark_id,
            "name": "Rex",
            "status": "set",
        }),
    )
    .await;
    assert_eq!(response.status(), 201);
    sqlx::query_scalar("SELECT id FROM animals WHERE animal_id = $1")
        .bind(animal_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
