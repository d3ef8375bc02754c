use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

use urlshort::config::Config;
use urlshort::handlers::{DefaultHandler, HandlerChain, MappingSource};
use urlshort::mapping::{Format, PathUrl};
use urlshort::server;

const YAML_DOC: &str = "\
- path: /google
  url: https://google.com
- path: /urlshort
  url: https://github.com/gophercises/urlshort
- path: /shadowed
  url: https://yaml.example
";

const JSON_DOC: &str = r#"[
  {"path": "/urlshort-final", "url": "https://github.com/gophercises/urlshort/tree/solution"},
  {"path": "/shadowed", "url": "https://json.example"}
]"#;

/// Creates a config whose mapping files live in a temp dir
fn create_test_config(dir: &TempDir) -> Config {
    fs::write(dir.path().join("redirects.yaml"), YAML_DOC).unwrap();
    fs::write(dir.path().join("redirects.json"), JSON_DOC).unwrap();

    let config_toml = format!(
        r#"
[server]
bind_addr = "127.0.0.1:0"

[sources]
yaml_path = "{yaml}"
json_path = "{json}"

[[redirects]]
path = "/urlshort-godoc"
url = "https://godoc.org/github.com/gophercises/urlshort"

[[redirects]]
path = "/shadowed"
url = "https://static.example"
        "#,
        yaml = dir.path().join("redirects.yaml").display(),
        json = dir.path().join("redirects.json").display(),
    );

    toml::from_str(&config_toml).expect("Failed to parse test config")
}

/// Builds the full router from a config-driven chain
async fn build_test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&temp_dir);

    let chain = server::build_chain(&config)
        .await
        .expect("Failed to build chain");
    assert_eq!(chain.depth(), 3);

    (server::router(Arc::new(chain)), temp_dir)
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_yaml_mapping_redirects() {
    let (app, _temp_dir) = build_test_app().await;

    let response = app.oneshot(request(Method::GET, "/google")).await.unwrap();

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers()[header::LOCATION], "https://google.com");
}

#[tokio::test]
async fn test_unmapped_path_reaches_default_handler() {
    let (app, _temp_dir) = build_test_app().await;

    let response = app.oneshot(request(Method::GET, "/missing")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::LOCATION).is_none());
    assert_eq!(body_string(response).await, "Hello, world!\n");
}

#[tokio::test]
async fn test_every_layer_is_reachable() {
    let (app, _temp_dir) = build_test_app().await;

    let cases = [
        ("/urlshort-godoc", "https://godoc.org/github.com/gophercises/urlshort"),
        ("/urlshort", "https://github.com/gophercises/urlshort"),
        (
            "/urlshort-final",
            "https://github.com/gophercises/urlshort/tree/solution",
        ),
    ];

    for (path, expected) in cases {
        let response = app
            .clone()
            .oneshot(request(Method::GET, path))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY, "{}", path);
        assert_eq!(response.headers()[header::LOCATION], expected);
    }
}

#[tokio::test]
async fn test_outermost_layer_wins() {
    let (app, _temp_dir) = build_test_app().await;

    // static, YAML and JSON all map /shadowed; JSON was composed last
    let response = app.oneshot(request(Method::GET, "/shadowed")).await.unwrap();

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers()[header::LOCATION], "https://json.example");
}

#[tokio::test]
async fn test_any_method_is_dispatched() {
    let (app, _temp_dir) = build_test_app().await;

    for method in [Method::POST, Method::PUT, Method::DELETE, Method::HEAD] {
        let response = app
            .clone()
            .oneshot(request(method.clone(), "/google"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY, "{}", method);
    }
}

#[tokio::test]
async fn test_trailing_slash_and_case_do_not_match() {
    let (app, _temp_dir) = build_test_app().await;

    for path in ["/google/", "/Google", "/google?ref=x"] {
        let response = app
            .clone()
            .oneshot(request(Method::GET, path))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{}", path);
    }
}

#[tokio::test]
async fn test_malformed_document_fails_startup() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir);
    fs::write(&config.sources.json_path, "{not valid}").unwrap();

    let result = server::build_chain(&config).await;
    let err = result.err().expect("Expected startup failure");
    assert!(err.to_string().contains("redirects.json"));
}

#[tokio::test]
async fn test_missing_document_fails_startup() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&temp_dir);
    config.sources.yaml_path = temp_dir.path().join("nope.yaml");

    assert!(server::build_chain(&config).await.is_err());
}

#[tokio::test]
async fn test_custom_terminal_handler() {
    let chain = HandlerChain::compose(
        vec![MappingSource::Pairs {
            name: "static".to_string(),
            pairs: vec![PathUrl::new("/a", "https://a.example")],
        }],
        Box::new(DefaultHandler::new(StatusCode::NOT_FOUND, "no such link")),
    )
    .unwrap();
    let app = server::router(Arc::new(chain));

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/b"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "no such link");

    let response = app.oneshot(request(Method::GET, "/a")).await.unwrap();
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
}

#[tokio::test]
async fn test_document_sources_compose_like_files() {
    let chain = HandlerChain::compose(
        vec![
            MappingSource::Document {
                name: "inline.yaml".to_string(),
                format: Format::Yaml,
                bytes: b"- path: /x\n  url: A\n".to_vec(),
            },
            MappingSource::Document {
                name: "inline.json".to_string(),
                format: Format::Json,
                bytes: br#"[{"path": "/x", "url": "B"}]"#.to_vec(),
            },
        ],
        Box::new(DefaultHandler::default()),
    )
    .unwrap();
    let app = server::router(Arc::new(chain));

    let response = app.oneshot(request(Method::GET, "/x")).await.unwrap();
    assert_eq!(response.headers()[header::LOCATION], "B");
}
