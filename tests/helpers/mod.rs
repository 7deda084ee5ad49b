//! Shared setup for router tests: an app wired to a relay endpoint of the
//! test's choosing (usually a mockito server).

#![allow(dead_code)]

use axum::{Router, body::Body, http::Request, response::Response};
use folio::{
    AppState, Config,
    config::{LoggingConfig, ServerConfig, SiteConfig},
};
use folio_contact::{Gateway, RelayConfig, RelayKind};
use http_body_util::BodyExt;

pub fn test_config(relay_endpoint: impl Into<String>) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig {
            owner: "Jane Analyst".to_string(),
            title: "Test Portfolio".to_string(),
            tagline: "Charts all the way down".to_string(),
        },
        relay: RelayConfig {
            kind: RelayKind::Form,
            endpoint: Some(relay_endpoint.into()),
            recipient: "me@example.com".to_string(),
            access_key: None,
        },
        logging: LoggingConfig::default(),
    }
}

pub fn setup_app(config: Config) -> anyhow::Result<Router> {
    let gateway = Gateway::from_config(&config.relay)?;

    Ok(folio::router(AppState { config, gateway }))
}

pub fn form_request(uri: &str, fields: &[(&str, &str)]) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields)?))?)
}

pub fn json_request(uri: &str, body: serde_json::Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))?)
}

pub async fn body_string(response: Response) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}
