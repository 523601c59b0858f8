use httpmock::prelude::*;
use webproj::{ClientConfig, EpsgIo, ProjError};

#[tokio::test]
async fn ping_returns_true_on_success() {
    let server = MockServer::start();
    let root_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200);
    });

    let client = EpsgIo::new(ClientConfig {
        epsg_io_url: server.base_url(),
        api_key: None,
        ..ClientConfig::default()
    });

    assert!(client.ping().await);
    root_mock.assert();
}

#[tokio::test]
async fn ping_returns_false_on_http_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(500);
    });

    let client = EpsgIo::new(ClientConfig {
        epsg_io_url: server.base_url(),
        api_key: None,
        ..ClientConfig::default()
    });

    assert!(!client.ping().await);
}

#[tokio::test]
async fn ping_returns_false_when_unreachable() {
    let client = EpsgIo::new(ClientConfig {
        epsg_io_url: "http://127.0.0.1:1".to_string(),
        api_key: None,
        ..ClientConfig::default()
    });

    assert!(!client.ping().await);
}

#[tokio::test]
async fn keyed_ping_probes_search_endpoint() {
    let server = MockServer::start();
    let probe_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/coordinates/search/4326.json")
            .query_param("key", "test-key")
            .query_param("limit", "1");
        then.status(200).json_body(serde_json::json!({"results": []}));
    });

    let client = EpsgIo::new(
        ClientConfig {
            maptiler_url: server.base_url(),
            ..ClientConfig::default()
        }
        .with_api_key("test-key"),
    );

    assert!(client.ping().await);
    probe_mock.assert();
}

#[tokio::test]
async fn wkt_lookup_returns_raw_text() {
    let wkt = r#"PROJCS["RGF93_Lambert_93",GEOGCS["GCS_RGF_1993",DATUM["D_RGF_1993"]]]"#;
    let server = MockServer::start();
    let wkt_mock = server.mock(|when, then| {
        when.method(GET).path("/2154.esriwkt");
        then.status(200).body(wkt);
    });

    let client = EpsgIo::new(ClientConfig {
        epsg_io_url: server.base_url(),
        ..ClientConfig::default()
    });

    assert_eq!(client.lookup_wkt(2154).await.unwrap(), wkt);
    wkt_mock.assert();
}

#[tokio::test]
async fn wkt_lookup_propagates_http_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/999999.esriwkt");
        then.status(404);
    });

    let client = EpsgIo::new(ClientConfig {
        epsg_io_url: server.base_url(),
        ..ClientConfig::default()
    });

    let err = client.lookup_wkt(999999).await.unwrap_err();
    assert!(
        matches!(&err, ProjError::Service { status, .. } if status.as_u16() == 404),
        "got {err:?}"
    );
}
