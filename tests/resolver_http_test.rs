use httpmock::prelude::*;
use mac_resolver::{
    ErrorKind, HttpTransport, MacResolver, OutputMode, ResolutionResult, ResolverError,
    ResolverSettings, StatusReason,
};
use std::time::Duration;

const MAC: &str = "AA:BB:CC:DD:EE:FF";
const KEY: &str = "at_integration_key";

fn resolver_for(server: &MockServer) -> MacResolver {
    MacResolver::new(KEY).with_endpoint(&server.url("/v1"))
}

#[tokio::test]
async fn test_vendor_lookup_sends_expected_request() {
    let server = MockServer::start();
    let lookup_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1")
            .header("X-Authentication-Token", KEY)
            .query_param("search", MAC)
            .query_param("output", "vendor");
        then.status(200)
            .header("Content-Type", "text/plain")
            .body("Cisco Systems");
    });

    let result = resolver_for(&server)
        .resolve(MAC, OutputMode::Vendor)
        .await
        .unwrap();

    lookup_mock.assert();
    assert_eq!(result, ResolutionResult::Vendor("Cisco Systems".to_string()));
}

#[tokio::test]
async fn test_json_output_wraps_vendor() {
    let server = MockServer::start();
    let lookup_mock = server.mock(|when, then| {
        when.method(GET).path("/v1").query_param("search", MAC);
        then.status(200).body("Cisco Systems");
    });

    let result = resolver_for(&server)
        .resolve(MAC, OutputMode::Json)
        .await
        .unwrap();

    lookup_mock.assert();
    let parsed: serde_json::Value = serde_json::from_str(result.as_str()).unwrap();
    assert_eq!(parsed, serde_json::json!({ "AA:BB:CC:DD:EE:FF": "Cisco Systems" }));
}

#[tokio::test]
async fn test_mac_is_sent_as_supplied() {
    let server = MockServer::start();
    let lookup_mock = server.mock(|when, then| {
        when.method(GET).path("/v1").query_param("search", "00-1a-2B-3c-4D-5e");
        then.status(200).body("Apple, Inc.");
    });

    let vendor = resolver_for(&server)
        .resolve_vendor("00-1a-2B-3c-4D-5e")
        .await
        .unwrap();

    lookup_mock.assert();
    assert_eq!(vendor, "Apple, Inc.");
}

#[tokio::test]
async fn test_invalid_mac_makes_no_request() {
    let server = MockServer::start();
    let lookup_mock = server.mock(|when, then| {
        when.method(GET).path("/v1");
        then.status(200).body("should not be reached");
    });

    let err = resolver_for(&server)
        .resolve("not-a-mac", OutputMode::Vendor)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::WrongFormat);
    assert_eq!(err.exit_code(), 1);
    assert_eq!(lookup_mock.hits(), 0);
}

#[tokio::test]
async fn test_unauthorized_status() {
    let server = MockServer::start();
    let lookup_mock = server.mock(|when, then| {
        when.method(GET).path("/v1");
        then.status(401).body("{\"error\": \"unauthorized\"}");
    });

    let err = resolver_for(&server)
        .resolve(MAC, OutputMode::Vendor)
        .await
        .unwrap_err();

    lookup_mock.assert();
    assert_eq!(err.status(), Some(401));
    let message = err.to_string();
    assert!(message.contains("401"));
    assert!(message.contains("Access restricted. Enter the correct API key."));
    assert!(message.contains(&server.url("/v1")));
    assert!(message.contains(MAC));
}

#[tokio::test]
async fn test_every_classified_status() {
    let cases = [
        (400, StatusReason::InvalidParameters),
        (402, StatusReason::InsufficientCredit),
        (422, StatusReason::InvalidMacAddress),
        (429, StatusReason::RateLimited),
        (500, StatusReason::ServerError),
        (418, StatusReason::Unknown),
        (503, StatusReason::Unknown),
    ];

    for (status, expected) in cases {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1");
            then.status(status);
        });

        let err = resolver_for(&server)
            .resolve(MAC, OutputMode::Vendor)
            .await
            .unwrap_err();

        match err {
            ResolverError::Http {
                status: got,
                reason,
                ref message,
            } => {
                assert_eq!(got, status);
                assert_eq!(reason, expected, "status {}", status);
                assert!(message.contains(&format!("Status code: {}", status)));
                // 本機伺服器的服務名稱就是主機位址
                assert!(message.ends_with(&reason.describe("127.0.0.1")));
            }
            other => panic!("status {} produced {:?}", status, other),
        }
    }
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // 取得一個空閒埠後立即釋放，讓連線被拒絕
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let endpoint = format!("http://127.0.0.1:{}/v1", port);

    let err = MacResolver::new(KEY)
        .with_endpoint(&endpoint)
        .resolve(MAC, OutputMode::Vendor)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.exit_code(), 2);
    let message = err.to_string();
    assert!(message.contains(&endpoint));
    assert!(message.contains(MAC));
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1");
        then.status(200)
            .body("Slow Vendor")
            .delay(Duration::from_secs(3));
    });

    let transport = HttpTransport::new().with_timeout(Duration::from_millis(200));
    let resolver = MacResolver::with_transport(KEY, &server.url("/v1"), transport);

    let err = resolver.resolve(MAC, OutputMode::Vendor).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.to_string().starts_with("Timeout during processing request to"));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_resolver_from_settings() {
    let server = MockServer::start();
    let lookup_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/lookup")
            .header("X-Authentication-Token", "settings-key");
        then.status(200).body("Juniper Networks");
    });

    let mut settings = ResolverSettings::new("settings-key");
    settings.endpoint = server.url("/lookup");
    settings.timeout_seconds = Some(5);

    let resolver = MacResolver::from_config(&settings);
    assert_eq!(resolver.transport().timeout(), Some(Duration::from_secs(5)));

    let vendor = resolver.resolve_vendor("aabbccddeeff").await.unwrap();
    lookup_mock.assert();
    assert_eq!(vendor, "Juniper Networks");
}

#[tokio::test]
async fn test_concurrent_resolves_share_one_client() {
    let server = MockServer::start();
    let lookup_mock = server.mock(|when, then| {
        when.method(GET).path("/v1");
        then.status(200).body("Cisco Systems");
    });

    let resolver = resolver_for(&server);
    let (a, b, c) = tokio::join!(
        resolver.resolve_vendor("AA:BB:CC:DD:EE:01"),
        resolver.resolve_vendor("AA:BB:CC:DD:EE:02"),
        resolver.resolve_vendor("AA:BB:CC:DD:EE:03"),
    );

    assert_eq!(a.unwrap(), "Cisco Systems");
    assert_eq!(b.unwrap(), "Cisco Systems");
    assert_eq!(c.unwrap(), "Cisco Systems");
    lookup_mock.assert_hits(3);
}
