#![cfg(feature = "logging")]

use httpmock::prelude::*;
use nimbus_sdk::{Client, Error};

fn test_client(server: &MockServer) -> Client {
    Client::builder()
        .api_key("test-key")
        .endpoint(server.base_url())
        .build()
}

#[tokio::test]
async fn syslog_create_then_get_round_trip() {
    let server = MockServer::start();
    let body = serde_json::json!({
        "service_id": "SU1Z0isxPaozGVKXdv0eY",
        "version": 1,
        "name": "remote-syslog",
        "address": "logs.example.net",
        "port": 6514,
        "use_tls": true,
        "tls_ca_cert": null,
        "tls_hostname": "logs.example.net",
        "token": null,
        "format": "%h %l %u %t \"%r\" %>s %b",
        "format_version": 2,
        "message_type": "classic",
        "placement": null,
        "response_condition": null,
        "created_at": "2026-03-01T12:00:00Z",
        "updated_at": "2026-03-01T12:00:00Z",
        "deleted_at": null
    });
    let created = server.mock(|when, then| {
        when.method(POST).path("/service/SU1Z0isxPaozGVKXdv0eY/version/1/logging/syslog");
        then.status(200).json_body(body.clone());
    });
    let fetched = server.mock(|when, then| {
        when.method(GET).path("/service/SU1Z0isxPaozGVKXdv0eY/version/1/logging/syslog/remote-syslog");
        then.status(200).json_body(body.clone());
    });

    let client = test_client(&server);
    let syslog = client
        .create_syslog()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(1)
        .name("remote-syslog")
        .address("logs.example.net")
        .port(6514)
        .use_tls(true)
        .format("%h %l %u %t \"%r\" %>s %b")
        .build()
        .send()
        .await
        .unwrap();
    created.assert();

    let same = client
        .get_syslog()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(1)
        .name("remote-syslog")
        .build()
        .send()
        .await
        .unwrap();
    fetched.assert();

    assert_eq!(same.name, syslog.name);
    assert_eq!(same.address, syslog.address);
    assert_eq!(same.port, syslog.port);
    assert_eq!(same.use_tls, syslog.use_tls);
    assert_eq!(same.format, syslog.format);
    assert_eq!(same.format_version, syslog.format_version);
}

#[tokio::test]
async fn s3_compression_conflict_is_rejected_by_the_server() {
    let server = MockServer::start();
    let rejected = server.mock(|when, then| {
        when.method(POST).path("/service/SU1Z0isxPaozGVKXdv0eY/version/1/logging/s3");
        then.status(400).json_body(serde_json::json!({
            "msg": "only one of compression_codec or gzip_level may be set"
        }));
    });

    let client = test_client(&server);
    let err = client
        .create_s3()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(1)
        .name("s3-archive")
        .bucket_name("logs")
        .compression_codec("zstd")
        .gzip_level(9)
        .build()
        .send()
        .await
        .unwrap_err();
    rejected.assert();

    match err {
        Error::Api { status, body } => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("compression_codec"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn kafka_rename_reports_the_new_name() {
    let server = MockServer::start();
    let renamed = server.mock(|when, then| {
        when.method(PUT).path("/service/SU1Z0isxPaozGVKXdv0eY/version/1/logging/kafka/events");
        then.status(200).json_body(serde_json::json!({
            "service_id": "SU1Z0isxPaozGVKXdv0eY",
            "version": 1,
            "name": "events-v2",
            "brokers": "broker1:9092,broker2:9092",
            "topic": "cdn-logs"
        }));
    });

    let client = test_client(&server);
    let kafka = client
        .update_kafka()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(1)
        .name("events")
        .new_name("events-v2")
        .build()
        .send()
        .await
        .unwrap();
    renamed.assert();
    assert_eq!(kafka.name, "events-v2");
    assert_eq!(kafka.topic.as_deref(), Some("cdn-logs"));
}

#[tokio::test]
async fn bigquery_delete_surfaces_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/service/SU1Z0isxPaozGVKXdv0eY/version/1/logging/bigquery/bq-logs");
        then.status(404).json_body(serde_json::json!({"msg": "record not found"}));
    });

    let client = test_client(&server);
    let err = client
        .delete_bigquery()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(1)
        .name("bq-logs")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { status, .. } if status.as_u16() == 404));
}

#[tokio::test]
async fn missing_name_skips_the_network() {
    let server = MockServer::start();
    let any_request = server.mock(|when, then| {
        when.method(GET);
        then.status(500);
    });

    let client = test_client(&server);
    let err = client
        .get_s3()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(1)
        .name("")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingName));
    assert_eq!(any_request.calls(), 0);
}
