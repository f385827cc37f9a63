#![cfg(feature = "config")]

use httpmock::prelude::*;
use nimbus_sdk::{Client, Error};

fn test_client(server: &MockServer) -> Client {
    Client::builder()
        .api_key("test-key")
        .endpoint(server.base_url())
        .build()
}

#[tokio::test]
async fn backend_crud_round_trip() {
    let server = MockServer::start();
    let body = serde_json::json!({
        "service_id": "SU1Z0isxPaozGVKXdv0eY",
        "version": 1,
        "name": "origin0",
        "address": "origin.example.net",
        "port": 443,
        "weight": 100,
        "max_conn": 200,
        "connect_timeout": 1000,
        "first_byte_timeout": 15000,
        "between_bytes_timeout": 10000,
        "shield": null,
        "healthcheck": null,
        "override_host": null,
        "use_ssl": true,
        "ssl_check_cert": true,
        "ssl_cert_hostname": "origin.example.net",
        "comment": null,
        "created_at": "2026-03-01T12:00:00Z",
        "updated_at": "2026-03-01T12:00:00Z",
        "deleted_at": null
    });

    let created = server.mock(|when, then| {
        when.method(POST).path("/service/SU1Z0isxPaozGVKXdv0eY/version/1/backend");
        then.status(200).json_body(body.clone());
    });
    let fetched = server.mock(|when, then| {
        when.method(GET).path("/service/SU1Z0isxPaozGVKXdv0eY/version/1/backend/origin0");
        then.status(200).json_body(body.clone());
    });
    let deleted = server.mock(|when, then| {
        when.method(DELETE).path("/service/SU1Z0isxPaozGVKXdv0eY/version/1/backend/origin0");
        then.status(204);
    });

    let client = test_client(&server);
    let backend = client
        .create_backend()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(1)
        .name("origin0")
        .address("origin.example.net")
        .port(443)
        .use_ssl(true)
        .build()
        .send()
        .await
        .unwrap();
    created.assert();
    assert_eq!(backend.port, Some(443));
    assert_eq!(backend.use_ssl, Some(true));

    let same = client
        .get_backend()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(1)
        .name("origin0")
        .build()
        .send()
        .await
        .unwrap();
    fetched.assert();
    assert_eq!(same.name, backend.name);
    assert_eq!(same.address, backend.address);
    assert_eq!(same.weight, backend.weight);
    assert_eq!(same.created_at, backend.created_at);

    client
        .delete_backend()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(1)
        .name("origin0")
        .build()
        .send()
        .await
        .unwrap();
    deleted.assert();
}

#[tokio::test]
async fn backend_rename_targets_the_old_name() {
    let server = MockServer::start();
    let renamed = server.mock(|when, then| {
        when.method(PUT).path("/service/SU1Z0isxPaozGVKXdv0eY/version/1/backend/origin0");
        then.status(200).json_body(serde_json::json!({
            "service_id": "SU1Z0isxPaozGVKXdv0eY",
            "version": 1,
            "name": "origin1"
        }));
    });

    let client = test_client(&server);
    let backend = client
        .update_backend()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(1)
        .name("origin0")
        .new_name("origin1")
        .build()
        .send()
        .await
        .unwrap();
    renamed.assert();
    assert_eq!(backend.name, "origin1");
}

#[tokio::test]
async fn domain_lifecycle() {
    let server = MockServer::start();
    let created = server.mock(|when, then| {
        when.method(POST).path("/domains/v1");
        then.status(200).json_body(serde_json::json!({
            "id": "dmn_01",
            "fqdn": "www.example.com",
            "service_id": null,
            "created_at": "2026-03-01T12:00:00Z",
            "updated_at": "2026-03-01T12:00:00Z"
        }));
    });
    let attached = server.mock(|when, then| {
        when.method(PUT).path("/domains/v1/dmn_01");
        then.status(200).json_body(serde_json::json!({
            "id": "dmn_01",
            "fqdn": "www.example.com",
            "service_id": "SU1Z0isxPaozGVKXdv0eY"
        }));
    });
    let deleted = server.mock(|when, then| {
        when.method(DELETE).path("/domains/v1/dmn_01");
        then.status(204);
    });

    let client = test_client(&server);
    let domain = client
        .create_domain()
        .fqdn("www.example.com")
        .build()
        .send()
        .await
        .unwrap();
    created.assert();
    assert!(domain.service_id.is_none());

    let domain = client
        .update_domain()
        .domain_id(&domain.id)
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .build()
        .send()
        .await
        .unwrap();
    attached.assert();
    assert_eq!(domain.service_id.as_deref(), Some("SU1Z0isxPaozGVKXdv0eY"));

    client
        .delete_domain()
        .domain_id(&domain.id)
        .build()
        .send()
        .await
        .unwrap();
    deleted.assert();
}

#[tokio::test]
async fn domain_list_threads_the_cursor() {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/domains/v1")
            .query_param("fqdn", "example.com")
            .query_param_missing("cursor");
        then.status(200).json_body(serde_json::json!({
            "data": [{"id": "dmn_01", "fqdn": "a.example.com"}],
            "meta": {"next_cursor": "b2Zmc2V0", "limit": 1, "total": 2}
        }));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/domains/v1")
            .query_param("fqdn", "example.com")
            .query_param("cursor", "b2Zmc2V0");
        then.status(200).json_body(serde_json::json!({
            "data": [{"id": "dmn_02", "fqdn": "b.example.com"}],
            "meta": {"next_cursor": "", "limit": 1, "total": 2}
        }));
    });

    let client = test_client(&server);
    let page = client
        .list_domains()
        .fqdn("example.com")
        .build()
        .send()
        .await
        .unwrap();
    first.assert();
    let cursor = page.meta.next_cursor.unwrap();

    let page = client
        .list_domains()
        .fqdn("example.com")
        .cursor(&cursor)
        .build()
        .send()
        .await
        .unwrap();
    second.assert();
    assert_eq!(page.data[0].id, "dmn_02");
    assert_eq!(page.meta.next_cursor.as_deref(), Some(""));
}

#[tokio::test]
async fn vcl_activation_marks_main() {
    let server = MockServer::start();
    let activated = server.mock(|when, then| {
        when.method(PUT).path("/service/SU1Z0isxPaozGVKXdv0eY/version/1/vcl/custom/main");
        then.status(200).json_body(serde_json::json!({
            "service_id": "SU1Z0isxPaozGVKXdv0eY",
            "version": 1,
            "name": "custom",
            "content": "sub vcl_recv { }",
            "main": true
        }));
    });

    let client = test_client(&server);
    let vcl = client
        .activate_vcl()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(1)
        .name("custom")
        .build()
        .send()
        .await
        .unwrap();
    activated.assert();
    assert!(vcl.main);
}

#[tokio::test]
async fn pool_create_then_get() {
    let server = MockServer::start();
    let body = serde_json::json!({
        "id": "pool_01",
        "service_id": "SU1Z0isxPaozGVKXdv0eY",
        "version": 1,
        "name": "edge-pool",
        "comment": null,
        "shield": null,
        "request_condition": null,
        "max_conn_default": 200,
        "connect_timeout": 1000,
        "first_byte_timeout": 15000,
        "quorum": 75,
        "use_tls": false,
        "tls_check_cert": null,
        "type": "random",
        "healthcheck": null
    });
    server.mock(|when, then| {
        when.method(POST).path("/service/SU1Z0isxPaozGVKXdv0eY/version/1/pool");
        then.status(200).json_body(body.clone());
    });
    server.mock(|when, then| {
        when.method(GET).path("/service/SU1Z0isxPaozGVKXdv0eY/version/1/pool/edge-pool");
        then.status(200).json_body(body.clone());
    });

    let client = test_client(&server);
    let pool = client
        .create_pool()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(1)
        .name("edge-pool")
        .quorum(75)
        .pool_type("random")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(pool.pool_type.as_deref(), Some("random"));

    let same = client
        .get_pool()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(1)
        .name("edge-pool")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(same.id, pool.id);
    assert_eq!(same.quorum, pool.quorum);
}

#[tokio::test]
async fn missing_identifiers_skip_the_network() {
    let server = MockServer::start();
    let any_request = server.mock(|when, then| {
        when.method(POST);
        then.status(500);
    });

    let client = test_client(&server);
    let err = client
        .create_backend()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(0)
        .name("origin0")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingServiceVersion));
    assert_eq!(any_request.calls(), 0);
}
