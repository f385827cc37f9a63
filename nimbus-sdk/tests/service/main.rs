#![cfg(feature = "config")]

use httpmock::prelude::*;
use nimbus_sdk::{Client, Error};

fn test_client(server: &MockServer) -> Client {
    Client::builder()
        .api_key("test-key")
        .endpoint(server.base_url())
        .build()
}

fn service_body(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "type": "vcl",
        "customer_id": "x4xCwxxJQGihoskxxS0x",
        "comment": null,
        "active_version": null,
        "created_at": "2026-03-01T12:00:00Z",
        "updated_at": "2026-03-01T12:00:00Z",
        "deleted_at": null
    })
}

#[tokio::test]
async fn create_then_get_round_trip() {
    let server = MockServer::start();
    let created = server.mock(|when, then| {
        when.method(POST)
            .path("/service")
            .header("Nimbus-Key", "test-key");
        then.status(200).json_body(service_body("SU1Z0isxPaozGVKXdv0eY", "www.example.com"));
    });
    let fetched = server.mock(|when, then| {
        when.method(GET).path("/service/SU1Z0isxPaozGVKXdv0eY");
        then.status(200).json_body(service_body("SU1Z0isxPaozGVKXdv0eY", "www.example.com"));
    });

    let client = test_client(&server);
    let service = client
        .create_service()
        .name("www.example.com")
        .service_type("vcl")
        .build()
        .send()
        .await
        .unwrap();
    created.assert();

    let same = client
        .get_service()
        .service_id(&service.id)
        .build()
        .send()
        .await
        .unwrap();
    fetched.assert();

    assert_eq!(service.id, same.id);
    assert_eq!(service.name, same.name);
    assert_eq!(service.service_type, same.service_type);
    assert_eq!(service.customer_id, same.customer_id);
    assert_eq!(service.created_at, same.created_at);
    assert!(service.comment.is_none());
}

#[tokio::test]
async fn paginator_concatenates_every_page() {
    let server = MockServer::start();

    let page1 = server.mock(|when, then| {
        when.method(GET)
            .path("/service")
            .query_param("per_page", "2")
            .query_param_missing("page");
        then.status(200).json_body(serde_json::json!({
            "data": [service_body("a", "one"), service_body("b", "two")],
            "links": {"next": "/service?page=2&per_page=2", "prev": null, "first": null, "last": null},
            "meta": {"current_page": 1, "per_page": 2, "record_count": 3, "total_pages": 2}
        }));
    });
    let page2 = server.mock(|when, then| {
        when.method(GET)
            .path("/service")
            .query_param("per_page", "2")
            .query_param("page", "2");
        then.status(200).json_body(serde_json::json!({
            "data": [service_body("c", "three")],
            "links": {"next": null, "prev": "/service?page=1&per_page=2", "first": null, "last": null},
            "meta": {"current_page": 2, "per_page": 2, "record_count": 3, "total_pages": 2}
        }));
    });
    let unpaginated = server.mock(|when, then| {
        when.method(GET).path("/service").query_param_missing("per_page");
        then.status(200).json_body(serde_json::json!({
            "data": [service_body("a", "one"), service_body("b", "two"), service_body("c", "three")],
            "links": {"next": null, "prev": null, "first": null, "last": null},
            "meta": {"current_page": 1, "per_page": 20, "record_count": 3, "total_pages": 1}
        }));
    });

    let client = test_client(&server);

    let mut pages = client.list_services().per_page(2).build().paginator();
    let mut collected = Vec::new();
    while pages.has_next() {
        collected.extend(pages.get_next().await.unwrap());
    }
    page1.assert();
    page2.assert();
    assert!(!pages.has_next());
    assert_eq!(pages.remaining(), Some(0));

    // exhausted paginators keep returning empty pages
    assert!(pages.get_next().await.unwrap().is_empty());

    let all = client.list_services().build().send().await.unwrap();
    unpaginated.assert();
    assert_eq!(collected.len(), all.data.len());
}

#[tokio::test]
async fn delete_expects_no_content() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/service/SU1Z0isxPaozGVKXdv0eY");
        then.status(204);
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/service/gone");
        then.status(404).json_body(serde_json::json!({"msg": "record not found"}));
    });

    let client = test_client(&server);
    client
        .delete_service()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .build()
        .send()
        .await
        .unwrap();

    // a second delete is provider-defined; the 404 surfaces untouched
    let err = client
        .delete_service()
        .service_id("gone")
        .build()
        .send()
        .await
        .unwrap_err();
    match err {
        Error::Api { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert!(body.contains("record not found"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn validation_failures_perform_no_requests() {
    let server = MockServer::start();
    let any_get = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({}));
    });

    let client = test_client(&server);
    let err = client
        .get_service()
        .service_id("")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingServiceId));
    assert_eq!(any_get.calls(), 0);
}

#[tokio::test]
async fn version_lifecycle() {
    let server = MockServer::start();
    let drafted = server.mock(|when, then| {
        when.method(POST).path("/service/SU1Z0isxPaozGVKXdv0eY/version");
        then.status(200).json_body(serde_json::json!({
            "number": 2,
            "service_id": "SU1Z0isxPaozGVKXdv0eY",
            "active": false,
            "locked": false,
            "comment": null,
            "created_at": "2026-03-01T12:00:00Z"
        }));
    });
    let activated = server.mock(|when, then| {
        when.method(PUT).path("/service/SU1Z0isxPaozGVKXdv0eY/version/2/activate");
        then.status(200).json_body(serde_json::json!({
            "number": 2,
            "service_id": "SU1Z0isxPaozGVKXdv0eY",
            "active": true,
            "locked": true,
            "comment": null
        }));
    });
    let validated = server.mock(|when, then| {
        when.method(GET).path("/service/SU1Z0isxPaozGVKXdv0eY/version/2/validate");
        then.status(200).json_body(serde_json::json!({"status": "ok", "msg": null}));
    });

    let client = test_client(&server);
    let version = client
        .create_version()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .build()
        .send()
        .await
        .unwrap();
    drafted.assert();
    assert_eq!(version.number, 2);
    assert!(!version.active);

    let result = client
        .validate_version()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(version.number)
        .build()
        .send()
        .await
        .unwrap();
    validated.assert();
    assert_eq!(result.status, "ok");

    let live = client
        .activate_version()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .version(version.number)
        .build()
        .send()
        .await
        .unwrap();
    activated.assert();
    assert!(live.active);
    assert!(live.locked);
}
