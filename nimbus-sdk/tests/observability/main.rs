#![cfg(feature = "observability")]

use httpmock::prelude::*;
use nimbus_sdk::alerts::EvaluationStrategy;
use nimbus_sdk::dashboard::{
    DashboardItem, DataSource, DataSourceConfig, Visualization, VisualizationConfig,
};
use nimbus_sdk::{Client, Error};

fn test_client(server: &MockServer) -> Client {
    Client::builder()
        .api_key("test-key")
        .endpoint(server.base_url())
        .build()
}

fn definition_body(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "service_id": "SU1Z0isxPaozGVKXdv0eY",
        "source": "stats",
        "metric": "status_5xx",
        "dimensions": null,
        "evaluation_strategy": {
            "type": "above_threshold",
            "period": "5m",
            "threshold": 10.0,
            "ignore_below": null
        },
        "integration_ids": [],
        "created_at": "2026-03-01T12:00:00Z",
        "updated_at": "2026-03-01T12:00:00Z"
    })
}

#[tokio::test]
async fn alert_definition_create_then_get() {
    let server = MockServer::start();
    let created = server.mock(|when, then| {
        when.method(POST).path("/alerts/definitions");
        then.status(200).json_body(definition_body("adf_01", "origin errors"));
    });
    let fetched = server.mock(|when, then| {
        when.method(GET).path("/alerts/definitions/adf_01");
        then.status(200).json_body(definition_body("adf_01", "origin errors"));
    });
    let deleted = server.mock(|when, then| {
        when.method(DELETE).path("/alerts/definitions/adf_01");
        then.status(204);
    });

    let client = test_client(&server);
    let definition = client
        .create_alert_definition()
        .name("origin errors")
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .source("stats")
        .metric("status_5xx")
        .evaluation_strategy(EvaluationStrategy {
            strategy_type: "above_threshold".to_owned(),
            period: "5m".to_owned(),
            threshold: 10.0,
            ignore_below: None,
        })
        .build()
        .send()
        .await
        .unwrap();
    created.assert();

    let same = client
        .get_alert_definition()
        .definition_id(&definition.id)
        .build()
        .send()
        .await
        .unwrap();
    fetched.assert();
    assert_eq!(same.name, definition.name);
    assert_eq!(same.metric, definition.metric);
    assert_eq!(
        same.evaluation_strategy.threshold,
        definition.evaluation_strategy.threshold
    );

    client
        .delete_alert_definition()
        .definition_id(&definition.id)
        .build()
        .send()
        .await
        .unwrap();
    deleted.assert();
}

#[tokio::test]
async fn alert_definition_paginator_follows_cursors() {
    let server = MockServer::start();
    let page1 = server.mock(|when, then| {
        when.method(GET)
            .path("/alerts/definitions")
            .query_param("limit", "2")
            .query_param_missing("cursor");
        then.status(200).json_body(serde_json::json!({
            "data": [definition_body("adf_01", "a"), definition_body("adf_02", "b")],
            "meta": {"next_cursor": "b2Zmc2V0", "limit": 2, "total": 3}
        }));
    });
    let page2 = server.mock(|when, then| {
        when.method(GET)
            .path("/alerts/definitions")
            .query_param("limit", "2")
            .query_param("cursor", "b2Zmc2V0");
        then.status(200).json_body(serde_json::json!({
            "data": [definition_body("adf_03", "c")],
            "meta": {"next_cursor": "", "limit": 2, "total": 3}
        }));
    });

    let client = test_client(&server);
    let mut pages = client.list_alert_definitions().limit(2).build().paginator();

    let mut ids = Vec::new();
    while pages.has_next() {
        for definition in pages.get_next().await.unwrap() {
            ids.push(definition.id);
        }
    }
    page1.assert();
    page2.assert();
    assert_eq!(ids, ["adf_01", "adf_02", "adf_03"]);
    // cursor envelopes carry no positional total
    assert_eq!(pages.remaining(), None);
}

#[tokio::test]
async fn alert_definition_paginator_stops_on_repeated_cursor() {
    let server = MockServer::start();
    let page1 = server.mock(|when, then| {
        when.method(GET)
            .path("/alerts/definitions")
            .query_param_missing("cursor");
        then.status(200).json_body(serde_json::json!({
            "data": [definition_body("adf_01", "a")],
            "meta": {"next_cursor": "same", "limit": 1, "total": null}
        }));
    });
    let page2 = server.mock(|when, then| {
        when.method(GET)
            .path("/alerts/definitions")
            .query_param("cursor", "same");
        then.status(200).json_body(serde_json::json!({
            "data": [definition_body("adf_02", "b")],
            "meta": {"next_cursor": "same", "limit": 1, "total": null}
        }));
    });

    let client = test_client(&server);
    let mut pages = client.list_alert_definitions().build().paginator();
    let mut count = 0;
    while pages.has_next() {
        count += pages.get_next().await.unwrap().len();
    }
    page1.assert();
    page2.assert();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn dashboard_items_round_trip() {
    let server = MockServer::start();
    let created = server.mock(|when, then| {
        when.method(POST).path("/observability/dashboards");
        then.status(200).json_body(serde_json::json!({
            "id": "dash_01",
            "name": "Traffic overview",
            "description": "edge + origin health",
            "items": [{
                "id": "itm_01",
                "title": "Origin errors",
                "subtitle": null,
                "span": 4,
                "data_source": {"type": "stats.origin", "config": {"metrics": ["status_5xx"]}},
                "visualization": {"type": "chart", "config": {"plot_type": "line", "calculation_method": null, "format": null}}
            }],
            "created_at": "2026-03-01T12:00:00Z",
            "updated_at": "2026-03-01T12:00:00Z"
        }));
    });

    let client = test_client(&server);
    let item = DashboardItem::builder()
        .title("Origin errors")
        .span(4)
        .data_source(
            DataSource::builder()
                .source_type("stats.origin")
                .config(DataSourceConfig {
                    metrics: vec!["status_5xx".to_owned()],
                })
                .build(),
        )
        .visualization(
            Visualization::builder()
                .visualization_type("chart")
                .config(VisualizationConfig::builder().plot_type("line").build())
                .build(),
        )
        .build();

    let dashboard = client
        .create_dashboard()
        .name("Traffic overview")
        .description("edge + origin health")
        .items(vec![item])
        .build()
        .send()
        .await
        .unwrap();
    created.assert();

    assert_eq!(dashboard.items.len(), 1);
    // the server assigns item ids
    assert_eq!(dashboard.items[0].id.as_deref(), Some("itm_01"));
    assert_eq!(dashboard.items[0].span, Some(4));
}

#[tokio::test]
async fn domain_metrics_require_start() {
    let server = MockServer::start();
    let any_request = server.mock(|when, then| {
        when.method(GET);
        then.status(500);
    });

    let client = test_client(&server);
    let err = client
        .get_domain_metrics()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .start("")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Common(_)));
    assert_eq!(any_request.calls(), 0);
}

#[tokio::test]
async fn domain_metrics_decode_counters() {
    let server = MockServer::start();
    let queried = server.mock(|when, then| {
        when.method(GET)
            .path("/metrics/domains/services/SU1Z0isxPaozGVKXdv0eY")
            .query_param("start", "2026-08-01T00:00:00Z")
            .query_param("downsample", "hour");
        then.status(200).json_body(serde_json::json!({
            "data": [{
                "fqdn": "www.example.com",
                "timestamp": "2026-08-01T00:00:00Z",
                "requests": 1200,
                "edge_hits": 1100,
                "edge_misses": 100,
                "status_2xx": 1150,
                "status_3xx": 20,
                "status_4xx": 25,
                "status_5xx": 5
            }],
            "meta": {"next_cursor": null, "limit": 100, "total": 1}
        }));
    });

    let client = test_client(&server);
    let page = client
        .get_domain_metrics()
        .service_id("SU1Z0isxPaozGVKXdv0eY")
        .start("2026-08-01T00:00:00Z")
        .downsample("hour")
        .metrics(vec!["requests", "status_5xx"])
        .build()
        .send()
        .await
        .unwrap();
    queried.assert();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].requests, 1200);
    assert_eq!(page.data[0].status_5xx, 5);
    assert!(page.meta.next_cursor.is_none());
}
