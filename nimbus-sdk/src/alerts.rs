//! Alert definitions.
//!
//! A definition watches one metric of one source, evaluates it on a period,
//! and notifies the configured integrations when the threshold trips.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/observability/alerts/)

use crate::client::{Client, RequestOptions};
use crate::error::Error;
use crate::paginator::{CursorList, ListPaginator};
use bon::Builder;
use nimbus_sdk_common::helper::{expect_status, parse_json_response};
use nimbus_sdk_common::path::join_path;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use time::OffsetDateTime;

//region response
#[derive(Deserialize, Debug)]
pub struct AlertDefinition {
    pub id: String,
    pub name: String,
    pub service_id: Option<String>,
    /// Metric source, e.g. `"stats"` or `"origins"`.
    pub source: String,
    pub metric: String,
    /// Source-specific filters, e.g. `{"origins": ["origin0"]}`.
    pub dimensions: Option<HashMap<String, Vec<String>>>,
    pub evaluation_strategy: EvaluationStrategy,
    pub integration_ids: Option<Vec<String>>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug)]
pub struct EvaluationStrategy {
    /// `"above_threshold"`, `"below_threshold"` or `"percent_increase"`.
    #[serde(rename = "type")]
    pub strategy_type: String,
    /// Evaluation window, e.g. `"5m"`.
    pub period: String,
    pub threshold: f64,
    /// Values under this are treated as noise and ignored.
    pub ignore_below: Option<f64>,
}
//endregion

//region list
#[derive(Builder)]
pub struct ListAlertDefinitions<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    /// Substring match on the definition name.
    name: Option<&'a str>,
    service_id: Option<&'a str>,
    limit: Option<u32>,
    cursor: Option<&'a str>,
}

impl Client {
    pub fn list_alert_definitions(&self) -> ListAlertDefinitionsBuilder<'_> {
        ListAlertDefinitions::builder(self)
    }
}

impl<'a> ListAlertDefinitions<'a> {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(name) = self.name {
            params.push(("name", name.to_owned()));
        }
        if let Some(service_id) = self.service_id {
            params.push(("service_id", service_id.to_owned()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }

    pub async fn send(&self) -> Result<CursorList<AlertDefinition>, Error> {
        let mut params = self.query();
        if let Some(cursor) = self.cursor {
            params.push(("cursor", cursor.to_owned()));
        }
        let resp = self
            .client
            .get("/alerts/definitions", RequestOptions::with_params(params))
            .await?;
        Ok(parse_json_response(resp).await?)
    }

    /// Walk the whole collection; a `cursor` set on the builder is ignored.
    pub fn paginator(self) -> ListPaginator<'a, CursorList<AlertDefinition>> {
        let params = self.query();
        ListPaginator::new(self.client, "/alerts/definitions".to_owned(), params)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreateAlertDefinition<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    name: &'a str,
    service_id: Option<&'a str>,
    source: &'a str,
    metric: &'a str,
    dimensions: Option<HashMap<String, Vec<String>>>,
    evaluation_strategy: EvaluationStrategy,
    integration_ids: Option<Vec<String>>,
}

impl Client {
    pub fn create_alert_definition(&self) -> CreateAlertDefinitionBuilder<'_> {
        CreateAlertDefinition::builder(self)
    }
}

impl CreateAlertDefinition<'_> {
    pub async fn send(&self) -> Result<AlertDefinition, Error> {
        if self.name.is_empty() {
            return Err(Error::MissingName);
        }
        let resp = self
            .client
            .post_json("/alerts/definitions", self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region get
#[derive(Builder)]
pub struct GetAlertDefinition<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    definition_id: &'a str,
}

impl Client {
    pub fn get_alert_definition(&self) -> GetAlertDefinitionBuilder<'_> {
        GetAlertDefinition::builder(self)
    }
}

impl GetAlertDefinition<'_> {
    pub async fn send(&self) -> Result<AlertDefinition, Error> {
        if self.definition_id.is_empty() {
            return Err(Error::MissingId);
        }
        let path = join_path(&["alerts", "definitions", self.definition_id]);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdateAlertDefinition<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    definition_id: &'a str,
    name: Option<&'a str>,
    dimensions: Option<HashMap<String, Vec<String>>>,
    evaluation_strategy: Option<EvaluationStrategy>,
    integration_ids: Option<Vec<String>>,
}

impl Client {
    pub fn update_alert_definition(&self) -> UpdateAlertDefinitionBuilder<'_> {
        UpdateAlertDefinition::builder(self)
    }
}

impl UpdateAlertDefinition<'_> {
    pub async fn send(&self) -> Result<AlertDefinition, Error> {
        if self.definition_id.is_empty() {
            return Err(Error::MissingId);
        }
        let path = join_path(&["alerts", "definitions", self.definition_id]);
        let resp = self
            .client
            .put_json(&path, self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region delete
#[derive(Builder)]
pub struct DeleteAlertDefinition<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    definition_id: &'a str,
}

impl Client {
    pub fn delete_alert_definition(&self) -> DeleteAlertDefinitionBuilder<'_> {
        DeleteAlertDefinition::builder(self)
    }
}

impl DeleteAlertDefinition<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        if self.definition_id.is_empty() {
            return Err(Error::MissingId);
        }
        let path = join_path(&["alerts", "definitions", self.definition_id]);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
