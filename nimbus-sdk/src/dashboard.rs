//! Observability dashboards.
//!
//! A dashboard is an ordered grid of items; each item binds a data source to
//! a visualization. Items are composed with [`DashboardItem::builder`].
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/observability/dashboards/)

use crate::client::{Client, RequestOptions};
use crate::error::Error;
use bon::Builder;
use nimbus_sdk_common::helper::{expect_status, parse_json_response};
use nimbus_sdk_common::path::join_path;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

//region types
#[derive(Deserialize, Debug)]
pub struct Dashboard {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub items: Vec<DashboardItem>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize, Deserialize, Debug, Clone)]
#[builder(on(String, into))]
pub struct DashboardItem {
    /// Server-assigned; leave unset when creating.
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    /// Grid columns the item spans, 1-12.
    pub span: Option<u8>,
    pub data_source: DataSource,
    pub visualization: Visualization,
}

#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize, Deserialize, Debug, Clone)]
#[builder(on(String, into))]
pub struct DataSource {
    /// `"stats.edge"`, `"stats.domain"` or `"stats.origin"`.
    #[serde(rename = "type")]
    pub source_type: String,
    pub config: DataSourceConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DataSourceConfig {
    pub metrics: Vec<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize, Deserialize, Debug, Clone)]
#[builder(on(String, into))]
pub struct Visualization {
    /// Only `"chart"` today.
    #[serde(rename = "type")]
    pub visualization_type: String,
    pub config: VisualizationConfig,
}

#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize, Deserialize, Debug, Clone)]
#[builder(on(String, into))]
pub struct VisualizationConfig {
    /// `"line"`, `"bar"` or `"single-metric"`.
    pub plot_type: String,
    pub calculation_method: Option<String>,
    pub format: Option<String>,
}
//endregion

#[derive(Deserialize, Debug)]
struct DashboardList {
    data: Vec<Dashboard>,
}

//region list
#[derive(Builder)]
pub struct ListDashboards<'a> {
    #[builder(start_fn)]
    client: &'a Client,
}

impl Client {
    pub fn list_dashboards(&self) -> ListDashboardsBuilder<'_> {
        ListDashboards::builder(self)
    }
}

impl ListDashboards<'_> {
    pub async fn send(&self) -> Result<Vec<Dashboard>, Error> {
        let resp = self
            .client
            .get("/observability/dashboards", RequestOptions::default())
            .await?;
        let list: DashboardList = parse_json_response(resp).await?;
        Ok(list.data)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreateDashboard<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    name: &'a str,
    description: Option<&'a str>,
    items: Option<Vec<DashboardItem>>,
}

impl Client {
    pub fn create_dashboard(&self) -> CreateDashboardBuilder<'_> {
        CreateDashboard::builder(self)
    }
}

impl CreateDashboard<'_> {
    pub async fn send(&self) -> Result<Dashboard, Error> {
        if self.name.is_empty() {
            return Err(Error::MissingName);
        }
        let resp = self
            .client
            .post_json("/observability/dashboards", self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region get
#[derive(Builder)]
pub struct GetDashboard<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    dashboard_id: &'a str,
}

impl Client {
    pub fn get_dashboard(&self) -> GetDashboardBuilder<'_> {
        GetDashboard::builder(self)
    }
}

impl GetDashboard<'_> {
    pub async fn send(&self) -> Result<Dashboard, Error> {
        if self.dashboard_id.is_empty() {
            return Err(Error::MissingId);
        }
        let path = join_path(&["observability", "dashboards", self.dashboard_id]);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
/// Replaces whatever fields are set; `items`, when given, replaces the whole grid.
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdateDashboard<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    dashboard_id: &'a str,
    name: Option<&'a str>,
    description: Option<&'a str>,
    items: Option<Vec<DashboardItem>>,
}

impl Client {
    pub fn update_dashboard(&self) -> UpdateDashboardBuilder<'_> {
        UpdateDashboard::builder(self)
    }
}

impl UpdateDashboard<'_> {
    pub async fn send(&self) -> Result<Dashboard, Error> {
        if self.dashboard_id.is_empty() {
            return Err(Error::MissingId);
        }
        let path = join_path(&["observability", "dashboards", self.dashboard_id]);
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
pub struct DeleteDashboard<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    dashboard_id: &'a str,
}

impl Client {
    pub fn delete_dashboard(&self) -> DeleteDashboardBuilder<'_> {
        DeleteDashboard::builder(self)
    }
}

impl DeleteDashboard<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        if self.dashboard_id.is_empty() {
            return Err(Error::MissingId);
        }
        let path = join_path(&["observability", "dashboards", self.dashboard_id]);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
