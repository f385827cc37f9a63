//! Google BigQuery log streaming.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/logging/bigquery/)

use crate::client::{Client, RequestOptions};
use crate::error::Error;
use bon::Builder;
use nimbus_sdk_common::helper::{expect_status, parse_json_response};
use nimbus_sdk_common::path::join_path;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

//region response
#[derive(Deserialize, Debug)]
pub struct BigQuery {
    pub service_id: String,
    pub version: i32,
    pub name: String,
    pub project_id: Option<String>,
    pub dataset: Option<String>,
    pub table: Option<String>,
    /// strftime suffix appended to the table name.
    pub template_suffix: Option<String>,
    /// Service-account email.
    pub user: Option<String>,
    pub secret_key: Option<String>,
    pub account_name: Option<String>,
    pub format: Option<String>,
    pub placement: Option<String>,
    pub response_condition: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
}
//endregion

fn bigquery_root(service_id: &str, version: i32) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "logging", "bigquery"])
}

fn bigquery_item(service_id: &str, version: i32, name: &str) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "logging", "bigquery", name])
}

fn check_identity(service_id: &str, version: i32, name: &str) -> Result<(), Error> {
    if service_id.is_empty() {
        return Err(Error::MissingServiceId);
    }
    if version == 0 {
        return Err(Error::MissingServiceVersion);
    }
    if name.is_empty() {
        return Err(Error::MissingName);
    }
    Ok(())
}

//region list
#[derive(Builder)]
pub struct ListBigQueries<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
}

impl Client {
    pub fn list_bigqueries(&self) -> ListBigQueriesBuilder<'_> {
        ListBigQueries::builder(self)
    }
}

impl ListBigQueries<'_> {
    pub async fn send(&self) -> Result<Vec<BigQuery>, Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        if self.version == 0 {
            return Err(Error::MissingServiceVersion);
        }
        let path = bigquery_root(self.service_id, self.version);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreateBigQuery<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,

    name: &'a str,
    project_id: Option<&'a str>,
    dataset: Option<&'a str>,
    table: Option<&'a str>,
    template_suffix: Option<&'a str>,
    user: Option<&'a str>,
    secret_key: Option<&'a str>,
    account_name: Option<&'a str>,
    format: Option<&'a str>,
    placement: Option<&'a str>,
    response_condition: Option<&'a str>,
}

impl Client {
    pub fn create_bigquery(&self) -> CreateBigQueryBuilder<'_> {
        CreateBigQuery::builder(self)
    }
}

impl CreateBigQuery<'_> {
    pub async fn send(&self) -> Result<BigQuery, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = bigquery_root(self.service_id, self.version);
        let resp = self
            .client
            .post_form(&path, self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region get
#[derive(Builder)]
pub struct GetBigQuery<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn get_bigquery(&self) -> GetBigQueryBuilder<'_> {
        GetBigQuery::builder(self)
    }
}

impl GetBigQuery<'_> {
    pub async fn send(&self) -> Result<BigQuery, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = bigquery_item(self.service_id, self.version, self.name);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdateBigQuery<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,
    #[serde(skip_serializing)]
    name: &'a str,

    /// Renames the destination.
    new_name: Option<&'a str>,
    project_id: Option<&'a str>,
    dataset: Option<&'a str>,
    table: Option<&'a str>,
    template_suffix: Option<&'a str>,
    user: Option<&'a str>,
    secret_key: Option<&'a str>,
    account_name: Option<&'a str>,
    format: Option<&'a str>,
    placement: Option<&'a str>,
    response_condition: Option<&'a str>,
}

impl Client {
    pub fn update_bigquery(&self) -> UpdateBigQueryBuilder<'_> {
        UpdateBigQuery::builder(self)
    }
}

impl UpdateBigQuery<'_> {
    pub async fn send(&self) -> Result<BigQuery, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = bigquery_item(self.service_id, self.version, self.name);
        let resp = self
            .client
            .put_form(&path, self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region delete
#[derive(Builder)]
pub struct DeleteBigQuery<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn delete_bigquery(&self) -> DeleteBigQueryBuilder<'_> {
        DeleteBigQuery::builder(self)
    }
}

impl DeleteBigQuery<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = bigquery_item(self.service_id, self.version, self.name);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
