//! Health check configuration.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/services/healthcheck/)

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
pub struct HealthCheck {
    pub service_id: String,
    pub version: i32,
    pub name: String,
    pub method: Option<String>,
    pub host: Option<String>,
    pub path: Option<String>,
    pub http_version: Option<String>,
    pub expected_response: Option<u32>,
    /// Milliseconds between checks.
    pub check_interval: Option<u32>,
    pub timeout: Option<u32>,
    /// How many of the last `window` checks must pass.
    pub threshold: Option<u32>,
    pub window: Option<u32>,
    pub initial: Option<u32>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
}
//endregion

fn health_check_root(service_id: &str, version: i32) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "healthcheck"])
}

fn health_check_item(service_id: &str, version: i32, name: &str) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "healthcheck", name])
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
pub struct ListHealthChecks<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
}

impl Client {
    pub fn list_health_checks(&self) -> ListHealthChecksBuilder<'_> {
        ListHealthChecks::builder(self)
    }
}

impl ListHealthChecks<'_> {
    pub async fn send(&self) -> Result<Vec<HealthCheck>, Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        if self.version == 0 {
            return Err(Error::MissingServiceVersion);
        }
        let path = health_check_root(self.service_id, self.version);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreateHealthCheck<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,

    name: &'a str,
    method: Option<&'a str>,
    host: Option<&'a str>,
    path: Option<&'a str>,
    http_version: Option<&'a str>,
    expected_response: Option<u32>,
    check_interval: Option<u32>,
    timeout: Option<u32>,
    threshold: Option<u32>,
    window: Option<u32>,
    initial: Option<u32>,
}

impl Client {
    pub fn create_health_check(&self) -> CreateHealthCheckBuilder<'_> {
        CreateHealthCheck::builder(self)
    }
}

impl CreateHealthCheck<'_> {
    pub async fn send(&self) -> Result<HealthCheck, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = health_check_root(self.service_id, self.version);
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
pub struct GetHealthCheck<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn get_health_check(&self) -> GetHealthCheckBuilder<'_> {
        GetHealthCheck::builder(self)
    }
}

impl GetHealthCheck<'_> {
    pub async fn send(&self) -> Result<HealthCheck, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = health_check_item(self.service_id, self.version, self.name);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdateHealthCheck<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,
    #[serde(skip_serializing)]
    name: &'a str,

    /// Renames the health check.
    new_name: Option<&'a str>,
    method: Option<&'a str>,
    host: Option<&'a str>,
    path: Option<&'a str>,
    http_version: Option<&'a str>,
    expected_response: Option<u32>,
    check_interval: Option<u32>,
    timeout: Option<u32>,
    threshold: Option<u32>,
    window: Option<u32>,
    initial: Option<u32>,
}

impl Client {
    pub fn update_health_check(&self) -> UpdateHealthCheckBuilder<'_> {
        UpdateHealthCheck::builder(self)
    }
}

impl UpdateHealthCheck<'_> {
    pub async fn send(&self) -> Result<HealthCheck, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = health_check_item(self.service_id, self.version, self.name);
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
pub struct DeleteHealthCheck<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn delete_health_check(&self) -> DeleteHealthCheckBuilder<'_> {
        DeleteHealthCheck::builder(self)
    }
}

impl DeleteHealthCheck<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = health_check_item(self.service_id, self.version, self.name);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
