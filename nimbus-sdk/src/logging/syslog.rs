//! Syslog log streaming.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/logging/syslog/)

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
pub struct Syslog {
    pub service_id: String,
    pub version: i32,
    pub name: String,
    pub address: Option<String>,
    pub port: Option<u16>,
    pub use_tls: Option<bool>,
    pub tls_ca_cert: Option<String>,
    pub tls_hostname: Option<String>,
    pub token: Option<String>,
    pub format: Option<String>,
    pub format_version: Option<u8>,
    pub message_type: Option<String>,
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

fn syslog_root(service_id: &str, version: i32) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "logging", "syslog"])
}

fn syslog_item(service_id: &str, version: i32, name: &str) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "logging", "syslog", name])
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
pub struct ListSyslogs<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
}

impl Client {
    pub fn list_syslogs(&self) -> ListSyslogsBuilder<'_> {
        ListSyslogs::builder(self)
    }
}

impl ListSyslogs<'_> {
    pub async fn send(&self) -> Result<Vec<Syslog>, Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        if self.version == 0 {
            return Err(Error::MissingServiceVersion);
        }
        let path = syslog_root(self.service_id, self.version);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreateSyslog<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,

    name: &'a str,
    address: Option<&'a str>,
    port: Option<u16>,
    use_tls: Option<bool>,
    tls_ca_cert: Option<&'a str>,
    tls_hostname: Option<&'a str>,
    token: Option<&'a str>,
    format: Option<&'a str>,
    format_version: Option<u8>,
    message_type: Option<&'a str>,
    placement: Option<&'a str>,
    response_condition: Option<&'a str>,
}

impl Client {
    pub fn create_syslog(&self) -> CreateSyslogBuilder<'_> {
        CreateSyslog::builder(self)
    }
}

impl CreateSyslog<'_> {
    pub async fn send(&self) -> Result<Syslog, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = syslog_root(self.service_id, self.version);
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
pub struct GetSyslog<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn get_syslog(&self) -> GetSyslogBuilder<'_> {
        GetSyslog::builder(self)
    }
}

impl GetSyslog<'_> {
    pub async fn send(&self) -> Result<Syslog, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = syslog_item(self.service_id, self.version, self.name);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdateSyslog<'a> {
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
    address: Option<&'a str>,
    port: Option<u16>,
    use_tls: Option<bool>,
    tls_ca_cert: Option<&'a str>,
    tls_hostname: Option<&'a str>,
    token: Option<&'a str>,
    format: Option<&'a str>,
    format_version: Option<u8>,
    message_type: Option<&'a str>,
    placement: Option<&'a str>,
    response_condition: Option<&'a str>,
}

impl Client {
    pub fn update_syslog(&self) -> UpdateSyslogBuilder<'_> {
        UpdateSyslog::builder(self)
    }
}

impl UpdateSyslog<'_> {
    pub async fn send(&self) -> Result<Syslog, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = syslog_item(self.service_id, self.version, self.name);
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
pub struct DeleteSyslog<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn delete_syslog(&self) -> DeleteSyslogBuilder<'_> {
        DeleteSyslog::builder(self)
    }
}

impl DeleteSyslog<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = syslog_item(self.service_id, self.version, self.name);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
