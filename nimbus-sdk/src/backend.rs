//! Backend (origin server) configuration.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/services/backend/)

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
pub struct Backend {
    pub service_id: String,
    pub version: i32,
    pub name: String,
    pub address: Option<String>,
    pub port: Option<u16>,
    pub weight: Option<u32>,
    pub max_conn: Option<u32>,
    pub connect_timeout: Option<u32>,
    pub first_byte_timeout: Option<u32>,
    pub between_bytes_timeout: Option<u32>,
    pub shield: Option<String>,
    pub healthcheck: Option<String>,
    pub override_host: Option<String>,
    pub use_ssl: Option<bool>,
    pub ssl_check_cert: Option<bool>,
    pub ssl_cert_hostname: Option<String>,
    pub comment: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
}
//endregion

fn backend_root(service_id: &str, version: i32) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "backend"])
}

fn backend_item(service_id: &str, version: i32, name: &str) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "backend", name])
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
pub struct ListBackends<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
}

impl Client {
    pub fn list_backends(&self) -> ListBackendsBuilder<'_> {
        ListBackends::builder(self)
    }
}

impl ListBackends<'_> {
    pub async fn send(&self) -> Result<Vec<Backend>, Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        if self.version == 0 {
            return Err(Error::MissingServiceVersion);
        }
        let path = backend_root(self.service_id, self.version);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreateBackend<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,

    name: &'a str,
    /// Hostname or IPv4/IPv6 address of the origin.
    address: Option<&'a str>,
    port: Option<u16>,
    weight: Option<u32>,
    max_conn: Option<u32>,
    connect_timeout: Option<u32>,
    first_byte_timeout: Option<u32>,
    between_bytes_timeout: Option<u32>,
    shield: Option<&'a str>,
    healthcheck: Option<&'a str>,
    override_host: Option<&'a str>,
    use_ssl: Option<bool>,
    ssl_check_cert: Option<bool>,
    ssl_cert_hostname: Option<&'a str>,
    comment: Option<&'a str>,
}

impl Client {
    pub fn create_backend(&self) -> CreateBackendBuilder<'_> {
        CreateBackend::builder(self)
    }
}

impl CreateBackend<'_> {
    pub async fn send(&self) -> Result<Backend, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = backend_root(self.service_id, self.version);
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
pub struct GetBackend<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn get_backend(&self) -> GetBackendBuilder<'_> {
        GetBackend::builder(self)
    }
}

impl GetBackend<'_> {
    pub async fn send(&self) -> Result<Backend, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = backend_item(self.service_id, self.version, self.name);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdateBackend<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,
    #[serde(skip_serializing)]
    name: &'a str,

    /// Renames the backend.
    new_name: Option<&'a str>,
    address: Option<&'a str>,
    port: Option<u16>,
    weight: Option<u32>,
    max_conn: Option<u32>,
    connect_timeout: Option<u32>,
    first_byte_timeout: Option<u32>,
    between_bytes_timeout: Option<u32>,
    shield: Option<&'a str>,
    healthcheck: Option<&'a str>,
    override_host: Option<&'a str>,
    use_ssl: Option<bool>,
    ssl_check_cert: Option<bool>,
    ssl_cert_hostname: Option<&'a str>,
    comment: Option<&'a str>,
}

impl Client {
    pub fn update_backend(&self) -> UpdateBackendBuilder<'_> {
        UpdateBackend::builder(self)
    }
}

impl UpdateBackend<'_> {
    pub async fn send(&self) -> Result<Backend, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = backend_item(self.service_id, self.version, self.name);
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
pub struct DeleteBackend<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn delete_backend(&self) -> DeleteBackendBuilder<'_> {
        DeleteBackend::builder(self)
    }
}

impl DeleteBackend<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = backend_item(self.service_id, self.version, self.name);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
