//! Server pool configuration.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/services/pool/)

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
pub struct Pool {
    pub id: String,
    pub service_id: String,
    pub version: i32,
    pub name: String,
    pub comment: Option<String>,
    pub shield: Option<String>,
    pub request_condition: Option<String>,
    pub max_conn_default: Option<u32>,
    pub connect_timeout: Option<u32>,
    pub first_byte_timeout: Option<u32>,
    pub quorum: Option<u8>,
    pub use_tls: Option<bool>,
    pub tls_check_cert: Option<bool>,
    /// `"random"`, `"hash"` or `"client"`.
    #[serde(rename = "type")]
    pub pool_type: Option<String>,
    pub healthcheck: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
}
//endregion

fn pool_root(service_id: &str, version: i32) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "pool"])
}

fn pool_item(service_id: &str, version: i32, name: &str) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "pool", name])
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
pub struct ListPools<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
}

impl Client {
    pub fn list_pools(&self) -> ListPoolsBuilder<'_> {
        ListPools::builder(self)
    }
}

impl ListPools<'_> {
    pub async fn send(&self) -> Result<Vec<Pool>, Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        if self.version == 0 {
            return Err(Error::MissingServiceVersion);
        }
        let path = pool_root(self.service_id, self.version);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreatePool<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,

    name: &'a str,
    comment: Option<&'a str>,
    shield: Option<&'a str>,
    request_condition: Option<&'a str>,
    max_conn_default: Option<u32>,
    connect_timeout: Option<u32>,
    first_byte_timeout: Option<u32>,
    quorum: Option<u8>,
    use_tls: Option<bool>,
    tls_check_cert: Option<bool>,
    #[serde(rename = "type")]
    pool_type: Option<&'a str>,
    healthcheck: Option<&'a str>,
}

impl Client {
    pub fn create_pool(&self) -> CreatePoolBuilder<'_> {
        CreatePool::builder(self)
    }
}

impl CreatePool<'_> {
    pub async fn send(&self) -> Result<Pool, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = pool_root(self.service_id, self.version);
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
pub struct GetPool<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn get_pool(&self) -> GetPoolBuilder<'_> {
        GetPool::builder(self)
    }
}

impl GetPool<'_> {
    pub async fn send(&self) -> Result<Pool, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = pool_item(self.service_id, self.version, self.name);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdatePool<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,
    #[serde(skip_serializing)]
    name: &'a str,

    /// Renames the pool.
    new_name: Option<&'a str>,
    comment: Option<&'a str>,
    shield: Option<&'a str>,
    request_condition: Option<&'a str>,
    max_conn_default: Option<u32>,
    connect_timeout: Option<u32>,
    first_byte_timeout: Option<u32>,
    quorum: Option<u8>,
    use_tls: Option<bool>,
    tls_check_cert: Option<bool>,
    #[serde(rename = "type")]
    pool_type: Option<&'a str>,
    healthcheck: Option<&'a str>,
}

impl Client {
    pub fn update_pool(&self) -> UpdatePoolBuilder<'_> {
        UpdatePool::builder(self)
    }
}

impl UpdatePool<'_> {
    pub async fn send(&self) -> Result<Pool, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = pool_item(self.service_id, self.version, self.name);
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
pub struct DeletePool<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn delete_pool(&self) -> DeletePoolBuilder<'_> {
        DeletePool::builder(self)
    }
}

impl DeletePool<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = pool_item(self.service_id, self.version, self.name);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
