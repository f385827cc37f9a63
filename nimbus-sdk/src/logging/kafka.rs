//! Apache Kafka log streaming.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/logging/kafka/)

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
pub struct Kafka {
    pub service_id: String,
    pub version: i32,
    pub name: String,
    /// Comma-separated `host:port` seed brokers.
    pub brokers: Option<String>,
    pub topic: Option<String>,
    /// `-1` (all), `0` or `1`.
    pub required_acks: Option<i8>,
    /// `"gzip"`, `"snappy"` or `"lz4"`.
    pub compression_codec: Option<String>,
    pub use_tls: Option<bool>,
    pub tls_ca_cert: Option<String>,
    pub tls_hostname: Option<String>,
    pub auth_method: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub parse_log_keyvals: Option<bool>,
    pub request_max_bytes: Option<u32>,
    pub format: Option<String>,
    pub format_version: Option<u8>,
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

fn kafka_root(service_id: &str, version: i32) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "logging", "kafka"])
}

fn kafka_item(service_id: &str, version: i32, name: &str) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "logging", "kafka", name])
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
pub struct ListKafkas<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
}

impl Client {
    pub fn list_kafkas(&self) -> ListKafkasBuilder<'_> {
        ListKafkas::builder(self)
    }
}

impl ListKafkas<'_> {
    pub async fn send(&self) -> Result<Vec<Kafka>, Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        if self.version == 0 {
            return Err(Error::MissingServiceVersion);
        }
        let path = kafka_root(self.service_id, self.version);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreateKafka<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,

    name: &'a str,
    brokers: Option<&'a str>,
    topic: Option<&'a str>,
    required_acks: Option<i8>,
    compression_codec: Option<&'a str>,
    use_tls: Option<bool>,
    tls_ca_cert: Option<&'a str>,
    tls_hostname: Option<&'a str>,
    auth_method: Option<&'a str>,
    user: Option<&'a str>,
    password: Option<&'a str>,
    parse_log_keyvals: Option<bool>,
    request_max_bytes: Option<u32>,
    format: Option<&'a str>,
    format_version: Option<u8>,
    placement: Option<&'a str>,
    response_condition: Option<&'a str>,
}

impl Client {
    pub fn create_kafka(&self) -> CreateKafkaBuilder<'_> {
        CreateKafka::builder(self)
    }
}

impl CreateKafka<'_> {
    pub async fn send(&self) -> Result<Kafka, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = kafka_root(self.service_id, self.version);
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
pub struct GetKafka<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn get_kafka(&self) -> GetKafkaBuilder<'_> {
        GetKafka::builder(self)
    }
}

impl GetKafka<'_> {
    pub async fn send(&self) -> Result<Kafka, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = kafka_item(self.service_id, self.version, self.name);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdateKafka<'a> {
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
    brokers: Option<&'a str>,
    topic: Option<&'a str>,
    required_acks: Option<i8>,
    compression_codec: Option<&'a str>,
    use_tls: Option<bool>,
    tls_ca_cert: Option<&'a str>,
    tls_hostname: Option<&'a str>,
    auth_method: Option<&'a str>,
    user: Option<&'a str>,
    password: Option<&'a str>,
    parse_log_keyvals: Option<bool>,
    request_max_bytes: Option<u32>,
    format: Option<&'a str>,
    format_version: Option<u8>,
    placement: Option<&'a str>,
    response_condition: Option<&'a str>,
}

impl Client {
    pub fn update_kafka(&self) -> UpdateKafkaBuilder<'_> {
        UpdateKafka::builder(self)
    }
}

impl UpdateKafka<'_> {
    pub async fn send(&self) -> Result<Kafka, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = kafka_item(self.service_id, self.version, self.name);
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
pub struct DeleteKafka<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn delete_kafka(&self) -> DeleteKafkaBuilder<'_> {
        DeleteKafka::builder(self)
    }
}

impl DeleteKafka<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = kafka_item(self.service_id, self.version, self.name);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
