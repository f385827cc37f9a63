//! Amazon S3 log streaming.
//!
//! Authentication is either an access key pair or an IAM role ARN, and
//! compression is either `compression_codec` or a legacy `gzip_level`; the
//! server rejects requests setting both of either pair.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/logging/s3/)

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
pub struct S3 {
    pub service_id: String,
    pub version: i32,
    pub name: String,
    pub bucket_name: Option<String>,
    pub domain: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub iam_role: Option<String>,
    pub path: Option<String>,
    /// Seconds between log file rotations.
    pub period: Option<u32>,
    /// `"zstd"`, `"snappy"` or `"gzip"`.
    pub compression_codec: Option<String>,
    pub gzip_level: Option<u8>,
    pub format: Option<String>,
    pub format_version: Option<u8>,
    pub message_type: Option<String>,
    pub timestamp_format: Option<String>,
    pub redundancy: Option<String>,
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

fn s3_root(service_id: &str, version: i32) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "logging", "s3"])
}

fn s3_item(service_id: &str, version: i32, name: &str) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "logging", "s3", name])
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
pub struct ListS3s<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
}

impl Client {
    pub fn list_s3s(&self) -> ListS3sBuilder<'_> {
        ListS3s::builder(self)
    }
}

impl ListS3s<'_> {
    pub async fn send(&self) -> Result<Vec<S3>, Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        if self.version == 0 {
            return Err(Error::MissingServiceVersion);
        }
        let path = s3_root(self.service_id, self.version);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreateS3<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,

    name: &'a str,
    bucket_name: Option<&'a str>,
    domain: Option<&'a str>,
    access_key: Option<&'a str>,
    secret_key: Option<&'a str>,
    iam_role: Option<&'a str>,
    path: Option<&'a str>,
    period: Option<u32>,
    compression_codec: Option<&'a str>,
    gzip_level: Option<u8>,
    format: Option<&'a str>,
    format_version: Option<u8>,
    message_type: Option<&'a str>,
    timestamp_format: Option<&'a str>,
    redundancy: Option<&'a str>,
    placement: Option<&'a str>,
    response_condition: Option<&'a str>,
}

impl Client {
    pub fn create_s3(&self) -> CreateS3Builder<'_> {
        CreateS3::builder(self)
    }
}

impl CreateS3<'_> {
    pub async fn send(&self) -> Result<S3, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = s3_root(self.service_id, self.version);
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
pub struct GetS3<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn get_s3(&self) -> GetS3Builder<'_> {
        GetS3::builder(self)
    }
}

impl GetS3<'_> {
    pub async fn send(&self) -> Result<S3, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = s3_item(self.service_id, self.version, self.name);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdateS3<'a> {
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
    bucket_name: Option<&'a str>,
    domain: Option<&'a str>,
    access_key: Option<&'a str>,
    secret_key: Option<&'a str>,
    iam_role: Option<&'a str>,
    path: Option<&'a str>,
    period: Option<u32>,
    compression_codec: Option<&'a str>,
    gzip_level: Option<u8>,
    format: Option<&'a str>,
    format_version: Option<u8>,
    message_type: Option<&'a str>,
    timestamp_format: Option<&'a str>,
    redundancy: Option<&'a str>,
    placement: Option<&'a str>,
    response_condition: Option<&'a str>,
}

impl Client {
    pub fn update_s3(&self) -> UpdateS3Builder<'_> {
        UpdateS3::builder(self)
    }
}

impl UpdateS3<'_> {
    pub async fn send(&self) -> Result<S3, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = s3_item(self.service_id, self.version, self.name);
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
pub struct DeleteS3<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn delete_s3(&self) -> DeleteS3Builder<'_> {
        DeleteS3::builder(self)
    }
}

impl DeleteS3<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = s3_item(self.service_id, self.version, self.name);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
