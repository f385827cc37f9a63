//! Custom VCL file management.
//!
//! A version may carry several VCL files; exactly one is the entry point,
//! marked with `main` via [`ActivateVcl`].
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/vcl-services/vcl/)

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
pub struct Vcl {
    pub service_id: String,
    pub version: i32,
    pub name: String,
    pub content: Option<String>,
    #[serde(default)]
    pub main: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
}
//endregion

fn vcl_root(service_id: &str, version: i32) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "vcl"])
}

fn vcl_item(service_id: &str, version: i32, name: &str, rest: &[&str]) -> String {
    let version = version.to_string();
    let mut segments = vec!["service", service_id, "version", version.as_str(), "vcl", name];
    segments.extend_from_slice(rest);
    join_path(&segments)
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
pub struct ListVcls<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
}

impl Client {
    pub fn list_vcls(&self) -> ListVclsBuilder<'_> {
        ListVcls::builder(self)
    }
}

impl ListVcls<'_> {
    pub async fn send(&self) -> Result<Vec<Vcl>, Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        if self.version == 0 {
            return Err(Error::MissingServiceVersion);
        }
        let path = vcl_root(self.service_id, self.version);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreateVcl<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,

    name: &'a str,
    content: Option<&'a str>,
    main: Option<bool>,
}

impl Client {
    pub fn create_vcl(&self) -> CreateVclBuilder<'_> {
        CreateVcl::builder(self)
    }
}

impl CreateVcl<'_> {
    pub async fn send(&self) -> Result<Vcl, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = vcl_root(self.service_id, self.version);
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
pub struct GetVcl<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn get_vcl(&self) -> GetVclBuilder<'_> {
        GetVcl::builder(self)
    }
}

impl GetVcl<'_> {
    pub async fn send(&self) -> Result<Vcl, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = vcl_item(self.service_id, self.version, self.name, &[]);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdateVcl<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,
    #[serde(skip_serializing)]
    name: &'a str,

    /// Renames the VCL file.
    new_name: Option<&'a str>,
    content: Option<&'a str>,
}

impl Client {
    pub fn update_vcl(&self) -> UpdateVclBuilder<'_> {
        UpdateVcl::builder(self)
    }
}

impl UpdateVcl<'_> {
    pub async fn send(&self) -> Result<Vcl, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = vcl_item(self.service_id, self.version, self.name, &[]);
        let resp = self
            .client
            .put_form(&path, self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region activate
/// Marks this VCL file as the version's entry point.
#[derive(Builder, Serialize)]
pub struct ActivateVcl<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,
    #[serde(skip_serializing)]
    name: &'a str,
}

impl Client {
    pub fn activate_vcl(&self) -> ActivateVclBuilder<'_> {
        ActivateVcl::builder(self)
    }
}

impl ActivateVcl<'_> {
    pub async fn send(&self) -> Result<Vcl, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = vcl_item(self.service_id, self.version, self.name, &["main"]);
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
pub struct DeleteVcl<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn delete_vcl(&self) -> DeleteVclBuilder<'_> {
        DeleteVcl::builder(self)
    }
}

impl DeleteVcl<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = vcl_item(self.service_id, self.version, self.name, &[]);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
