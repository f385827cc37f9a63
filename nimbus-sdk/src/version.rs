//! Service version lifecycle.
//!
//! Most configuration resources hang off a draft version; activating a version
//! freezes it and puts it in service.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/services/version/)

use crate::client::{Client, RequestOptions};
use crate::error::Error;
use bon::Builder;
use nimbus_sdk_common::helper::parse_json_response;
use nimbus_sdk_common::path::join_path;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

//region response
#[derive(Deserialize, Debug)]
pub struct Version {
    pub number: i32,
    pub service_id: String,
    pub active: bool,
    pub locked: bool,
    pub comment: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
}

#[derive(Deserialize, Debug)]
pub struct ValidationResult {
    /// `"ok"` or `"error"`.
    pub status: String,
    pub msg: Option<String>,
    pub errors: Option<Vec<String>>,
}
//endregion

fn version_path(service_id: &str, version: i32, rest: &[&str]) -> String {
    let version = version.to_string();
    let mut segments = vec!["service", service_id, "version", version.as_str()];
    segments.extend_from_slice(rest);
    join_path(&segments)
}

fn check_identity(service_id: &str, version: i32) -> Result<(), Error> {
    if service_id.is_empty() {
        return Err(Error::MissingServiceId);
    }
    if version == 0 {
        return Err(Error::MissingServiceVersion);
    }
    Ok(())
}

//region list
#[derive(Builder)]
pub struct ListVersions<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
}

impl Client {
    pub fn list_versions(&self) -> ListVersionsBuilder<'_> {
        ListVersions::builder(self)
    }
}

impl ListVersions<'_> {
    pub async fn send(&self) -> Result<Vec<Version>, Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        let path = join_path(&["service", self.service_id, "version"]);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region create
/// Creates a new draft version at the end of the service's version list.
#[derive(Builder, Serialize)]
pub struct CreateVersion<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[serde(skip_serializing)]
    service_id: &'a str,
}

impl Client {
    pub fn create_version(&self) -> CreateVersionBuilder<'_> {
        CreateVersion::builder(self)
    }
}

impl CreateVersion<'_> {
    pub async fn send(&self) -> Result<Version, Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        let path = join_path(&["service", self.service_id, "version"]);
        let resp = self
            .client
            .post_json(&path, self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region get
#[derive(Builder)]
pub struct GetVersion<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
}

impl Client {
    pub fn get_version(&self) -> GetVersionBuilder<'_> {
        GetVersion::builder(self)
    }
}

impl GetVersion<'_> {
    pub async fn send(&self) -> Result<Version, Error> {
        check_identity(self.service_id, self.version)?;
        let path = version_path(self.service_id, self.version, &[]);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdateVersion<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,
    comment: Option<&'a str>,
}

impl Client {
    pub fn update_version(&self) -> UpdateVersionBuilder<'_> {
        UpdateVersion::builder(self)
    }
}

impl UpdateVersion<'_> {
    pub async fn send(&self) -> Result<Version, Error> {
        check_identity(self.service_id, self.version)?;
        let path = version_path(self.service_id, self.version, &[]);
        let resp = self
            .client
            .put_form(&path, self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region clone
/// Copies a version into a fresh draft; the source may be active or locked.
#[derive(Builder, Serialize)]
pub struct CloneVersion<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,
}

impl Client {
    pub fn clone_version(&self) -> CloneVersionBuilder<'_> {
        CloneVersion::builder(self)
    }
}

impl CloneVersion<'_> {
    pub async fn send(&self) -> Result<Version, Error> {
        check_identity(self.service_id, self.version)?;
        let path = version_path(self.service_id, self.version, &["clone"]);
        let resp = self
            .client
            .put_json(&path, self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region activate
#[derive(Builder, Serialize)]
pub struct ActivateVersion<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,
}

impl Client {
    pub fn activate_version(&self) -> ActivateVersionBuilder<'_> {
        ActivateVersion::builder(self)
    }
}

impl ActivateVersion<'_> {
    pub async fn send(&self) -> Result<Version, Error> {
        check_identity(self.service_id, self.version)?;
        let path = version_path(self.service_id, self.version, &["activate"]);
        let resp = self
            .client
            .put_json(&path, self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region deactivate
#[derive(Builder, Serialize)]
pub struct DeactivateVersion<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,
}

impl Client {
    pub fn deactivate_version(&self) -> DeactivateVersionBuilder<'_> {
        DeactivateVersion::builder(self)
    }
}

impl DeactivateVersion<'_> {
    pub async fn send(&self) -> Result<Version, Error> {
        check_identity(self.service_id, self.version)?;
        let path = version_path(self.service_id, self.version, &["deactivate"]);
        let resp = self
            .client
            .put_json(&path, self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region validate
#[derive(Builder)]
pub struct ValidateVersion<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
}

impl Client {
    pub fn validate_version(&self) -> ValidateVersionBuilder<'_> {
        ValidateVersion::builder(self)
    }
}

impl ValidateVersion<'_> {
    pub async fn send(&self) -> Result<ValidationResult, Error> {
        check_identity(self.service_id, self.version)?;
        let path = version_path(self.service_id, self.version, &["validate"]);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion
