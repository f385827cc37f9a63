//! Director (backend load-balancing group) configuration.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/services/director/)

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
pub struct Director {
    pub service_id: String,
    pub version: i32,
    pub name: String,
    pub comment: Option<String>,
    pub shield: Option<String>,
    /// Percentage of capacity that must be up, 0-100.
    pub quorum: Option<u8>,
    /// 1 = random, 3 = hash, 4 = client.
    #[serde(rename = "type")]
    pub director_type: Option<u8>,
    pub retries: Option<u8>,
    /// Names of member backends; managed by the server.
    pub backends: Option<Vec<String>>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
}
//endregion

fn director_root(service_id: &str, version: i32) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "director"])
}

fn director_item(service_id: &str, version: i32, name: &str) -> String {
    let version = version.to_string();
    join_path(&["service", service_id, "version", &version, "director", name])
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
pub struct ListDirectors<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
}

impl Client {
    pub fn list_directors(&self) -> ListDirectorsBuilder<'_> {
        ListDirectors::builder(self)
    }
}

impl ListDirectors<'_> {
    pub async fn send(&self) -> Result<Vec<Director>, Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        if self.version == 0 {
            return Err(Error::MissingServiceVersion);
        }
        let path = director_root(self.service_id, self.version);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreateDirector<'a> {
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
    quorum: Option<u8>,
    #[serde(rename = "type")]
    director_type: Option<u8>,
    retries: Option<u8>,
}

impl Client {
    pub fn create_director(&self) -> CreateDirectorBuilder<'_> {
        CreateDirector::builder(self)
    }
}

impl CreateDirector<'_> {
    pub async fn send(&self) -> Result<Director, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = director_root(self.service_id, self.version);
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
pub struct GetDirector<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn get_director(&self) -> GetDirectorBuilder<'_> {
        GetDirector::builder(self)
    }
}

impl GetDirector<'_> {
    pub async fn send(&self) -> Result<Director, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = director_item(self.service_id, self.version, self.name);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdateDirector<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    #[serde(skip_serializing)]
    version: i32,
    #[serde(skip_serializing)]
    name: &'a str,

    /// Renames the director.
    new_name: Option<&'a str>,
    comment: Option<&'a str>,
    shield: Option<&'a str>,
    quorum: Option<u8>,
    #[serde(rename = "type")]
    director_type: Option<u8>,
    retries: Option<u8>,
}

impl Client {
    pub fn update_director(&self) -> UpdateDirectorBuilder<'_> {
        UpdateDirector::builder(self)
    }
}

impl UpdateDirector<'_> {
    pub async fn send(&self) -> Result<Director, Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = director_item(self.service_id, self.version, self.name);
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
pub struct DeleteDirector<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
    version: i32,
    name: &'a str,
}

impl Client {
    pub fn delete_director(&self) -> DeleteDirectorBuilder<'_> {
        DeleteDirector::builder(self)
    }
}

impl DeleteDirector<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        check_identity(self.service_id, self.version, self.name)?;
        let path = director_item(self.service_id, self.version, self.name);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
