//! Service API.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/services/service/)

use crate::client::{Client, RequestOptions};
use crate::error::Error;
use crate::paginator::{ListPaginator, PagedList};
use bon::Builder;
use nimbus_sdk_common::helper::{expect_status, parse_json_response};
use nimbus_sdk_common::path::join_path;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

//region response
#[derive(Deserialize, Debug)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// `"vcl"` or `"wasm"`.
    #[serde(rename = "type")]
    pub service_type: Option<String>,
    pub customer_id: Option<String>,
    pub comment: Option<String>,
    pub active_version: Option<i32>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
}
//endregion

//region list
#[derive(Builder)]
pub struct ListServices<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    page: Option<u32>,
    per_page: Option<u32>,
    /// Sort key, e.g. `"created"` or `"-updated"`.
    sort: Option<&'a str>,
}

impl Client {
    pub fn list_services(&self) -> ListServicesBuilder<'_> {
        ListServices::builder(self)
    }
}

impl<'a> ListServices<'a> {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if let Some(sort) = self.sort {
            params.push(("sort", sort.to_owned()));
        }
        params
    }

    pub async fn send(&self) -> Result<PagedList<Service>, Error> {
        let mut params = self.query();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        let resp = self
            .client
            .get("/service", RequestOptions::with_params(params))
            .await?;
        Ok(parse_json_response(resp).await?)
    }

    /// Walk every page from the first one; a `page` set on the builder is ignored.
    pub fn paginator(self) -> ListPaginator<'a, PagedList<Service>> {
        let params = self.query();
        ListPaginator::new(self.client, "/service".to_owned(), params)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreateService<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    name: &'a str,
    /// `"vcl"` or `"wasm"`; the server defaults to `"vcl"`.
    #[serde(rename = "type")]
    service_type: Option<&'a str>,
    comment: Option<&'a str>,
}

impl Client {
    pub fn create_service(&self) -> CreateServiceBuilder<'_> {
        CreateService::builder(self)
    }
}

impl CreateService<'_> {
    pub async fn send(&self) -> Result<Service, Error> {
        if self.name.is_empty() {
            return Err(Error::MissingName);
        }
        let resp = self
            .client
            .post_json("/service", self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region get
#[derive(Builder)]
pub struct GetService<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
}

impl Client {
    pub fn get_service(&self) -> GetServiceBuilder<'_> {
        GetService::builder(self)
    }
}

impl GetService<'_> {
    pub async fn send(&self) -> Result<Service, Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        let path = join_path(&["service", self.service_id]);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdateService<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    service_id: &'a str,
    name: Option<&'a str>,
    comment: Option<&'a str>,
}

impl Client {
    pub fn update_service(&self) -> UpdateServiceBuilder<'_> {
        UpdateService::builder(self)
    }
}

impl UpdateService<'_> {
    pub async fn send(&self) -> Result<Service, Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        let path = join_path(&["service", self.service_id]);
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
pub struct DeleteService<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: &'a str,
}

impl Client {
    pub fn delete_service(&self) -> DeleteServiceBuilder<'_> {
        DeleteService::builder(self)
    }
}

impl DeleteService<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        let path = join_path(&["service", self.service_id]);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
