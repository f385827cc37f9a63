//! Domain API (`/domains/v1`).
//!
//! Domains are keyed by a server-assigned ID and may be attached to a service
//! after creation.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/domains/)

use crate::client::{Client, RequestOptions};
use crate::error::Error;
use crate::paginator::{CursorList, ListPaginator};
use bon::Builder;
use nimbus_sdk_common::helper::{expect_status, parse_json_response};
use nimbus_sdk_common::path::join_path;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

//region response
#[derive(Deserialize, Debug)]
pub struct Domain {
    pub id: String,
    pub fqdn: String,
    pub service_id: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}
//endregion

//region list
#[derive(Builder)]
pub struct ListDomains<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    /// Filter on exact FQDN or any substring of it.
    fqdn: Option<&'a str>,
    service_id: Option<&'a str>,
    limit: Option<u32>,
    cursor: Option<&'a str>,
}

impl Client {
    pub fn list_domains(&self) -> ListDomainsBuilder<'_> {
        ListDomains::builder(self)
    }
}

impl<'a> ListDomains<'a> {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(fqdn) = self.fqdn {
            params.push(("fqdn", fqdn.to_owned()));
        }
        if let Some(service_id) = self.service_id {
            params.push(("service_id", service_id.to_owned()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }

    pub async fn send(&self) -> Result<CursorList<Domain>, Error> {
        let mut params = self.query();
        if let Some(cursor) = self.cursor {
            params.push(("cursor", cursor.to_owned()));
        }
        let resp = self
            .client
            .get("/domains/v1", RequestOptions::with_params(params))
            .await?;
        Ok(parse_json_response(resp).await?)
    }

    /// Walk the whole collection; a `cursor` set on the builder is ignored.
    pub fn paginator(self) -> ListPaginator<'a, CursorList<Domain>> {
        let params = self.query();
        ListPaginator::new(self.client, "/domains/v1".to_owned(), params)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreateDomain<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    fqdn: &'a str,
    service_id: Option<&'a str>,
}

impl Client {
    pub fn create_domain(&self) -> CreateDomainBuilder<'_> {
        CreateDomain::builder(self)
    }
}

impl CreateDomain<'_> {
    pub async fn send(&self) -> Result<Domain, Error> {
        if self.fqdn.is_empty() {
            return Err(Error::MissingFqdn);
        }
        let resp = self
            .client
            .post_json("/domains/v1", self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region get
#[derive(Builder)]
pub struct GetDomain<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    domain_id: &'a str,
}

impl Client {
    pub fn get_domain(&self) -> GetDomainBuilder<'_> {
        GetDomain::builder(self)
    }
}

impl GetDomain<'_> {
    pub async fn send(&self) -> Result<Domain, Error> {
        if self.domain_id.is_empty() {
            return Err(Error::MissingDomainId);
        }
        let path = join_path(&["domains", "v1", self.domain_id]);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
/// Attaches the domain to a service, or detaches it when `service_id` is unset.
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdateDomain<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    domain_id: &'a str,
    service_id: Option<&'a str>,
}

impl Client {
    pub fn update_domain(&self) -> UpdateDomainBuilder<'_> {
        UpdateDomain::builder(self)
    }
}

impl UpdateDomain<'_> {
    pub async fn send(&self) -> Result<Domain, Error> {
        if self.domain_id.is_empty() {
            return Err(Error::MissingDomainId);
        }
        let path = join_path(&["domains", "v1", self.domain_id]);
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
pub struct DeleteDomain<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    domain_id: &'a str,
}

impl Client {
    pub fn delete_domain(&self) -> DeleteDomainBuilder<'_> {
        DeleteDomain::builder(self)
    }
}

impl DeleteDomain<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        if self.domain_id.is_empty() {
            return Err(Error::MissingDomainId);
        }
        let path = join_path(&["domains", "v1", self.domain_id]);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
