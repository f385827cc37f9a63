//! Web application firewall management.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/waf/firewalls/)

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
pub struct Firewall {
    pub id: String,
    pub service_id: String,
    pub service_version_number: i32,
    /// Condition deciding which requests are prefetched for inspection.
    pub prefetch_condition: Option<String>,
    /// Name of the response object served on block.
    pub response: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    pub active_rules_count: Option<u32>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}
//endregion

//region list
#[derive(Builder)]
pub struct ListFirewalls<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    service_id: Option<&'a str>,
    page: Option<u32>,
    per_page: Option<u32>,
}

impl Client {
    pub fn list_firewalls(&self) -> ListFirewallsBuilder<'_> {
        ListFirewalls::builder(self)
    }
}

impl<'a> ListFirewalls<'a> {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(service_id) = self.service_id {
            params.push(("filter[service_id]", service_id.to_owned()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        params
    }

    pub async fn send(&self) -> Result<PagedList<Firewall>, Error> {
        let mut params = self.query();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        let resp = self
            .client
            .get("/waf/firewalls", RequestOptions::with_params(params))
            .await?;
        Ok(parse_json_response(resp).await?)
    }

    /// Walk every page from the first one; a `page` set on the builder is ignored.
    pub fn paginator(self) -> ListPaginator<'a, PagedList<Firewall>> {
        let params = self.query();
        ListPaginator::new(self.client, "/waf/firewalls".to_owned(), params)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreateFirewall<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    service_id: &'a str,
    service_version_number: i32,
    prefetch_condition: Option<&'a str>,
    response: Option<&'a str>,
}

impl Client {
    pub fn create_firewall(&self) -> CreateFirewallBuilder<'_> {
        CreateFirewall::builder(self)
    }
}

impl CreateFirewall<'_> {
    pub async fn send(&self) -> Result<Firewall, Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        if self.service_version_number == 0 {
            return Err(Error::MissingServiceVersion);
        }
        let resp = self
            .client
            .post_json("/waf/firewalls", self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region get
#[derive(Builder)]
pub struct GetFirewall<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    firewall_id: &'a str,
}

impl Client {
    pub fn get_firewall(&self) -> GetFirewallBuilder<'_> {
        GetFirewall::builder(self)
    }
}

impl GetFirewall<'_> {
    pub async fn send(&self) -> Result<Firewall, Error> {
        if self.firewall_id.is_empty() {
            return Err(Error::MissingId);
        }
        let path = join_path(&["waf", "firewalls", self.firewall_id]);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region update
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct UpdateFirewall<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(skip_serializing)]
    firewall_id: &'a str,
    prefetch_condition: Option<&'a str>,
    response: Option<&'a str>,
    disabled: Option<bool>,
}

impl Client {
    pub fn update_firewall(&self) -> UpdateFirewallBuilder<'_> {
        UpdateFirewall::builder(self)
    }
}

impl UpdateFirewall<'_> {
    pub async fn send(&self) -> Result<Firewall, Error> {
        if self.firewall_id.is_empty() {
            return Err(Error::MissingId);
        }
        let path = join_path(&["waf", "firewalls", self.firewall_id]);
        let resp = self
            .client
            .patch_json(&path, self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region delete
#[derive(Builder)]
pub struct DeleteFirewall<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    firewall_id: &'a str,
}

impl Client {
    pub fn delete_firewall(&self) -> DeleteFirewallBuilder<'_> {
        DeleteFirewall::builder(self)
    }
}

impl DeleteFirewall<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        if self.firewall_id.is_empty() {
            return Err(Error::MissingId);
        }
        let path = join_path(&["waf", "firewalls", self.firewall_id]);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
