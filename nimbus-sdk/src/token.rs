//! Automation token management.
//!
//! The secret `access_token` is returned exactly once, in the create response.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/auth-tokens/)

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
pub struct Token {
    pub id: String,
    pub name: String,
    pub user_id: Option<String>,
    pub customer_id: Option<String>,
    /// Space-separated scopes, e.g. `"global:read purge_select"`.
    pub scope: Option<String>,
    /// Restricts the token to these services; unrestricted when absent.
    pub services: Option<Vec<String>>,
    /// Only present in the create response.
    pub access_token: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_used_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
}
//endregion

//region list
#[derive(Builder)]
pub struct ListTokens<'a> {
    #[builder(start_fn)]
    client: &'a Client,
}

impl Client {
    pub fn list_tokens(&self) -> ListTokensBuilder<'_> {
        ListTokens::builder(self)
    }
}

impl ListTokens<'_> {
    pub async fn send(&self) -> Result<Vec<Token>, Error> {
        let resp = self.client.get("/tokens", RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region get self
/// Describes the token used to authenticate this request.
#[derive(Builder)]
pub struct GetTokenSelf<'a> {
    #[builder(start_fn)]
    client: &'a Client,
}

impl Client {
    pub fn get_token_self(&self) -> GetTokenSelfBuilder<'_> {
        GetTokenSelf::builder(self)
    }
}

impl GetTokenSelf<'_> {
    pub async fn send(&self) -> Result<Token, Error> {
        let resp = self
            .client
            .get("/tokens/self", RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region get
#[derive(Builder)]
pub struct GetToken<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    token_id: &'a str,
}

impl Client {
    pub fn get_token(&self) -> GetTokenBuilder<'_> {
        GetToken::builder(self)
    }
}

impl GetToken<'_> {
    pub async fn send(&self) -> Result<Token, Error> {
        if self.token_id.is_empty() {
            return Err(Error::MissingTokenId);
        }
        let path = join_path(&["tokens", self.token_id]);
        let resp = self.client.get(&path, RequestOptions::default()).await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region create
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
pub struct CreateToken<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    name: &'a str,
    scope: Option<&'a str>,
    services: Option<Vec<String>>,
    #[serde(with = "time::serde::rfc3339::option")]
    expires_at: Option<OffsetDateTime>,
}

impl Client {
    pub fn create_token(&self) -> CreateTokenBuilder<'_> {
        CreateToken::builder(self)
    }
}

impl CreateToken<'_> {
    pub async fn send(&self) -> Result<Token, Error> {
        if self.name.is_empty() {
            return Err(Error::MissingName);
        }
        let resp = self
            .client
            .post_json("/tokens", self, RequestOptions::default())
            .await?;
        Ok(parse_json_response(resp).await?)
    }
}
//endregion

//region delete
#[derive(Builder)]
pub struct DeleteToken<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    token_id: &'a str,
}

impl Client {
    pub fn delete_token(&self) -> DeleteTokenBuilder<'_> {
        DeleteToken::builder(self)
    }
}

impl DeleteToken<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        if self.token_id.is_empty() {
            return Err(Error::MissingTokenId);
        }
        let path = join_path(&["tokens", self.token_id]);
        let resp = self.client.delete(&path, RequestOptions::default()).await?;
        Ok(expect_status(resp, StatusCode::NO_CONTENT).await?)
    }
}
//endregion
