//! Low-level transport shared by every resource module.
//!
//! One verb method per HTTP method; each performs a single request/response
//! round trip against the management API. Statuses are not inspected here —
//! response handling belongs to the decoding helpers, so a non-2xx reply is
//! returned to the caller as-is.

use crate::error::Error;
use bon::bon;
use log::debug;
use reqwest::{Method, header};
use serde::Serialize;

const DEFAULT_ENDPOINT: &str = "https://api.nimbuscdn.com";
const API_KEY_HEADER: &str = "Nimbus-Key";
const USER_AGENT: &str = concat!("nimbus-sdk/", env!("CARGO_PKG_VERSION"));

/// Optional per-request settings for the verb methods.
#[derive(Debug, Default, Clone)]
pub struct RequestOptions {
    /// Query string parameters. Keys may repeat.
    pub params: Vec<(&'static str, String)>,
}

impl RequestOptions {
    pub fn with_params(params: Vec<(&'static str, String)>) -> Self {
        Self { params }
    }
}

pub struct Client {
    api_key: String,
    endpoint: String,
    http_client: reqwest::Client,
}

#[bon]
impl Client {
    /// `endpoint` defaults to the public API host; override it to target a
    /// staging host or a local test server. Pass a pre-configured
    /// `http_client` to control timeouts, proxies and TLS.
    #[builder(on(String, into))]
    pub fn new(
        api_key: String,
        endpoint: Option<String>,
        http_client: Option<reqwest::Client>,
    ) -> Self {
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
        Self {
            api_key,
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            http_client: http_client.unwrap_or_default(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Client {
    fn request(&self, method: Method, path: &str, opts: &RequestOptions) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.endpoint, path);
        debug!("{method} {url}");
        let mut req = self
            .http_client
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, "application/json");
        if !opts.params.is_empty() {
            req = req.query(&opts.params);
        }
        req
    }

    async fn execute(req: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
        let resp = req.send().await?;
        debug!("response status: {}", resp.status());
        Ok(resp)
    }

    pub async fn get(&self, path: &str, opts: RequestOptions) -> Result<reqwest::Response, Error> {
        Self::execute(self.request(Method::GET, path, &opts)).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOptions,
    ) -> Result<reqwest::Response, Error> {
        Self::execute(self.request(Method::POST, path, &opts).json(body)).await
    }

    pub async fn post_form<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOptions,
    ) -> Result<reqwest::Response, Error> {
        Self::execute(self.request(Method::POST, path, &opts).form(body)).await
    }

    pub async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOptions,
    ) -> Result<reqwest::Response, Error> {
        Self::execute(self.request(Method::PUT, path, &opts).json(body)).await
    }

    pub async fn put_form<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOptions,
    ) -> Result<reqwest::Response, Error> {
        Self::execute(self.request(Method::PUT, path, &opts).form(body)).await
    }

    pub async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOptions,
    ) -> Result<reqwest::Response, Error> {
        Self::execute(self.request(Method::PATCH, path, &opts).json(body)).await
    }

    pub async fn delete(&self, path: &str, opts: RequestOptions) -> Result<reqwest::Response, Error> {
        Self::execute(self.request(Method::DELETE, path, &opts)).await
    }
}
