//! Domain traffic metrics.
//!
//! Read-only, cursor-paginated counters aggregated per FQDN for one service.
//!
//! [API reference](https://developer.nimbuscdn.com/reference/api/metrics-stats/domains/)

use crate::client::{Client, RequestOptions};
use crate::error::Error;
use crate::paginator::{CursorList, ListPaginator};
use bon::Builder;
use nimbus_sdk_common::helper::parse_json_response;
use nimbus_sdk_common::path::join_path;

use serde::Deserialize;

//region response
#[derive(Deserialize, Debug)]
pub struct DomainMetrics {
    pub fqdn: String,
    /// Start of the bucket, RFC 3339.
    pub timestamp: Option<String>,
    pub requests: u64,
    pub edge_hits: u64,
    pub edge_misses: u64,
    pub status_2xx: u64,
    pub status_3xx: u64,
    pub status_4xx: u64,
    pub status_5xx: u64,
}
//endregion

//region get
#[derive(Builder)]
pub struct GetDomainMetrics<'a> {
    #[builder(start_fn)]
    client: &'a Client,

    service_id: &'a str,
    /// Inclusive range start, RFC 3339.
    start: &'a str,
    /// Exclusive range end; defaults to now.
    end: Option<&'a str>,
    /// Bucket width: `"hour"`, `"day"` or `"month"`.
    downsample: Option<&'a str>,
    /// Counters to return; all when empty.
    metrics: Option<Vec<&'a str>>,
    limit: Option<u32>,
    cursor: Option<&'a str>,
}

impl Client {
    pub fn get_domain_metrics(&self) -> GetDomainMetricsBuilder<'_> {
        GetDomainMetrics::builder(self)
    }
}

impl<'a> GetDomainMetrics<'a> {
    fn check(&self) -> Result<(), Error> {
        if self.service_id.is_empty() {
            return Err(Error::MissingServiceId);
        }
        if self.start.is_empty() {
            return Err(Error::Common("start must not be empty".to_owned()));
        }
        Ok(())
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("start", self.start.to_owned())];
        if let Some(end) = self.end {
            params.push(("end", end.to_owned()));
        }
        if let Some(downsample) = self.downsample {
            params.push(("downsample", downsample.to_owned()));
        }
        if let Some(metrics) = &self.metrics {
            for metric in metrics {
                params.push(("metric", (*metric).to_owned()));
            }
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }

    fn path(&self) -> String {
        join_path(&["metrics", "domains", "services", self.service_id])
    }

    pub async fn send(&self) -> Result<CursorList<DomainMetrics>, Error> {
        self.check()?;
        let mut params = self.query();
        if let Some(cursor) = self.cursor {
            params.push(("cursor", cursor.to_owned()));
        }
        let resp = self
            .client
            .get(&self.path(), RequestOptions::with_params(params))
            .await?;
        Ok(parse_json_response(resp).await?)
    }

    /// Walk every bucket page; a `cursor` set on the builder is ignored.
    pub fn paginator(self) -> Result<ListPaginator<'a, CursorList<DomainMetrics>>, Error> {
        self.check()?;
        Ok(ListPaginator::new(self.client, self.path(), self.query()))
    }
}
//endregion
