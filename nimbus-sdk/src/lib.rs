#![doc = include_str!("../README.md")]

mod client;
mod error;
pub mod paginator;

pub use client::{Client, RequestOptions};
pub use error::Error;

#[cfg(test)]
mod test_support;

#[cfg(feature = "config")]
pub mod backend;
#[cfg(feature = "config")]
pub mod director;
#[cfg(feature = "config")]
pub mod domain;
#[cfg(feature = "config")]
pub mod health_check;
#[cfg(feature = "config")]
pub mod pool;
#[cfg(feature = "config")]
pub mod service;
#[cfg(feature = "config")]
pub mod version;
#[cfg(feature = "config")]
pub mod vcl;

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "observability")]
pub mod alerts;
#[cfg(feature = "observability")]
pub mod dashboard;
#[cfg(feature = "observability")]
pub mod metrics;

#[cfg(feature = "tokens")]
pub mod token;

#[cfg(feature = "waf")]
pub mod waf;
