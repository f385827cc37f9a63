//! Log-streaming destination APIs.
//!
//! Every destination shares one shape: version-scoped, form-encoded writes,
//! JSON reads, keyed by destination name. Compression and credential
//! combinations (`compression_codec` vs `gzip_level`, `access_key` vs
//! `iam_role`) are validated by the server, not here.

pub mod bigquery;
pub mod kafka;
pub mod s3;
pub mod syslog;
