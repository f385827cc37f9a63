use reqwest::StatusCode;

/// Errors returned by every operation in this crate.
///
/// The `Missing*` variants are pre-flight checks: they are returned before any
/// request is issued, so a call failing with one of them had no side effects.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing service id")]
    MissingServiceId,
    #[error("missing service version")]
    MissingServiceVersion,
    #[error("missing name")]
    MissingName,
    #[error("missing id")]
    MissingId,
    #[error("missing token id")]
    MissingTokenId,
    #[error("missing domain id")]
    MissingDomainId,
    #[error("missing fqdn")]
    MissingFqdn,
    #[error("params error: {0}")]
    Common(String),
    #[error("request failed: code: {status}\nbody: {body}")]
    Api { status: StatusCode, body: String },
    #[error("use reqwest error:\n {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl From<nimbus_sdk_common::Error> for Error {
    fn from(e: nimbus_sdk_common::Error) -> Self {
        match e {
            nimbus_sdk_common::Error::Common(s) => Error::Common(s),
            nimbus_sdk_common::Error::RequestAPIFailed { status, message } => Error::Api {
                status,
                body: message,
            },
            nimbus_sdk_common::Error::Reqwest(e) => Error::Reqwest(e),
        }
    }
}
