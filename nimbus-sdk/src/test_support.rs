use crate::Client;

/// A client whose endpoint is never dialed; validation tests fail before any
/// request is built.
pub(crate) fn offline_client() -> Client {
    Client::builder()
        .api_key("key")
        .endpoint("http://127.0.0.1:0".to_owned())
        .build()
}
