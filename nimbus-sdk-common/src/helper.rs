use crate::Error;
use reqwest::StatusCode;

pub async fn into_request_failed_error(resp: reqwest::Response) -> Error {
    let status = resp.status();
    let body = resp.text().await;
    match body {
        Ok(message) => Error::RequestAPIFailed { status, message },
        Err(e) => Error::Reqwest(e),
    }
}

pub async fn parse_json_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, Error> {
    let status = resp.status();

    if !status.is_success() {
        return Err(into_request_failed_error(resp).await);
    }

    let bytes = resp.bytes().await?;
    let data = serde_json::from_slice(&bytes).map_err(|e| {
        Error::Common(format!(
            "JSON parse error: {}, response text: {}",
            e,
            String::from_utf8_lossy(&bytes)
        ))
    })?;
    Ok(data)
}

/// For endpoints that answer with a bare status and no usable body.
pub async fn expect_status(resp: reqwest::Response, expected: StatusCode) -> Result<(), Error> {
    if resp.status() == expected {
        return Ok(());
    }
    Err(into_request_failed_error(resp).await)
}
