//! Client for `GET /agencies/nearby`
//!
//! The endpoint answers with either a JSON array of agency rows or an object
//! carrying an `error` field. Anything else (non-2xx status, non-JSON body,
//! an unexpected shape) is a transport failure.

use serde::Deserialize;

use crate::types::Agency;

/// Path of the one backend endpoint this page depends on.
pub const AGENCIES_ENDPOINT: &str = "/agencies/nearby";

/// Error type for agency lookups
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[cfg(feature = "web")]
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A successfully decoded reply from the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum NearbyReply {
    /// Matching agencies, in server order.
    Agencies(Vec<Agency>),
    /// The backend declined the search and said why.
    Rejected(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WirePayload {
    Rejection { error: String },
    Agencies(Vec<Agency>),
}

/// Decode a response body into a [`NearbyReply`].
///
/// Kept separate from the fetch so the wire contract is testable natively.
pub fn decode_reply(body: &str) -> Result<NearbyReply, serde_json::Error> {
    let payload: WirePayload = serde_json::from_str(body)?;
    Ok(match payload {
        WirePayload::Rejection { error } => NearbyReply::Rejected(error),
        WirePayload::Agencies(agencies) => NearbyReply::Agencies(agencies),
    })
}

/// Fetch agencies near the given search criteria.
///
/// The query string may be empty; the request is issued regardless and the
/// backend reports the missing-criteria case through its `error` field.
#[cfg(feature = "web")]
pub async fn fetch_nearby(
    criteria: &crate::types::SearchCriteria,
) -> Result<NearbyReply, ClientError> {
    let url = format!("{}?{}", AGENCIES_ENDPOINT, criteria.query());

    let response = gloo_net::http::Request::get(&url).send().await?;
    if !response.ok() {
        return Err(ClientError::Status(response.status()));
    }

    let body = response.text().await?;
    Ok(decode_reply(&body)?)
}
