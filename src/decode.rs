//! Classifies raw responses into typed results or errors.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::Error;

/// Failure envelope the marketplace sends on non-200 responses. Only the
/// flag is consulted; no message field is part of the contract.
#[derive(Deserialize)]
struct ErrorEnvelope {
    success: bool,
}

/// Decodes `body` according to `status`.
///
/// A 200 body is parsed into `T`. Any other status is classified through
/// the `{"success": bool}` envelope: an acknowledged failure becomes
/// [`Error::Rejected`], while a failure status whose body claims success
/// is surfaced as [`Error::Protocol`] with the raw body attached. Bodies
/// that fit neither shape come back as [`Error::Decode`].
pub(crate) fn decode_body<T>(status: StatusCode, body: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    if status == StatusCode::OK {
        return Ok(serde_json::from_str(body)?);
    }
    let envelope: ErrorEnvelope = serde_json::from_str(body)?;
    if !envelope.success {
        return Err(Error::Rejected);
    }
    Err(Error::Protocol {
        status: status.as_u16(),
        body: body.to_string(),
    })
}
