use crate::core::{AppError, Result};
use actix_web::{dev::Payload, web::Bytes, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Request body captured as raw bytes before any JSON decoding.
///
/// Signature checks need the exact bytes on the wire while handlers want the
/// decoded value, so both are kept side by side. Bodies sent without a JSON
/// content type are not captured at all: `raw` and `json` are both `None`.
#[derive(Debug, Clone, Default)]
pub struct CapturedBody {
    raw: Option<Bytes>,
    json: Option<Value>,
}

impl CapturedBody {
    /// Build from the bytes read off the wire.
    ///
    /// A zero-length JSON body decodes to `{}`. Otherwise only objects and
    /// arrays are accepted at the top level, so whitespace alone is rejected.
    pub fn capture(is_json: bool, bytes: Bytes) -> Result<Self> {
        if !is_json {
            return Ok(Self::default());
        }

        let json = if bytes.is_empty() {
            Value::Object(Map::new())
        } else {
            parse_strict(&bytes)?
        };

        Ok(Self {
            raw: Some(bytes),
            json: Some(json),
        })
    }

    /// A decoded body whose original bytes are gone.
    #[cfg(test)]
    pub fn without_raw(json: Value) -> Self {
        Self {
            raw: None,
            json: Some(json),
        }
    }

    pub fn raw(&self) -> Option<&[u8]> {
        self.raw.as_deref()
    }

    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    pub fn into_json(self) -> Option<Value> {
        self.json
    }

    /// Bytes a webhook signature is computed over.
    ///
    /// Falls back to re-serializing the decoded body (or `{}`) when the raw
    /// bytes were not captured. The re-serialized form can differ from what
    /// the sender signed in whitespace and key order, in which case a genuine
    /// signature will not verify.
    pub fn signing_bytes(&self) -> Result<Cow<'_, [u8]>> {
        match &self.raw {
            Some(raw) => Ok(Cow::Borrowed(raw.as_ref())),
            None => {
                let fallback = self
                    .json
                    .clone()
                    .unwrap_or_else(|| Value::Object(Map::new()));
                Ok(Cow::Owned(serde_json::to_vec(&fallback)?))
            }
        }
    }
}

fn parse_strict(bytes: &[u8]) -> Result<Value> {
    let value: Value = serde_json::from_slice(bytes)?;

    if !(value.is_object() || value.is_array()) {
        return Err(AppError::Json(serde::de::Error::custom(
            "top-level JSON value must be an object or an array",
        )));
    }

    Ok(value)
}

impl FromRequest for CapturedBody {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let is_json = req.content_type().eq_ignore_ascii_case("application/json");
        let bytes = Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = bytes.await?;
            CapturedBody::capture(is_json, bytes).map_err(Into::into)
        })
    }
}
