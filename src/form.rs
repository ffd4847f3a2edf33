//! Lenient extraction of the `body` form field for saves.
//!
//! A posted `application/x-www-form-urlencoded` or `multipart/form-data`
//! body is searched first, then the query string. The first `body` value
//! wins. Any other content type, an empty request, or a missing field all
//! yield an empty body. Values are decoded to raw bytes, never to text.

use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header,
};

use crate::errors::WikiError;

pub const BODY_FIELD: &str = "body";

/// The posted page body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveBody(pub Vec<u8>);

#[axum::async_trait]
impl<S> FromRequest<S> for SaveBody
where
    S: Send + Sync,
{
    type Rejection = WikiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().map(|q| q.as_bytes().to_vec());
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();

        let posted = if content_type.starts_with("application/x-www-form-urlencoded") {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|e| WikiError::BadRequest(e.to_string()))?;
            form_value(&bytes, BODY_FIELD)
        } else if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| WikiError::BadRequest(e.to_string()))?;
            multipart_value(&mut multipart, BODY_FIELD).await?
        } else {
            if !content_type.is_empty() {
                log::debug!("Ignoring save body with content type '{}'", content_type);
            }
            None
        };

        let value = posted
            .or_else(|| query.and_then(|q| form_value(&q, BODY_FIELD)))
            .unwrap_or_default();
        Ok(SaveBody(value))
    }
}

/// First value of `name` in an urlencoded string, decoded to bytes
pub fn form_value(encoded: &[u8], name: &str) -> Option<Vec<u8>> {
    encoded
        .split(|&b| b == b'&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = match pair.iter().position(|&b| b == b'=') {
                Some(eq) => (&pair[..eq], &pair[eq + 1..]),
                None => (pair, &pair[pair.len()..]),
            };
            if decode_component(key) == name.as_bytes() {
                Some(decode_component(value))
            } else {
                None
            }
        })
}

/// Percent-decode one component, treating `+` as a space
fn decode_component(raw: &[u8]) -> Vec<u8> {
    let spaced: Vec<u8> = raw.iter().map(|&b| if b == b'+' { b' ' } else { b }).collect();
    urlencoding::decode_binary(&spaced).into_owned()
}

async fn multipart_value(multipart: &mut Multipart, name: &str) -> Result<Option<Vec<u8>>, WikiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WikiError::BadRequest(e.to_string()))?
    {
        if field.name() == Some(name) {
            let bytes = field.bytes().await.map_err(|e| WikiError::BadRequest(e.to_string()))?;
            return Ok(Some(bytes.to_vec()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plus_and_percent() {
        assert_eq!(form_value(b"body=see+%5BHome%5D", "body").unwrap(), b"see [Home]");
    }

    #[test]
    fn first_value_wins() {
        assert_eq!(form_value(b"body=one&body=two", "body").unwrap(), b"one");
    }

    #[test]
    fn keeps_invalid_utf8() {
        assert_eq!(form_value(b"body=%FFok", "body").unwrap(), vec![0xff, b'o', b'k']);
    }

    #[test]
    fn missing_or_bare_field() {
        assert_eq!(form_value(b"other=1", "body"), None);
        assert_eq!(form_value(b"", "body"), None);
        assert_eq!(form_value(b"body", "body").unwrap(), b"");
        assert_eq!(form_value(b"&&body=&x=1", "body").unwrap(), b"");
    }

    #[test]
    fn encoded_key_matches() {
        assert_eq!(form_value(b"%62ody=hi", "body").unwrap(), b"hi");
    }
}
