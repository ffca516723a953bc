//! Compressed share links for the online script tool
//!
//! A link is the canonical script JSON, gzip-compressed, base64-encoded with
//! the padded standard alphabet, percent-encoded, and appended to
//! [`SHARE_BASE_URL`]. The viewer decodes the payload byte for byte, so the
//! canonical encoding must not drift.

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{DocumentError, Result};

/// Prefix every share link starts with
pub const SHARE_BASE_URL: &str = "https://script.bloodontheclocktower.com/?script=";

/// Query parameter carrying the payload
const SCRIPT_PARAM: &str = "script";

/// Pack canonical JSON text into a share link
pub fn encode_share_url(json: &str) -> Result<String> {
    let compressed = gzip(json.as_bytes())
        .map_err(|e| DocumentError::share_url(format!("compression failed: {e}")))?;
    let payload = STANDARD.encode(compressed);
    Ok(format!("{}{}", SHARE_BASE_URL, urlencoding::encode(&payload)))
}

fn gzip(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// Recover the JSON text from a share link
pub fn decode_share_url(link: &str) -> Result<String> {
    let parsed = url::Url::parse(link).map_err(|e| DocumentError::share_url(e.to_string()))?;
    let payload = parsed
        .query_pairs()
        .find(|(key, _)| key == SCRIPT_PARAM)
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| DocumentError::share_url("link has no script parameter"))?;

    // Form decoding turns an unescaped '+' into a space; base64 never
    // contains spaces.
    let payload = payload.replace(' ', "+");

    let compressed = STANDARD
        .decode(payload.as_bytes())
        .map_err(|e| DocumentError::share_url(format!("bad base64 payload: {e}")))?;

    let mut json = String::new();
    GzDecoder::new(compressed.as_slice())
        .read_to_string(&mut json)
        .map_err(|e| DocumentError::share_url(format!("bad compressed payload: {e}")))?;
    Ok(json)
}
