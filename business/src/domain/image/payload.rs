use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::errors::ImageError;

/// All fetched images are served under one fixed MIME type. The payload
/// format is self-describing, so a per-object content type only touches
/// this module.
pub const INLINE_IMAGE_MIME: &str = "image/png";

/// Encodes raw image bytes as a self-contained inline payload that a
/// browser can render without a further network round trip.
pub fn encode_inline_image(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", INLINE_IMAGE_MIME, STANDARD.encode(bytes))
}

/// Recovers the original bytes from an inline payload.
pub fn decode_inline_image(payload: &str) -> Result<Vec<u8>, ImageError> {
    let rest = payload
        .strip_prefix("data:")
        .ok_or(ImageError::MalformedPayload)?;
    let (_mime, data) = rest
        .split_once(";base64,")
        .ok_or(ImageError::MalformedPayload)?;
    STANDARD
        .decode(data)
        .map_err(|_| ImageError::MalformedPayload)
}
