//! Unpadded base64 helpers for the two alphabets the wire format mixes:
//! URL-safe for JWK key bytes, standard for IVs and digests.

use base64ct::{Base64Unpadded, Base64UrlUnpadded, Encoding};

/// Base64url encode bytes without padding.
pub fn base64url_encode(data: &[u8]) -> String {
    Base64UrlUnpadded::encode_string(data)
}

/// Base64url decode a string to bytes.
pub fn base64url_decode(s: &str) -> Result<Vec<u8>, base64ct::Error> {
    Base64UrlUnpadded::decode_vec(s)
}

/// Standard-alphabet base64 encode bytes without padding.
pub fn base64_encode(data: &[u8]) -> String {
    Base64Unpadded::encode_string(data)
}

/// Standard-alphabet base64 decode a string to bytes.
pub fn base64_decode(s: &str) -> Result<Vec<u8>, base64ct::Error> {
    Base64Unpadded::decode_vec(s)
}
