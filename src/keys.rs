//! Attachment key material: a raw AES-256 key plus the CTR initialization
//! vector. Produced either by random generation for a fresh attachment or
//! by an explicit decode step from a descriptor's encoded fields.

use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};
use ctr::Ctr128BE;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::base64::{base64_decode, base64url_decode};
use crate::error::AttachmentError;
use crate::types::{
    IV_BASE64_LENGTH, IV_LENGTH, KEY_BASE64_LENGTH, KEY_LENGTH, RANDOM_IV_LENGTH,
};

type Aes256Ctr = Ctr128BE<Aes256>;

/// Decoded key and IV for one attachment. Immutable once constructed, so a
/// single instance can be shared across threads for repeated operations.
/// Key bytes are zeroed on drop.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct AttachmentKeys {
    key: [u8; KEY_LENGTH],
    iv: [u8; IV_LENGTH],
}

impl AttachmentKeys {
    /// Generate fresh random key material.
    ///
    /// The wire format fixes the last 8 IV bytes at zero; only the first
    /// half is drawn from the system RNG. A failing RNG is unrecoverable,
    /// so this panics rather than returning an error.
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_LENGTH];
        getrandom::getrandom(&mut key).expect("getrandom failed");
        let mut iv = [0u8; IV_LENGTH];
        getrandom::getrandom(&mut iv[..RANDOM_IV_LENGTH]).expect("getrandom failed");
        Self { key, iv }
    }

    /// Decode key material from a descriptor's encoded fields: base64url
    /// for the key, standard base64 for the IV. Encoded lengths are
    /// checked before decoding, so a wrong-length field fails the same way
    /// as undecodable input.
    pub fn decode(key_b64: &str, iv_b64: &str) -> Result<Self, AttachmentError> {
        if key_b64.len() != KEY_BASE64_LENGTH {
            return Err(AttachmentError::InvalidKey);
        }
        if iv_b64.len() != IV_BASE64_LENGTH {
            return Err(AttachmentError::InvalidInitVector);
        }
        let key: [u8; KEY_LENGTH] = base64url_decode(key_b64)
            .map_err(|_| AttachmentError::InvalidKey)?
            .try_into()
            .map_err(|_| AttachmentError::InvalidKey)?;
        let iv: [u8; IV_LENGTH] = base64_decode(iv_b64)
            .map_err(|_| AttachmentError::InvalidInitVector)?
            .try_into()
            .map_err(|_| AttachmentError::InvalidInitVector)?;
        Ok(Self { key, iv })
    }

    /// Raw key bytes.
    pub fn key(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }

    /// Raw IV bytes (full 16-byte buffer, trailing zeros included).
    pub fn iv(&self) -> &[u8; IV_LENGTH] {
        &self.iv
    }

    /// Run a buffer through the AES-256-CTR keystream. CTR is its own
    /// inverse, so this is both encryption and decryption; output length
    /// equals input length.
    pub fn xor_keystream(&self, data: &[u8]) -> Vec<u8> {
        let mut buf = data.to_vec();
        let mut cipher = Aes256Ctr::new(&self.key.into(), &self.iv.into());
        cipher.apply_keystream(&mut buf);
        buf
    }
}
