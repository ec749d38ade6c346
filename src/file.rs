//! The "v2" encrypted file descriptor: a JWK-like key object, a base64
//! IV, a SHA-256 digest of the ciphertext, and a version tag. The
//! descriptor travels alongside the ciphertext and is everything a
//! recipient needs to verify and decrypt it.
//!
//! CTR mode provides no authentication, so integrity rests entirely on
//! the digest. [`EncryptedFile::decrypt`] verifies the digest before
//! touching the key material; the guard order is part of the format's
//! observable contract.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::base64::{base64_decode, base64_encode, base64url_encode};
use crate::error::AttachmentError;
use crate::keys::AttachmentKeys;
use crate::types::{ALGORITHM_A256CTR, HASH_BASE64_LENGTH, KEY_TYPE_OCT, VERSION_V2};

/// Symmetric key in JWK form with the fixed field set the format uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonWebKey {
    /// Raw key bytes, base64url unpadded.
    #[serde(rename = "k")]
    pub key: String,
    /// Always "A256CTR".
    #[serde(rename = "alg")]
    pub algorithm: String,
    /// Always true.
    #[serde(rename = "ext")]
    pub extractable: bool,
    /// Always "oct".
    #[serde(rename = "kty")]
    pub key_type: String,
    /// Always ["encrypt", "decrypt"].
    pub key_ops: Vec<String>,
}

/// Content digests of the ciphertext. Only SHA-256 is defined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedFileHashes {
    /// SHA-256 of the ciphertext, standard base64 unpadded.
    pub sha256: String,
}

/// Serializable descriptor for one encrypted attachment.
///
/// Field names are wire-format-fixed. The descriptor holds only encoded
/// fields; [`EncryptedFile::keys`] is the explicit decode step producing
/// the raw key material, which callers may hold across repeated
/// operations instead of re-decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedFile {
    pub key: JsonWebKey,
    #[serde(rename = "iv")]
    pub init_vector: String,
    pub hashes: EncryptedFileHashes,
    #[serde(rename = "v")]
    pub version: String,
}

impl EncryptedFile {
    /// Create a descriptor with freshly generated key material. The
    /// digest stays empty until the first [`encrypt`](Self::encrypt).
    pub fn new() -> Self {
        Self::from_keys(&AttachmentKeys::generate())
    }

    /// Build a descriptor around existing key material.
    pub fn from_keys(keys: &AttachmentKeys) -> Self {
        EncryptedFile {
            key: JsonWebKey {
                key: base64url_encode(keys.key()),
                algorithm: ALGORITHM_A256CTR.to_owned(),
                extractable: true,
                key_type: KEY_TYPE_OCT.to_owned(),
                key_ops: vec!["encrypt".to_owned(), "decrypt".to_owned()],
            },
            init_vector: base64_encode(keys.iv()),
            hashes: EncryptedFileHashes {
                sha256: String::new(),
            },
            version: VERSION_V2.to_owned(),
        }
    }

    /// Decode the key and IV fields into raw key material.
    pub fn keys(&self) -> Result<AttachmentKeys, AttachmentError> {
        AttachmentKeys::decode(&self.key.key, &self.init_vector)
    }

    /// Encrypt a plaintext buffer and record the ciphertext's SHA-256
    /// digest in the descriptor. Output length equals input length.
    ///
    /// Fails only if the descriptor's key or IV fields do not decode,
    /// which cannot happen on a freshly generated descriptor.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>, AttachmentError> {
        let keys = self.keys()?;
        let ciphertext = keys.xor_keystream(plaintext);
        self.hashes.sha256 = base64_encode(&Sha256::digest(&ciphertext));
        Ok(ciphertext)
    }

    /// Whether the stored digest matches the ciphertext. An absent,
    /// undecodable, or wrong-length digest counts as a mismatch.
    fn check_hash(&self, ciphertext: &[u8]) -> bool {
        if self.hashes.sha256.len() != HASH_BASE64_LENGTH {
            return false;
        }
        match base64_decode(&self.hashes.sha256) {
            Ok(expected) => expected.as_slice() == Sha256::digest(ciphertext).as_slice(),
            Err(_) => false,
        }
    }

    /// Validate the descriptor against the ciphertext and decrypt it.
    ///
    /// Checks run in a fixed order, first failure wins: version,
    /// algorithm, digest, key field, IV field. The digest is verified
    /// before the key material is even decoded.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, AttachmentError> {
        if self.version != VERSION_V2 {
            return Err(AttachmentError::UnsupportedVersion);
        }
        if self.key.algorithm != ALGORITHM_A256CTR {
            return Err(AttachmentError::UnsupportedAlgorithm);
        }
        if !self.check_hash(ciphertext) {
            return Err(AttachmentError::HashMismatch);
        }
        let keys = self.keys()?;
        Ok(keys.xor_keystream(ciphertext))
    }
}

impl Default for EncryptedFile {
    fn default() -> Self {
        Self::new()
    }
}
