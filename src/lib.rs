//! Attachment encryption for the "v2" encrypted file format: AES-256-CTR
//! with a JWK-like key object, a half-random IV, and a SHA-256 ciphertext
//! digest for integrity.
//!
//! The descriptor ([`EncryptedFile`]) carries everything a recipient needs
//! to verify and decrypt an attachment; moving the descriptor and the
//! ciphertext bytes between peers is the caller's concern.
//!
//! ```
//! use attachment_crypto::EncryptedFile;
//!
//! let mut file = EncryptedFile::new();
//! let ciphertext = file.encrypt(b"attachment bytes")?;
//! // ... transport `file` (as JSON) and `ciphertext` ...
//! let plaintext = file.decrypt(&ciphertext)?;
//! assert_eq!(plaintext, b"attachment bytes");
//! # Ok::<(), attachment_crypto::AttachmentError>(())
//! ```

pub mod base64;
pub mod error;
pub mod file;
pub mod keys;
pub mod types;

pub use base64::{base64_decode, base64_encode, base64url_decode, base64url_encode};
pub use error::AttachmentError;
pub use file::{EncryptedFile, EncryptedFileHashes, JsonWebKey};
pub use keys::AttachmentKeys;
pub use types::{
    ALGORITHM_A256CTR, HASH_LENGTH, IV_LENGTH, KEY_LENGTH, KEY_TYPE_OCT, RANDOM_IV_LENGTH,
    VERSION_V2,
};
