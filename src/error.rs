use thiserror::Error;

/// Errors returned while validating or decrypting an encrypted file
/// descriptor. All are terminal: they indicate malformed or tampered
/// input, never a transient condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("unsupported encrypted file version")]
    UnsupportedVersion,

    #[error("unsupported JWK encryption algorithm")]
    UnsupportedAlgorithm,

    #[error("mismatching SHA-256 digest")]
    HashMismatch,

    #[error("failed to decode key")]
    InvalidKey,

    #[error("failed to decode initialization vector")]
    InvalidInitVector,
}
