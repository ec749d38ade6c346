/// AES-256 key length in bytes.
pub const KEY_LENGTH: usize = 32;

/// Initialization vector length in bytes (one AES block).
pub const IV_LENGTH: usize = 16;

/// Number of IV bytes that are actually randomized; the rest stay zero.
/// The wire format fixes this split, so the counter half of the block is
/// fully available to CTR mode.
pub const RANDOM_IV_LENGTH: usize = 8;

/// SHA-256 digest length in bytes.
pub const HASH_LENGTH: usize = 32;

/// Unpadded base64url length of an encoded key (32 bytes -> 43 chars).
pub const KEY_BASE64_LENGTH: usize = 43;

/// Unpadded standard base64 length of an encoded IV (16 bytes -> 22 chars).
pub const IV_BASE64_LENGTH: usize = 22;

/// Unpadded standard base64 length of an encoded digest (32 bytes -> 43 chars).
pub const HASH_BASE64_LENGTH: usize = 43;

/// Encrypted file format version tag.
pub const VERSION_V2: &str = "v2";

/// JWK algorithm identifier for AES-256 in CTR mode.
pub const ALGORITHM_A256CTR: &str = "A256CTR";

/// JWK key type for raw octet-sequence keys.
pub const KEY_TYPE_OCT: &str = "oct";
