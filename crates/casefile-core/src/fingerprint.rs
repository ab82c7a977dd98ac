//! Short content fingerprints
//!
//! Both record identifiers and pseudonym seeds derive from the BLAKE3 digest of
//! the input bytes, so they are stable across runs and processes.

/// Number of hex characters kept from the digest
pub const FINGERPRINT_LEN: usize = 8;

/// Lowercase 8-hex prefix of the BLAKE3 digest of `bytes`
pub fn fingerprint(bytes: &[u8]) -> String {
    let hex = blake3::hash(bytes).to_hex();
    hex.as_str()[..FINGERPRINT_LEN].to_string()
}

/// 32-bit seed taken from the fingerprint's numeric value
pub fn seed(bytes: &[u8]) -> u64 {
    let hash = blake3::hash(bytes);
    let prefix: [u8; 4] = [
        hash.as_bytes()[0],
        hash.as_bytes()[1],
        hash.as_bytes()[2],
        hash.as_bytes()[3],
    ];
    u64::from(u32::from_be_bytes(prefix))
}
