use crate::error::Result;

/// Byte-oriented signing seam. Keys and signatures travel as encoded bytes so
/// callers do not depend on the backing primitive's key types.
pub trait SignatureScheme {
    /// Returns `(public_key, secret_key)`.
    fn generate_keypair() -> Result<(Vec<u8>, Vec<u8>)>;
    fn sign(secret_key: &[u8], message: &[u8]) -> Result<Vec<u8>>;
    fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool>;
}
