//! ECDSA over P-256 with SHA-256 message hashing.
//!
//! Signatures are ASN.1 DER encoded `(r, s)` pairs. All curve arithmetic is
//! delegated to OpenSSL; this module only hashes and converts encodings.

use log::debug;
use openssl::bn::BigNumContext;
use openssl::ec::{EcGroup, EcKey, EcKeyRef, EcPoint, PointConversionForm};
use openssl::ecdsa::EcdsaSig;
use openssl::nid::Nid;
use openssl::pkey::{HasPublic, Private, Public};
use sha2::{Digest, Sha256};

use crate::cryptography::traits::SignatureScheme;
use crate::error::Result;

/// Curve used for every generated key.
pub const DEFAULT_CURVE: Nid = Nid::X9_62_PRIME256V1;

fn default_group() -> Result<EcGroup> {
    Ok(EcGroup::from_curve_name(DEFAULT_CURVE)?)
}

/// Generates a fresh private key on [`DEFAULT_CURVE`] using OpenSSL's CSPRNG.
pub fn generate_key() -> Result<EcKey<Private>> {
    let group = default_group()?;
    Ok(EcKey::generate(&group)?)
}

/// Hashes `message` with SHA-256 and signs the digest. Returns DER bytes.
pub fn sign(private_key: &EcKeyRef<Private>, message: &[u8]) -> Result<Vec<u8>> {
    let digest = Sha256::digest(message);
    let signature = EcdsaSig::sign(&digest, private_key)?;
    Ok(signature.to_der()?)
}

/// Checks a DER signature over the SHA-256 digest of `message`.
///
/// Malformed signatures are reported as `false`, never as an error.
pub fn verify<T: HasPublic>(public_key: &EcKeyRef<T>, message: &[u8], signature: &[u8]) -> bool {
    let signature = match EcdsaSig::from_der(signature) {
        Ok(signature) => signature,
        Err(e) => {
            debug!("rejecting malformed signature: {}", e);
            return false;
        }
    };
    let digest = Sha256::digest(message);
    match signature.verify(&digest, public_key) {
        Ok(valid) => valid,
        Err(e) => {
            debug!("signature verification failed: {}", e);
            false
        }
    }
}

/// Extracts the public half of a private key.
pub fn public_key(private_key: &EcKeyRef<Private>) -> Result<EcKey<Public>> {
    Ok(EcKey::from_public_key(private_key.group(), private_key.public_key())?)
}

/// Uncompressed SEC1 encoding of the public point (65 bytes for P-256).
pub fn public_key_bytes<T: HasPublic>(key: &EcKeyRef<T>) -> Result<Vec<u8>> {
    let mut ctx = BigNumContext::new()?;
    Ok(key
        .public_key()
        .to_bytes(key.group(), PointConversionForm::UNCOMPRESSED, &mut ctx)?)
}

fn public_key_from_bytes(bytes: &[u8]) -> Result<EcKey<Public>> {
    let group = default_group()?;
    let mut ctx = BigNumContext::new()?;
    let point = EcPoint::from_bytes(&group, bytes, &mut ctx)?;
    Ok(EcKey::from_public_key(&group, &point)?)
}

/// [`SignatureScheme`] backed by this module. Public keys are SEC1 points and
/// secret keys are DER-encoded EC private keys.
pub struct EcdsaP256;

impl SignatureScheme for EcdsaP256 {
    fn generate_keypair() -> Result<(Vec<u8>, Vec<u8>)> {
        let key = generate_key()?;
        let public = public_key_bytes(&key)?;
        let secret = key.private_key_to_der()?;
        Ok((public, secret))
    }

    fn sign(secret_key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        let key = EcKey::private_key_from_der(secret_key)?;
        sign(&key, message)
    }

    fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
        let key = public_key_from_bytes(public_key)?;
        Ok(verify(&key, message, signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sign_and_verify() {
        let key = generate_key().unwrap();
        let public = public_key(&key).unwrap();
        let msg = b"message";

        let sig = sign(&key, msg).unwrap();
        assert!(verify(&public, msg, &sig));
        assert!(!verify(&public, b"wrong", &sig));
    }

    #[test]
    fn test_private_key_verifies_too() {
        let key = generate_key().unwrap();
        let sig = sign(&key, b"payload").unwrap();
        assert!(verify(&key, b"payload", &sig));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let signer = generate_key().unwrap();
        let other = public_key(&generate_key().unwrap()).unwrap();
        let sig = sign(&signer, b"payload").unwrap();
        assert!(!verify(&other, b"payload", &sig));
    }

    #[test]
    fn test_garbage_signature_rejected() {
        let key = generate_key().unwrap();
        assert!(!verify(&key, b"payload", &[]));
        assert!(!verify(&key, b"payload", &[0x30, 0x02, 0x01]));
    }

    #[test]
    fn test_default_curve() {
        let key = generate_key().unwrap();
        assert!(key.group().curve_name() == Some(DEFAULT_CURVE));
        assert_eq!(public_key_bytes(&key).unwrap().len(), 65);
    }

    #[test]
    fn test_signature_scheme_bytes() {
        let (public, secret) = EcdsaP256::generate_keypair().unwrap();
        let sig = <EcdsaP256 as SignatureScheme>::sign(&secret, b"hello").unwrap();
        assert!(<EcdsaP256 as SignatureScheme>::verify(&public, b"hello", &sig).unwrap());
        assert!(!<EcdsaP256 as SignatureScheme>::verify(&public, b"bye", &sig).unwrap());
    }

    #[test]
    fn test_signature_scheme_bad_public_key() {
        assert!(<EcdsaP256 as SignatureScheme>::verify(&[1, 2, 3], b"hello", &[]).is_err());
    }
}
