pub mod ecdsa;
pub mod traits;

pub use ecdsa::{EcdsaP256, DEFAULT_CURVE};
pub use traits::SignatureScheme;
