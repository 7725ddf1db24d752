/*!
optsig - optional values with a JSON null mapping, plus a small ECDSA wrapper

# Main Components

- `option`: `Optional<T>`, a present/absent container that encodes absence as JSON `null`
- `cryptography`: P-256 ECDSA signing and verification with SHA-256 hashing
- `cli`: Command-line interface exercising both

# Example Usage

```rust
use optsig::option::{map_value, Optional};

let doubled = map_value(Optional::some(3), |x| x * 2);
assert_eq!(doubled.to_json().unwrap(), "6");
assert!(Optional::<i64>::from_json(" null ").unwrap().is_absent());
```
*/

/// Generic optional container and its JSON encoding.
pub mod option;

/// Elliptic-curve signatures over OpenSSL.
pub mod cryptography;

/// Command-line interface.
pub mod cli;

pub mod error;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use error::{OptsigError, Result};
pub use option::{flat_map_value, map_value, Optional};
