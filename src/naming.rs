//! Deterministic resource-name suffixes.
//!
//! Azure resource names often need a stable, unique-enough suffix (DNS
//! prefixes, storage accounts). Hashing the lab's own identifier gives a
//! suffix that is reproducible across runs without storing state.

use sha2::{Digest, Sha256};

const MODULUS: u64 = 100_000_000;

/// Reduce a string to a deterministic number in `[0, 10^8)`.
///
/// The SHA-256 digest is interpreted as a big-endian integer and taken
/// modulo 10^8 (folded byte by byte, which is equivalent).
///
/// # Example
///
/// ```
/// use azlab::naming::unique_string;
///
/// let suffix = unique_string("aks-falco");
/// assert_eq!(suffix, unique_string("aks-falco"));
/// assert!(suffix < 100_000_000);
/// ```
pub fn unique_string(input: &str) -> u32 {
    let digest = Sha256::digest(input.as_bytes());

    let mut acc: u64 = 0;
    for byte in digest {
        acc = (acc * 256 + u64::from(byte)) % MODULUS;
    }
    acc as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference values: int(sha256(input).hexdigest(), 16) % 10**8
    #[test]
    fn matches_reference_digest_reduction() {
        assert_eq!(unique_string("foo"), 1_138_862);
        assert_eq!(unique_string("bar"), 82_271_929);
        assert_eq!(unique_string("aks-falco"), 15_822_695);
        assert_eq!(unique_string("my-resource-group"), 52_774_850);
    }

    #[test]
    fn empty_input_is_defined() {
        assert_eq!(unique_string(""), 65_086_549);
    }

    #[test]
    fn deterministic_across_calls() {
        assert_eq!(unique_string("falco-lab"), unique_string("falco-lab"));
    }

    #[test]
    fn always_below_modulus() {
        for input in ["a", "b", "c", "some-longer-resource-name", "ünïcödé"] {
            assert!(u64::from(unique_string(input)) < MODULUS);
        }
    }

    #[test]
    fn distinct_inputs_give_distinct_suffixes() {
        assert_ne!(unique_string("foo"), unique_string("bar"));
    }
}
