//! Pattern hashing and seed derivation.
//!
//! Batches are reproducible from one base seed: pattern `i` is generated
//! from `derive_pattern_seed(base, i)`, and its output can be compared
//! across runs through [`pattern_hash`].

use crate::error::SpecError;
use crate::pattern::Pattern;

/// Derives the seed of one pattern in a batch.
///
/// ```text
/// pattern_seed = truncate_u32(BLAKE3(base_seed_le || index_le))
/// ```
pub fn derive_pattern_seed(base_seed: u32, index: u32) -> u32 {
    let mut input = [0u8; 8];
    input[..4].copy_from_slice(&base_seed.to_le_bytes());
    input[4..].copy_from_slice(&index.to_le_bytes());

    let hash = blake3::hash(&input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// BLAKE3 hash of a pattern's compact JSON record, as lowercase hex.
///
/// # Example
/// ```
/// use tactigen_spec::{GridPosition, MotorEvent, Pattern, PatternIteration};
/// use tactigen_spec::hash::pattern_hash;
///
/// let pattern = Pattern::new(vec![PatternIteration::new(
///     vec![MotorEvent::new(GridPosition::new(1, 1), 100, 300)],
///     10.0,
/// )]);
/// assert_eq!(pattern_hash(&pattern).unwrap().len(), 64);
/// ```
pub fn pattern_hash(pattern: &Pattern) -> Result<String, SpecError> {
    Ok(blake3_hash(pattern.to_json()?.as_bytes()))
}

/// Computes a BLAKE3 hash of arbitrary data as lowercase hex.
pub fn blake3_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridPosition;
    use crate::pattern::{MotorEvent, PatternIteration};

    #[test]
    fn test_pattern_seed_is_deterministic() {
        assert_eq!(derive_pattern_seed(42, 0), derive_pattern_seed(42, 0));
        assert_ne!(derive_pattern_seed(42, 0), derive_pattern_seed(42, 1));
        assert_ne!(derive_pattern_seed(42, 0), derive_pattern_seed(43, 0));
    }

    #[test]
    fn test_pattern_seed_matches_blake3_truncation() {
        let mut input = Vec::new();
        input.extend_from_slice(&7u32.to_le_bytes());
        input.extend_from_slice(&3u32.to_le_bytes());
        let hash = blake3::hash(&input);
        let expected = u32::from_le_bytes(hash.as_bytes()[0..4].try_into().unwrap());
        assert_eq!(derive_pattern_seed(7, 3), expected);
    }

    #[test]
    fn test_pattern_hash_tracks_content() {
        let a = Pattern::new(vec![PatternIteration::new(
            vec![MotorEvent::new(GridPosition::new(1, 1), 100, 300)],
            10.0,
        )]);
        let mut b = a.clone();
        assert_eq!(pattern_hash(&a).unwrap(), pattern_hash(&b).unwrap());

        b.pattern[0].events[0].amplitude = 101;
        assert_ne!(pattern_hash(&a).unwrap(), pattern_hash(&b).unwrap());
    }

    #[test]
    fn test_blake3_hash_hex() {
        let hash = blake3_hash(b"tactigen");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
