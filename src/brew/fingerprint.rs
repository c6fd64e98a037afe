//! Order-independent recipe fingerprint
//!
//! Polynomial rolling hash (`h = h * 31 + code_unit`) over the sorted,
//! comma-joined ids. The accumulator is folded back to `i32` after every step so
//! the result matches the browser build bit for bit.

/// Content-addressing key for a multiset of ingredient ids
pub type Fingerprint = u32;

/// Compute the fingerprint of a list of ingredient ids.
///
/// Any permutation of the same ids yields the same value. Works for any
/// length, including empty input.
pub fn fingerprint<S: AsRef<str>>(ids: &[S]) -> Fingerprint {
    let mut sorted: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    hash_key(&sorted.join(","))
}

/// Rolling hash of an already-joined key
pub(crate) fn hash_key(key: &str) -> Fingerprint {
    let mut hash: i32 = 0;
    // UTF-16 code units, same as `charCodeAt`
    for unit in key.encode_utf16() {
        let wide = (i64::from(hash) << 5) - i64::from(hash) + i64::from(unit);
        // Fold back to 32 bits (`hash & hash` in the web build)
        hash = wide as i32;
    }
    hash.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fingerprints() {
        assert_eq!(fingerprint(&["fire", "moon", "thunder"]), 915_608_337);
        assert_eq!(fingerprint(&["fire", "fire", "star"]), 432_855_022);
        assert_eq!(fingerprint(&["ocean", "ocean", "ocean"]), 72_413_406);
        assert_eq!(fingerprint(&["forest", "star", "moon"]), 1_203_051_342);
    }

    #[test]
    fn test_permutation_invariant() {
        let a = fingerprint(&["fire", "moon", "thunder"]);
        assert_eq!(a, fingerprint(&["thunder", "fire", "moon"]));
        assert_eq!(a, fingerprint(&["moon", "thunder", "fire"]));
    }

    #[test]
    fn test_multiplicity_matters() {
        assert_ne!(
            fingerprint(&["fire", "fire", "star"]),
            fingerprint(&["fire", "star", "star"])
        );
    }

    #[test]
    fn test_short_inputs() {
        let empty: [&str; 0] = [];
        assert_eq!(fingerprint(&empty), 0);
        assert_eq!(fingerprint(&["fire"]), 3_143_222);
        assert_eq!(fingerprint(&["fire", "moon"]), 333_528_905);
        assert_eq!(fingerprint(&[String::from("a")]), 97);
    }

    #[test]
    fn test_long_key_wraps() {
        // Overflows the accumulator many times over
        assert_eq!(hash_key(&"thunder,".repeat(64)), 1_343_688_192);
        assert_eq!(i32::MIN.unsigned_abs(), 2_147_483_648);
    }
}
