//! Order-sensitive content fingerprints.
//!
//! Leaf values are hashed with std's `DefaultHasher` and folded into a 32-bit
//! accumulator with `((h1 << 5) + h1) ^ h2`. Two inputs that differ only in
//! order produce different fingerprints. Collisions are possible and go
//! undetected.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Hash contributed by an empty collection.
const EMPTY_COLLECTION: i32 = 19;

/// A running fingerprint.
///
/// # Example
///
/// ```
/// use gridkit::fingerprint::HashCode;
///
/// let a = HashCode::of(&"x").and(&1u8).value();
/// let b = HashCode::of(&1u8).and(&"x").value();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HashCode(i32);

impl HashCode {
    pub fn new() -> Self {
        Self(0)
    }

    /// Start from the hash of a single value.
    pub fn of<H: Hash + ?Sized>(item: &H) -> Self {
        Self(leaf_hash(item))
    }

    /// Start from the combined hashes of a sequence.
    pub fn of_each<'a, H, I>(items: I) -> Self
    where
        H: Hash + 'a,
        I: IntoIterator<Item = &'a H>,
    {
        Self::new().and_each(items)
    }

    /// Fold in a single value.
    pub fn and<H: Hash + ?Sized>(self, item: &H) -> Self {
        Self(combine(self.0, leaf_hash(item)))
    }

    /// Fold in each value of a sequence, or the empty-collection constant
    /// when the sequence is empty.
    pub fn and_each<'a, H, I>(self, items: I) -> Self
    where
        H: Hash + 'a,
        I: IntoIterator<Item = &'a H>,
    {
        let mut hash = self;
        let mut any = false;
        for item in items {
            hash = hash.and(item);
            any = true;
        }
        if any {
            hash
        } else {
            Self(combine(hash.0, EMPTY_COLLECTION))
        }
    }

    /// Fold in an already computed fingerprint.
    pub fn and_hash(self, other: HashCode) -> Self {
        Self(combine(self.0, other.0))
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

/// `((h1 << 5) + h1) ^ h2` on wrapping 32-bit integers.
pub fn combine(h1: i32, h2: i32) -> i32 {
    h1.wrapping_shl(5).wrapping_add(h1) ^ h2
}

fn leaf_hash<H: Hash + ?Sized>(item: &H) -> i32 {
    let mut hasher = DefaultHasher::new();
    item.hash(&mut hasher);
    let wide = hasher.finish();
    (wide ^ (wide >> 32)) as i32
}

/// Identity of a shared closure, usable as a hash input.
///
/// Two handles compare equal only when they point at the same allocation,
/// so swapping in a behaviourally identical but distinct closure changes the
/// fingerprint.
pub fn identity<F: ?Sized>(f: &Arc<F>) -> usize {
    Arc::as_ptr(f) as *const () as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_matches_reference_values() {
        assert_eq!(combine(0, 0), 0);
        assert_eq!(combine(1, 0), 33);
        assert_eq!(combine(1, 1), 32);
        assert_eq!(combine(-1, 0), -33);
    }

    #[test]
    fn test_combine_wraps() {
        assert_eq!(combine(i32::MAX, 0), i32::MAX.wrapping_mul(33));
    }

    #[test]
    fn test_empty_collection_contributes_constant() {
        let empty: [u8; 0] = [];
        assert_eq!(HashCode::of_each(empty.iter()).value(), 19);
    }

    #[test]
    fn test_identity_distinguishes_allocations() {
        let a: Arc<dyn Fn() + Send + Sync> = Arc::new(|| {});
        let b: Arc<dyn Fn() + Send + Sync> = Arc::new(|| {});
        assert_eq!(identity(&a), identity(&a.clone()));
        assert_ne!(identity(&a), identity(&b));
    }
}
