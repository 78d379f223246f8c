use std::hash::{BuildHasher, Hasher};

/// Hasher for maps keyed by mod bits.
///
/// Keys are already well-distributed `u32` values so hashing is the
/// identity.
#[derive(Copy, Clone, Default)]
pub(crate) struct ModsHasher;

impl BuildHasher for ModsHasher {
    type Hasher = ModsHash;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        ModsHash { bits: 0 }
    }
}

pub(crate) struct ModsHash {
    bits: u32,
}

impl Hasher for ModsHash {
    #[inline]
    fn finish(&self) -> u64 {
        u64::from(self.bits)
    }

    #[inline]
    fn write(&mut self, _: &[u8]) {
        unreachable!()
    }

    #[inline]
    fn write_u32(&mut self, bits: u32) {
        self.bits = bits;
    }
}
