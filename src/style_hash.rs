//! Deterministic per-node seeds.
//!
//! Every visual decision in the city (tier count, shape, crown, material,
//! texture) is a pure function of a node's path. The hash below is frozen:
//! changing it re-rolls the appearance of every existing city.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

pub const MATERIAL_SALT: u64 = 0x6d61_7465_7269_616c;
pub const TEXTURE_SALT: u64 = 0x7465_7874_7572_6573;

/// 32-bit style seed derived from a node key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleSeed(pub u32);

impl StyleSeed {
    pub fn from_key(key: &str) -> Self {
        Self(fold32(splitmix64(fnv1a64(key.as_bytes()))))
    }

    /// Seed in a separate hash domain, used for decisions that must not
    /// correlate with the shape and tier draws taken from [`Self::from_key`].
    pub fn salted(key: &str, salt: u64) -> Self {
        Self(fold32(splitmix64(fnv1a64(key.as_bytes()) ^ salt)))
    }

    #[inline]
    pub fn draw(self, modulus: u32) -> u32 {
        self.0 % modulus.max(1)
    }
}

pub fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

pub fn splitmix64(mut value: u64) -> u64 {
    value = value.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = value;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[inline]
fn fold32(value: u64) -> u32 {
    ((value >> 32) ^ (value & 0xffff_ffff)) as u32
}
