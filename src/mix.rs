/// `01` bit-pairs
pub(crate) const VAL01: u64 = 0x5555_5555_5555_5555;
/// `10` bit-pairs
pub(crate) const VAL10: u64 = 0xAAAA_AAAA_AAAA_AAAA;

/// Full 64x64 -> 128-bit product of `u` and `v`, returned as `(low, high)`.
///
/// Total over the whole domain. The strategy is picked at compile time and
/// every strategy yields bit-identical halves.
#[inline(always)]
pub fn umul128(u: u64, v: u64) -> (u64, u64) {
    #[cfg(all(target_pointer_width = "64", not(feature = "portable-mul")))]
    {
        umul128_wide(u, v)
    }
    #[cfg(any(not(target_pointer_width = "64"), feature = "portable-mul"))]
    {
        umul128_portable(u, v)
    }
}

/// Native widening multiply; lowers to a single `mul`/`umulh` pair on 64-bit targets.
#[inline(always)]
#[allow(dead_code)]
fn umul128_wide(u: u64, v: u64) -> (u64, u64) {
    let r = (u as u128) * (v as u128);
    (r as u64, (r >> 64) as u64)
}

/// Schoolbook decomposition into four 32x32 partial products (Hacker's Delight).
#[inline(always)]
#[allow(dead_code)]
fn umul128_portable(u: u64, v: u64) -> (u64, u64) {
    let lo = u.wrapping_mul(v);

    let u0 = u as u32 as u64;
    let v0 = v as u32 as u64;
    let u1 = u >> 32;
    let v1 = v >> 32;

    let w0 = u0 * v0;
    let t = u1 * v0 + (w0 >> 32);
    let w1 = u0 * v1 + (t as u32 as u64);

    let hi = u1 * v1 + (w1 >> 32) + (t >> 32);
    (lo, hi)
}

/// 32x32 -> 64-bit product of `u` and `v`, returned as `(low, high)`.
#[inline(always)]
pub fn umul64(u: u32, v: u32) -> (u32, u32) {
    let r = (u as u64) * (v as u64);
    (r as u32, (r >> 32) as u32)
}

/// Load a native-endian `u32` lane at `at`.
#[inline(always)]
pub(crate) fn lu32(msg: &[u8], at: usize) -> u32 {
    let mut lane = [0u8; 4];
    lane.copy_from_slice(&msg[at..at + 4]);
    u32::from_ne_bytes(lane)
}

/// Load a native-endian `u64` lane at `at`.
#[inline(always)]
pub(crate) fn lu64(msg: &[u8], at: usize) -> u64 {
    let mut lane = [0u8; 8];
    lane.copy_from_slice(&msg[at..at + 8]);
    u64::from_ne_bytes(lane)
}

/// Up to three leading bytes packed little-end first; 0 for an empty message.
#[inline(always)]
pub(crate) fn tiny_lane(msg: &[u8]) -> u64 {
    let mut a = 0u64;
    for (i, &byte) in msg.iter().take(3).enumerate() {
        a |= (byte as u64) << (8 * i);
    }
    a
}
