use crate::mix::{lu32, lu64, tiny_lane, umul128, VAL01, VAL10};

/// a5hash 64-bit digest of `msg`.
///
/// Built for hash-map and bloom-filter keys where short inputs dominate.
/// `seed` may have any statistical quality; use a secret high-entropy seed
/// when flood resistance matters. Lanes are read in native byte order, so
/// big- and little-endian hosts produce different digests.
#[inline(always)]
pub fn a5hash(msg: &[u8], seed: u64) -> u64 {
    let len = msg.len();

    let mut val01 = VAL01;
    let mut val10 = VAL10;

    // Mantissa bits of pi.
    let mut s1 = 0x243F_6A88_85A3_08D3 ^ len as u64;
    let mut s2 = 0x4528_21E6_38D0_1377 ^ len as u64;

    (s1, s2) = umul128(s2 ^ (seed & val10), s1 ^ (seed & val01));

    val10 ^= s2;

    let (a, b) = if len > 16 {
        val01 ^= s1;

        let mut rest = msg;
        loop {
            (s1, s2) = umul128(lu64(rest, 0) ^ s1, lu64(rest, 8) ^ s2);

            rest = &rest[16..];

            s1 = s1.wrapping_add(val01);
            s2 = s2.wrapping_add(val10);

            if rest.len() <= 16 {
                break;
            }
        }

        // Last 16 bytes of the whole message, possibly overlapping the final block.
        (lu64(msg, len - 16), lu64(msg, len - 8))
    } else if len > 3 {
        let tail = len - 4;
        let mo = (len >> 3) * 4;

        let a = (lu32(msg, 0) as u64) << 32 | lu32(msg, tail) as u64;
        let b = (lu32(msg, mo) as u64) << 32 | lu32(msg, tail - mo) as u64;
        (a, b)
    } else {
        (tiny_lane(msg), 0)
    };

    (s1, s2) = umul128(a ^ s1, b ^ s2);
    let (a, b) = umul128(val01 ^ s1, s2);

    a ^ b
}

/// Digest of the first `len` bytes of `data`.
///
/// `None` is accepted only together with `len == 0`. Passing `None` with a
/// non-zero length, or a length past the end of `data`, is a caller bug and
/// panics before any mixing happens.
pub fn hash64(data: Option<&[u8]>, len: usize, seed: u64) -> u64 {
    match data {
        Some(msg) => {
            assert!(
                len <= msg.len(),
                "a5hash: length {} exceeds buffer of {} bytes",
                len,
                msg.len()
            );
            a5hash(&msg[..len], seed)
        }
        None => {
            assert!(len == 0, "a5hash: absent buffer with length {}", len);
            a5hash(&[], seed)
        }
    }
}
