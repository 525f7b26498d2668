use crate::mix::{lu32, tiny_lane, umul64, VAL01, VAL10};

/// a5hash 32-bit digest of `msg`.
///
/// Uses only 32x32 -> 64-bit multiplies, so 32-bit hosts run it without
/// the wide-multiply penalty of [`a5hash`](crate::a5hash).
pub fn a5hash32(msg: &[u8], seed: u32) -> u32 {
    let len = msg.len();

    let mut val01 = VAL01 as u32;
    let mut val10 = VAL10 as u32;

    let mut s1 = 0x243F_6A88 ^ len as u32;
    let mut s2 = 0x85A3_08D3 ^ len as u32;
    let (mut s3, mut s4) = upper_len_seeds(len);

    (s1, s2) = umul64(s2 ^ (seed & val10), s1 ^ (seed & val01));

    // `cd` is the optional second lane pair folded into (s3, s4).
    let (a, b, cd) = if len > 16 {
        val01 ^= s1;
        val10 ^= s2;

        let mut rest = msg;
        loop {
            let t1 = s1;
            let t4 = s4;

            (s1, s2) = umul64(lu32(rest, 0).wrapping_add(s1), lu32(rest, 4).wrapping_add(s2));
            (s3, s4) = umul64(lu32(rest, 8).wrapping_add(s3), lu32(rest, 12).wrapping_add(s4));

            rest = &rest[16..];

            s1 = s1.wrapping_add(val01);
            s2 = s2.wrapping_add(t4);
            s3 = s3.wrapping_add(t1);
            s4 = s4.wrapping_add(val10);

            if rest.len() <= 16 {
                break;
            }
        }

        // Tail lanes are taken from the end of the whole message and may
        // reach back into bytes the loop already consumed.
        let a = lu32(msg, len - 8);
        let b = lu32(msg, len - 4);
        let cd = (rest.len() > 8).then(|| (lu32(msg, len - 16), lu32(msg, len - 12)));
        (a, b, cd)
    } else if len > 3 {
        let tail = len - 4;
        let a = lu32(msg, 0);
        let b = lu32(msg, tail);
        let cd = (len > 8).then(|| {
            let mo = (len >> 3) * 4;
            (lu32(msg, mo), lu32(msg, tail - mo))
        });
        (a, b, cd)
    } else {
        (tiny_lane(msg) as u32, 0, None)
    };

    if let Some((c, d)) = cd {
        (s3, s4) = umul64(c.wrapping_add(s3), d.wrapping_add(s4));
    }

    s1 ^= s3;
    s2 ^= s4;

    (s1, s2) = umul64(a.wrapping_add(s1), b.wrapping_add(s2));
    let (a, b) = umul64(val01 ^ s1, s2);

    a ^ b
}

#[cfg(target_pointer_width = "64")]
#[inline(always)]
fn upper_len_seeds(len: usize) -> (u32, u32) {
    let hi = (len as u64 >> 32) as u32;
    umul64(hi ^ 0x4528_21E6, hi ^ 0x38D0_1377)
}

#[cfg(not(target_pointer_width = "64"))]
#[inline(always)]
fn upper_len_seeds(_len: usize) -> (u32, u32) {
    (0xFB0B_D3EA, 0x0F58_FD47)
}
