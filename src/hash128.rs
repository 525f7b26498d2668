use crate::mix::{lu32, lu64, tiny_lane, umul128, VAL01, VAL10};

/// State left after absorbing a message, before the output multiplies.
struct Absorbed {
    s1: u64,
    s2: u64,
    s3: u64,
    s4: u64,
    val01: u64,
}

impl Absorbed {
    #[inline(always)]
    fn low(&self) -> u64 {
        let (a, b) = umul128(self.val01 ^ self.s1, self.s2);
        a ^ b
    }

    #[inline(always)]
    fn high(&self) -> u64 {
        let (c, d) = umul128(self.s1 ^ self.s3, self.s2 ^ self.s4);
        c ^ d
    }
}

/// a5hash 128-bit digest of `msg`; the upper 64 bits come from one extra
/// multiply over the final state.
pub fn a5hash128(msg: &[u8], seed: u64) -> u128 {
    let st = absorb(msg, seed);
    (st.high() as u128) << 64 | st.low() as u128
}

/// Low 64 bits of [`a5hash128`], skipping the multiply that produces the upper half.
pub fn a5hash128_low(msg: &[u8], seed: u64) -> u64 {
    absorb(msg, seed).low()
}

#[inline(always)]
fn absorb(msg: &[u8], seed: u64) -> Absorbed {
    let len = msg.len();

    let mut val01 = VAL01;
    let mut val10 = VAL10;

    let mut s1 = 0x243F_6A88_85A3_08D3 ^ len as u64;
    let mut s2 = 0x4528_21E6_38D0_1377 ^ len as u64;
    let mut s3 = 0xA409_3822_299F_31D0;
    let mut s4 = 0xC0AC_29B7_C97C_50DD;

    (s1, s2) = umul128(s2 ^ (seed & val10), s1 ^ (seed & val01));

    let (a, b, cd) = if len < 17 {
        if len > 3 {
            let tail = len - 4;
            let mo = (len >> 3) * 4;

            let a = (lu32(msg, 0) as u64) << 32 | lu32(msg, tail) as u64;
            let b = (lu32(msg, mo) as u64) << 32 | lu32(msg, tail - mo) as u64;
            (a, b, None)
        } else {
            (tiny_lane(msg), 0, None)
        }
    } else if len < 33 {
        let c = (lu32(msg, len - 16) as u64) << 32 | lu32(msg, len - 12) as u64;
        let d = (lu32(msg, len - 8) as u64) << 32 | lu32(msg, len - 4) as u64;
        (lu64(msg, 0), lu64(msg, 8), Some((c, d)))
    } else {
        val01 ^= s1;
        val10 ^= s2;

        let mut rest = msg;
        let mut tail32 = true;

        if len > 48 {
            let mut s5: u64 = 0x082E_FA98_EC4E_6C89;
            let mut s6: u64 = 0x3F84_D5B5_B547_0917;

            loop {
                let t1 = s1;
                let t3 = s3;

                (s1, s2) = umul128(lu64(rest, 0).wrapping_add(s1), lu64(rest, 8).wrapping_add(s2));
                (s3, s4) = umul128(lu64(rest, 16).wrapping_add(s3), lu64(rest, 24).wrapping_add(s4));

                s1 = s1.wrapping_add(val01);
                s2 = s2.wrapping_add(s6);
                s3 = s3.wrapping_add(t1);
                s4 = s4.wrapping_add(val10);

                (s5, s6) = umul128(lu64(rest, 32).wrapping_add(s5), lu64(rest, 40).wrapping_add(s6));

                rest = &rest[48..];

                s5 = s5.wrapping_add(t3);
                s6 = s6.wrapping_add(val10);

                if rest.len() <= 48 {
                    break;
                }
            }

            s3 ^= s5;
            s4 ^= s6;

            tail32 = rest.len() > 32;
        }

        if tail32 {
            (s3, s4) = umul128(lu64(rest, 0).wrapping_add(s3), lu64(rest, 8).wrapping_add(s4));

            rest = &rest[16..];

            s3 = s3.wrapping_add(val01);
            s4 = s4.wrapping_add(val10);
        }

        // Offsets are relative to the message end and may reach consumed bytes.
        let a = lu64(msg, len - 16);
        let b = lu64(msg, len - 8);
        let cd = (rest.len() > 16).then(|| (lu64(msg, len - 32), lu64(msg, len - 24)));
        (a, b, cd)
    };

    if let Some((c, d)) = cd {
        (s3, s4) = umul128(c.wrapping_add(s3), d.wrapping_add(s4));
    }

    s1 ^= s3;
    s2 ^= s4;

    (s1, s2) = umul128(a.wrapping_add(s1), b.wrapping_add(s2));

    Absorbed { s1, s2, s3, s4, val01 }
}
