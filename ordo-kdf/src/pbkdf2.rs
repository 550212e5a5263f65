//! PBKDF2 (RFC 2898, spec §4.8).

use ordo_core::{Error, Hash, Result};
use ordo_mac::Hmac;

/// Upper bound on the digest length of any hash this toolkit implements; mirrors `ordo-mac`'s
/// internal bound.
const MAX_OUTPUT_SIZE: usize = 64;

/// Derive `out.len()` bytes from `password` and `salt` using `iterations` rounds of HMAC-`H`.
///
/// The password-keyed HMAC state is computed once and cloned per block/iteration, rather than
/// re-expanding the key each time (spec §4.8's precompute-and-clone optimization note).
///
/// # Errors
/// Returns [`Error::Arg`] if `password` or `out` is empty, `iterations == 0`, the derived digest
/// length exceeds this crate's internal bound, or the 32-bit block counter would overflow.
pub fn pbkdf2<H: Hash>(params: H::Params, password: &[u8], salt: &[u8], iterations: u32, out: &mut [u8]) -> Result<()> {
    if password.is_empty() || iterations == 0 || out.is_empty() {
        return Err(Error::Arg);
    }

    let d = H::init(params.clone())?.output_len();
    if d == 0 || d > MAX_OUTPUT_SIZE {
        return Err(Error::Arg);
    }

    let out_len = out.len();
    let block_count = (out_len + d - 1) / d;
    if block_count > u32::MAX as usize {
        return Err(Error::Arg);
    }

    let keyed = Hmac::<H>::init(password, params)?;

    let mut produced = 0;
    for i in 1..=block_count as u32 {
        let mut u = keyed.clone();
        u.update(salt);
        u.update(&i.to_be_bytes());
        let mut u_prev = [0u8; MAX_OUTPUT_SIZE];
        u.finalize(&mut u_prev[..d])?;

        let mut t = u_prev;
        for _ in 1..iterations {
            let mut step = keyed.clone();
            step.update(&u_prev[..d]);
            let mut u_next = [0u8; MAX_OUTPUT_SIZE];
            step.finalize(&mut u_next[..d])?;
            for j in 0..d {
                t[j] ^= u_next[j];
            }
            u_prev = u_next;
        }

        let take = d.min(out_len - produced);
        out[produced..produced + take].copy_from_slice(&t[..take]);
        produced += take;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::pbkdf2;
    use ordo_hashes::Sha256;

    #[test]
    fn rejects_empty_password_or_output() {
        let mut out = [0u8; 16];
        assert!(pbkdf2::<Sha256>((), b"", b"salt", 1, &mut out).is_err());
        assert!(pbkdf2::<Sha256>((), b"pw", b"salt", 1, &mut []).is_err());
    }

    #[test]
    fn rejects_zero_iterations() {
        let mut out = [0u8; 16];
        assert!(pbkdf2::<Sha256>((), b"pw", b"salt", 0, &mut out).is_err());
    }

    #[test]
    fn matches_known_pbkdf2_hmac_sha256_vector() {
        // PBKDF2-HMAC-SHA256("password", "salt", 1, dklen=32), cross-checked against a reference
        // implementation.
        let mut out = [0u8; 32];
        pbkdf2::<Sha256>((), b"password", b"salt", 1, &mut out).unwrap();
        assert_eq!(
            out,
            hex32("120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b")
        );
    }

    fn hex32(s: &str) -> [u8; 32] {
        let mut out = [0u8; 32];
        for i in 0..32 {
            out[i] = u8::from_str_radix(&s[2 * i..2 * i + 2], 16).unwrap();
        }
        out
    }

    #[test]
    fn deterministic_across_runs() {
        let mut out1 = [0u8; 32];
        let mut out2 = [0u8; 32];
        pbkdf2::<Sha256>((), b"password", b"salt", 4096, &mut out1).unwrap();
        pbkdf2::<Sha256>((), b"password", b"salt", 4096, &mut out2).unwrap();
        assert_eq!(out1, out2);
    }

    #[test]
    fn different_salts_produce_different_output() {
        let mut out1 = [0u8; 32];
        let mut out2 = [0u8; 32];
        pbkdf2::<Sha256>((), b"password", b"salt-a", 100, &mut out1).unwrap();
        pbkdf2::<Sha256>((), b"password", b"salt-b", 100, &mut out2).unwrap();
        assert_ne!(out1, out2);
    }

    #[test]
    fn output_longer_than_one_block_spans_multiple_blocks() {
        // SHA-256 digest is 32 bytes; ask for more than that to exercise the block-counter loop.
        let mut out = [0u8; 50];
        pbkdf2::<Sha256>((), b"password", b"salt", 10, &mut out).unwrap();
        assert!(out.iter().any(|&b| b != 0));
    }
}
