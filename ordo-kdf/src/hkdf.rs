//! HKDF (RFC 5869, spec §4.9).

use ordo_core::{Error, Hash, Result};
use ordo_mac::Hmac;

const MAX_OUTPUT_SIZE: usize = 64;

/// Extract-then-expand a pseudorandom key of length `out.len()` from `ikm`, `salt` and `info`.
///
/// `salt: None` uses `digest_len(H)` zero bytes as the salt, per RFC 5869 §2.2 ("if not provided,
/// it is set to a string of `HashLen` zeros").
///
/// # Errors
/// Returns [`Error::Arg`] if the derived digest length exceeds this crate's internal bound, or if
/// `out.len()` would require more than 255 expand rounds.
pub fn hkdf<H: Hash>(params: H::Params, ikm: &[u8], salt: Option<&[u8]>, info: &[u8], out: &mut [u8]) -> Result<()> {
    let d = H::init(params.clone())?.output_len();
    if d == 0 || d > MAX_OUTPUT_SIZE {
        return Err(Error::Arg);
    }

    let out_len = out.len();
    let rounds = out_len.div_ceil(d);
    if rounds > 255 {
        return Err(Error::Arg);
    }

    let zero_salt = [0u8; MAX_OUTPUT_SIZE];
    let salt_bytes = salt.unwrap_or(&zero_salt[..d]);
    let mut extractor = Hmac::<H>::init(salt_bytes, params.clone())?;
    extractor.update(ikm);
    let mut prk = [0u8; MAX_OUTPUT_SIZE];
    extractor.finalize(&mut prk[..d])?;

    let keyed = Hmac::<H>::init(&prk[..d], params)?;
    let mut t = [0u8; MAX_OUTPUT_SIZE];
    let mut t_len = 0;
    let mut produced = 0;

    for i in 1..=rounds as u8 {
        let mut step = keyed.clone();
        step.update(&t[..t_len]);
        step.update(info);
        step.update(&[i]);
        let mut next = [0u8; MAX_OUTPUT_SIZE];
        step.finalize(&mut next[..d])?;

        let take = d.min(out_len - produced);
        out[produced..produced + take].copy_from_slice(&next[..take]);
        produced += take;
        t = next;
        t_len = d;
    }
    Ok(())
}
