use super::core::{Blake2bHash, challenge};
use crate::error::{Error, Result};
use crate::keys::group::{Point, double_scalarmult_vartime};
use crate::keys::scalar::is_above_l;
use crate::utils::bytes::{array_from, load32_le_buf};
use crate::utils::verify32;

/// Encoding of the neutral point.
const ZERO_POINT: [u8; 32] = {
    let mut p = [0u8; 32];
    p[0] = 1;
    p
};

/// Checks `[8]R == [8]([S]B − [h]A)` for `signature = R ‖ S`.
///
/// `h` is the challenge scalar computed by the caller, which lets custom
/// EdDSA variants reuse the equation with their own hash.
///
/// Non-canonical encodings of `A` and `R` are accepted. `S` must be below
/// L. The multiplication by 8 ignores low-order components, so this check
/// agrees with batch verification.
///
/// Variable time; all inputs are public.
///
/// # Errors
///
/// - [`Error::InvalidPoint`] if `A` or `R` is not on the curve
/// - [`Error::NonCanonicalScalar`] if `S ≥ L`
/// - [`Error::SignatureMismatch`] if the equation does not hold
pub fn eddsa_check_equation(signature: &[u8; 64], public_key: &[u8; 32], h: &[u8; 32]) -> Result<()> {
    let minus_a = Point::from_bytes_neg_vartime(public_key).ok_or(Error::InvalidPoint)?;
    let minus_r =
        Point::from_bytes_neg_vartime(&array_from(&signature[..32])).ok_or(Error::InvalidPoint)?;

    let s: [u8; 32] = array_from(&signature[32..]);
    let mut s32 = [0u32; 8];
    load32_le_buf(&mut s32, &s);
    if is_above_l(&s32) == 1 {
        return Err(Error::NonCanonicalScalar);
    }

    // [s]B − [h]A − R, then clear the cofactor
    let mut sum = double_scalarmult_vartime(h, &minus_a, &s);
    sum = sum.add(&minus_r.cache());
    for _ in 0..3 {
        sum = sum.double();
    }

    if verify32(&sum.to_bytes(), &ZERO_POINT) == 0 {
        Ok(())
    } else {
        Err(Error::SignatureMismatch)
    }
}

/// Verifies an EdDSA (BLAKE2b) signature of `message` under `public_key`.
///
/// # Errors
///
/// See [`eddsa_check_equation`].
pub fn eddsa_check(signature: &[u8; 64], public_key: &[u8; 32], message: &[u8]) -> Result<()> {
    let h = challenge::<Blake2bHash>(signature, public_key, &[], message);
    eddsa_check_equation(signature, public_key, &h)
}
