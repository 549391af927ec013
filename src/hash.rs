/// Folds an arbitrary string into a 32-bit unsigned value.
///
/// DJB2-family rolling hash: `h = (h << 5) - h + c` over the UTF-16 code
/// units of the input, with exact wrapping 32-bit signed arithmetic. The
/// UTF-16 code-unit convention is fixed so that multi-byte answers (CJK
/// names, emoji) hash identically everywhere; changing the encoding would
/// silently re-key every derived password.
///
/// Not cryptographic. Collisions are acceptable, determinism is not
/// negotiable.
pub fn fold_hash(input: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in input.encode_utf16() {
        h = h
            .wrapping_shl(5)
            .wrapping_sub(h)
            .wrapping_add(i32::from(unit));
    }
    h.unsigned_abs()
}
