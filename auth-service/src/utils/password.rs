use subtle::ConstantTimeEq;

/// Compares a supplied password with the stored plaintext.
///
/// Equal-length inputs are compared in constant time.
pub fn passwords_match(supplied: &str, stored: &str) -> bool {
    supplied.as_bytes().ct_eq(stored.as_bytes()).into()
}
