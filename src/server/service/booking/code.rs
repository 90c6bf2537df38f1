use rand::Rng;

/// Number of digits in a booking confirmation code.
pub const CONFIRMATION_CODE_LENGTH: usize = 10;

/// Generates a random numeric booking confirmation code.
///
/// Codes are not guaranteed unique; the booking service checks the ledger and
/// retries a bounded number of times.
///
/// # Returns
/// - `String` - A 10-digit code, possibly with leading zeros
pub fn generate_confirmation_code() -> String {
    const DIGITS: &[u8] = b"0123456789";

    let mut rng = rand::rng();

    (0..CONFIRMATION_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..DIGITS.len());
            DIGITS[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_ten_digit_codes() {
        for _ in 0..100 {
            let code = generate_confirmation_code();

            assert_eq!(code.len(), CONFIRMATION_CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
