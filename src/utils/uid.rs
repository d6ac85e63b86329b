use rand::Rng;

// Easily-confused characters (0/O, 1/I/l, S/5) are left out on purpose.
const DIGITS: &[u8] = b"23456789";
const LETTERS: &[u8] = b"ABCDEFGHJKLMNPQRTUVWXYZ";

/// Distinct codes the digit-letter-digit shape can express: 8 * 23 * 8.
pub const KEYSPACE: usize = DIGITS.len() * LETTERS.len() * DIGITS.len();

/// Draws a candidate code, digit-letter-digit, each symbol uniform over its
/// class with repetition allowed. Uniqueness is the caller's problem.
pub fn mint() -> String {
    let mut rng = rand::thread_rng();
    let d1 = DIGITS[rng.gen_range(0..DIGITS.len())] as char;
    let l = LETTERS[rng.gen_range(0..LETTERS.len())] as char;
    let d2 = DIGITS[rng.gen_range(0..DIGITS.len())] as char;
    [d1, l, d2].iter().collect()
}

pub fn is_well_formed(uid: &str) -> bool {
    let bytes = uid.as_bytes();
    bytes.len() == 3
        && DIGITS.contains(&bytes[0])
        && LETTERS.contains(&bytes[1])
        && DIGITS.contains(&bytes[2])
}
