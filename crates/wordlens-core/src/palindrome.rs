/// Check whether a word reads the same forwards and backwards.
///
/// The only normalization is case-folding: punctuation, digits, and spaces
/// participate in the comparison exactly as written. Empty and
/// single-character words are vacuously palindromes.
pub fn is_palindrome(word: &str) -> bool {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let len = chars.len();
    // Two-pointer scan toward the center; the middle character of an
    // odd-length word needs no partner.
    for i in 0..len / 2 {
        if chars[i] != chars[len - 1 - i] {
            return false;
        }
    }
    true
}
