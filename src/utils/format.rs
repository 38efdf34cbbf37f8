// src/utils/format.rs
use crate::models::ResolvedSizing;

/// Renders the verbose diagnostic block printed after the password line.
///
/// Entropy figures are approximations of the sampling space, hence the `~`;
/// nothing is computed here beyond what the sizing resolver already derived.
pub fn format_report(sizing: &ResolvedSizing, alphabet_size: usize) -> [String; 4] {
    [
        format!("Password length: {} characters", sizing.length),
        format!("Password entropy: ~ {} bits", sizing.entropy_bits),
        format!("Entropy per character: ~ {} bits", sizing.bits_per_char),
        format!("Character set size: {} characters", alphabet_size),
    ]
}
