/// `prefix...suffix` display form of a long id or key.
///
/// Strings short enough that truncation would not save space pass through
/// unchanged, as does anything the cut would split mid-character.
pub fn abbreviated(s: &str, keep: usize) -> String {
    if s.len() < keep * 2 + 3 || !s.is_char_boundary(keep) || !s.is_char_boundary(s.len() - keep) {
        return s.to_owned();
    }
    format!("{}...{}", &s[..keep], &s[s.len() - keep..])
}
