//! Codepoint-level divergence detection between two decoded lines.

/// Return the codepoint index of the first difference between `s1` and `s2`,
/// or `None` when every codepoint of `s1` matches `s2`.
///
/// The index counts codepoints, not bytes, so multi-byte characters are
/// compared as whole units and a mismatch inside non-ASCII text is reported
/// at its character position.
///
/// When `s1` is a strict prefix of `s2` the lines compare as identical:
/// extra trailing content within a line pair is never reported here. Length
/// asymmetry is only surfaced by the scanner when a whole stream ends early.
pub fn divergence(s1: &str, s2: &str) -> Option<usize> {
    for (index, (offset, c1)) in s1.char_indices().enumerate() {
        if offset >= s2.len() {
            // s2 ran out while s1 still has content.
            return Some(index);
        }

        // While all previous codepoints matched, byte offsets in the two
        // strings stay aligned, so decoding s2 here is well-defined. An
        // off-boundary offset can only mean the widths already diverged.
        let Some(c2) = s2.get(offset..).and_then(|tail| tail.chars().next()) else {
            return Some(index);
        };

        if c1 != c2 {
            return Some(index);
        }
    }

    None
}
