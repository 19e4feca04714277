//! Text Buffer
//!
//! Char-indexed editing primitives over a field value. Offsets count
//! characters, never bytes, so a cursor offset can be used directly as a
//! screen column delta.

/// Number of characters in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of char offset `at`, or the string length past the end
fn byte_index(s: &str, at: usize) -> usize {
    s.char_indices().nth(at).map_or(s.len(), |(i, _)| i)
}

/// The value from char offset `from` onward
pub fn tail(s: &str, from: usize) -> &str {
    &s[byte_index(s, from)..]
}

/// Replace the character at `at`, appending when `at` is the end of the value
pub fn overwrite_char(s: &mut String, at: usize, c: char) {
    let start = byte_index(s, at);
    match s[start..].chars().next() {
        Some(old) => s.replace_range(start..start + old.len_utf8(), c.encode_utf8(&mut [0; 4])),
        None => s.push(c),
    }
}

/// Insert `c` at `at`, keeping at most `capacity` characters
pub fn insert_char(s: &mut String, at: usize, c: char, capacity: usize) {
    let at = at.min(char_len(s));
    s.insert(byte_index(s, at), c);
    truncate_chars(s, capacity);
}

/// Remove and return the character at `at`
pub fn remove_char(s: &mut String, at: usize) -> Option<char> {
    let start = byte_index(s, at);
    if start >= s.len() {
        return None;
    }
    Some(s.remove(start))
}

/// Keep only the first `len` characters
pub fn truncate_chars(s: &mut String, len: usize) {
    let end = byte_index(s, len);
    s.truncate(end);
}

/// Strip trailing spaces, tabs and line breaks
pub fn trim_trailing(s: &mut String) {
    let kept = s.trim_end_matches([' ', '\t', '\r', '\n']).len();
    s.truncate(kept);
}

/// Start of the word before `from`: back over spaces, then back over the word
pub fn find_word_boundary_back(s: &str, from: usize) -> usize {
    let chars: Vec<char> = s.chars().take(from).collect();
    let mut pos = chars.len();

    while pos > 0 && chars[pos - 1] == ' ' {
        pos -= 1;
    }
    while pos > 0 && chars[pos - 1] != ' ' {
        pos -= 1;
    }
    pos
}

/// Start of the next word after `from`: forward to a space, then over the
/// run of spaces. Lands on the end of the value when no word follows.
pub fn find_word_boundary_forward(s: &str, from: usize) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut pos = from.min(chars.len());

    while pos < chars.len() && chars[pos] != ' ' {
        pos += 1;
    }
    while pos < chars.len() && chars[pos] == ' ' {
        pos += 1;
    }
    pos
}

// ============================================================================
// Tests
// ============================================================================
