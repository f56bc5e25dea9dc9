//! Textual rendering of a tag list
//!
//! The `tags` column holds the whole list as one list literal in the familiar
//! Python style: `[]`, `['life']`, `['inspirational', 'life']`. Rows written by
//! earlier tooling use this exact form, so it is kept byte for byte.

/// Renders tags as a bracketed, comma-separated list literal
///
/// # Example
///
/// ```
/// use quotewalk::output::format_tags;
///
/// let tags = vec!["inspirational".to_string(), "life".to_string()];
/// assert_eq!(format_tags(&tags), "['inspirational', 'life']");
/// assert_eq!(format_tags(&[]), "[]");
/// ```
pub fn format_tags(tags: &[String]) -> String {
    let items: Vec<String> = tags.iter().map(|tag| string_literal(tag)).collect();
    format!("[{}]", items.join(", "))
}

/// Quotes one tag
///
/// Single quotes are used unless the tag contains a single quote and no
/// double quote. Backslashes, the chosen quote character, and non-printable
/// characters are escaped.
fn string_literal(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => out.push_str(&escape_code_point(c)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Printable in the `str.isprintable` sense
///
/// Control characters, separators other than the ASCII space, format
/// characters, private-use code points and noncharacters are not printable.
/// Unassigned code points outside those ranges are treated as printable.
fn is_printable(c: char) -> bool {
    if c.is_control() || (c.is_whitespace() && c != ' ') {
        return false;
    }
    !(is_format(c) || is_private_use(c) || is_noncharacter(c))
}

/// Unicode general category Cf
fn is_format(c: char) -> bool {
    matches!(
        c as u32,
        0x00AD
            | 0x0600..=0x0605
            | 0x061C
            | 0x06DD
            | 0x070F
            | 0x0890..=0x0891
            | 0x08E2
            | 0x180E
            | 0x200B..=0x200F
            | 0x202A..=0x202E
            | 0x2060..=0x2064
            | 0x2066..=0x206F
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0x110BD
            | 0x110CD
            | 0x13430..=0x1343F
            | 0x1BCA0..=0x1BCA3
            | 0x1D173..=0x1D17A
            | 0xE0001
            | 0xE0020..=0xE007F
    )
}

fn is_private_use(c: char) -> bool {
    matches!(
        c as u32,
        0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD
    )
}

fn is_noncharacter(c: char) -> bool {
    let code = c as u32;
    (0xFDD0..=0xFDEF).contains(&code) || code & 0xFFFE == 0xFFFE
}

fn escape_code_point(c: char) -> String {
    let code = c as u32;
    if code <= 0xff {
        format!("\\x{:02x}", code)
    } else if code <= 0xffff {
        format!("\\u{:04x}", code)
    } else {
        format!("\\U{:08x}", code)
    }
}
