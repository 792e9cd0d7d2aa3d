//! JavaScript-style comment stripping for JSON input.
//!
//! Removes `// line` and `/* block */` comments that sit outside string
//! literals. Comment bytes are replaced by spaces (newlines are kept) so that
//! line and column numbers reported by the JSON parser still match the file.

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Str,
    StrEscape,
    Line,
    Block,
}

/// Returns `input` with comments blanked out.
///
/// An unterminated block comment blanks everything up to end of input.
pub fn strip_comments(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut state = State::Code;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();
        match state {
            State::Code => match (b, next) {
                (b'"', _) => {
                    state = State::Str;
                    out.push(b);
                }
                (b'/', Some(b'/')) => {
                    state = State::Line;
                    out.extend_from_slice(b"  ");
                    i += 1;
                }
                (b'/', Some(b'*')) => {
                    state = State::Block;
                    out.extend_from_slice(b"  ");
                    i += 1;
                }
                _ => out.push(b),
            },
            State::Str => {
                match b {
                    b'\\' => state = State::StrEscape,
                    b'"' => state = State::Code,
                    _ => {}
                }
                out.push(b);
            }
            State::StrEscape => {
                state = State::Str;
                out.push(b);
            }
            State::Line => match b {
                b'\n' => {
                    state = State::Code;
                    out.push(b);
                }
                // keep CRLF intact
                b'\r' if next == Some(b'\n') => out.push(b),
                _ => out.push(blank(b)),
            },
            State::Block => match (b, next) {
                (b'*', Some(b'/')) => {
                    state = State::Code;
                    out.extend_from_slice(b"  ");
                    i += 1;
                }
                _ => out.push(blank(b)),
            },
        }
        i += 1;
    }

    // Multi-byte sequences are copied whole or blanked whole.
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

fn blank(b: u8) -> u8 {
    match b {
        b'\n' | b'\r' | b'\t' => b,
        _ => b' ',
    }
}
