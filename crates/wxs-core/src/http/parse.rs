//! Parse HTTP response header lines into `ResponseHead`.

/// Status and redirect target of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub status: u32,
    /// `Location` value if present.
    pub location: Option<String>,
}

/// Builds a `ResponseHead` from the status and collected header lines.
/// The status line and blank terminator are ignored.
pub(crate) fn parse_head(status: u32, lines: &[String]) -> ResponseHead {
    let mut location = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("location") {
                location = Some(value.trim().to_string());
            }
        }
    }

    ResponseHead { status, location }
}
