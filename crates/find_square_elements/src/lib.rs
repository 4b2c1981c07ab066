use once_cell::sync::Lazy;
use regex::Regex;

// A square element is a bracketed marker with a non-empty body, e.g. "[~]" or "[r]".
static SQUARE_ELEMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[[^\]]+\]").unwrap());

/// Collects the run of square-element markers at the start of `input`.
///
/// Scanning stops at the first position that does not begin a `[...]`
/// marker, so trailing text (including further bracketed markers after
/// other characters) is ignored. Returns an empty list when the input
/// does not start with a marker.
pub fn find_square_elements(input: &str) -> Vec<String> {
    let mut rest = input;
    let mut elements = Vec::new();
    while let Some(found) = SQUARE_ELEMENT_RE.find(rest) {
        elements.push(found.as_str().to_string());
        rest = &rest[found.end()..];
    }
    elements
}
