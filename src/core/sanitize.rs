//! Control-character sanitization for upstream model output.
//!
//! The upstream model is known to emit form feeds (`\x0C`) where a
//! `\frac` lost its escape, which render as tofu boxes and break the
//! typesetter. Sanitization strips every control character except the
//! whitespace the rest of the pipeline understands, then trims the ends.

/// Remove Unicode control characters and trim surrounding whitespace.
///
/// Tabs and newlines survive; they are meaningful inside multi-line
/// explanations. Interior whitespace is never collapsed, so segment
/// content is preserved byte for byte. Idempotent by construction.
pub fn sanitize(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !is_stripped_control(*c))
        .collect();
    cleaned.trim().to_string()
}

/// Control characters removed by [`sanitize`].
///
/// `\t`, `\n`, and `\r` are kept; everything else in the C0/C1 ranges
/// (plus DEL) goes, form feed included.
fn is_stripped_control(c: char) -> bool {
    c.is_control() && !matches!(c, '\t' | '\n' | '\r')
}
