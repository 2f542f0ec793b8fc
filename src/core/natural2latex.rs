//! Natural notation to LaTeX conversion.
//!
//! The natural dialect is what a user types without knowing LaTeX:
//! `x^2 + sqrt(9)`, `(a)/(b)`, `>=`, Greek letters spelled out. The
//! conversion is token-driven over the shared symbol tables; anything
//! unrecognized passes through unchanged. Parenthesized constructs are
//! consumed with the same depth-counted scan the segmenter uses, so
//! nested roots and fractions convert correctly.

use crate::core::segment::find_matching_delim;
use crate::data::maps::{NATURAL_OPERATORS, NATURAL_WORDS};

/// Convert natural linear notation to the LaTeX dialect.
pub fn to_latex(input: &str) -> String {
    convert(input)
}

fn convert(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 16);
    let mut i = 0usize;

    while i < input.len() {
        let rest = &input[i..];

        // Operator tokens, longest first
        if let Some((token, tex)) = NATURAL_OPERATORS
            .iter()
            .find(|(token, _)| rest.starts_with(token))
        {
            push_command(&mut out, tex, &rest[token.len()..]);
            i += token.len();
            continue;
        }

        let c = rest.chars().next().expect("index is on a char boundary");

        if c == '^' || c == '_' {
            let consumed = convert_script(c, &rest[1..], &mut out);
            i += 1 + consumed;
            continue;
        }

        if c.is_ascii_alphabetic() {
            let word_len = rest
                .bytes()
                .take_while(|b| b.is_ascii_alphabetic())
                .count();
            let word = &rest[..word_len];
            let after_word = &rest[word_len..];

            // Function-style root: sqrt(..) with depth-counted parens
            if word == "sqrt" && after_word.starts_with('(') {
                if let Some(close) = find_matching_delim(after_word, 0, '(', ')') {
                    let inner = convert(&after_word[1..close]);
                    out.push_str("\\sqrt{");
                    out.push_str(&inner);
                    out.push('}');
                    i += word_len + close + 1;
                    continue;
                }
            }

            if let Some(tex) = NATURAL_WORDS.get(word) {
                push_command(&mut out, tex, after_word);
            } else {
                out.push_str(word);
            }
            i += word_len;
            continue;
        }

        if c == '(' {
            if let Some((latex, consumed)) = convert_paren_fraction(rest) {
                out.push_str(&latex);
                i += consumed;
                continue;
            }
            out.push('(');
            i += 1;
            continue;
        }

        out.push(c);
        i += c.len_utf8();
    }

    out
}

/// `(a)/(b)` -> `\frac{a}{b}`, both groups depth-counted and converted
/// recursively. Returns the LaTeX text and the bytes consumed, or
/// `None` when `rest` is not a parenthesized fraction.
fn convert_paren_fraction(rest: &str) -> Option<(String, usize)> {
    let first_close = find_matching_delim(rest, 0, '(', ')')?;
    if !rest[first_close + 1..].starts_with("/(") {
        return None;
    }
    let second_open = first_close + 2;
    let second_close = find_matching_delim(rest, second_open, '(', ')')?;

    let numerator = convert(&rest[1..first_close]);
    let denominator = convert(&rest[second_open + 1..second_close]);
    Some((
        format!("\\frac{{{}}}{{{}}}", numerator, denominator),
        second_close + 1,
    ))
}

/// Convert the argument of `^` or `_`: a parenthesized group, or a flat
/// run (digits with an optional sign, or one letter). Returns the bytes
/// consumed after the marker.
fn convert_script(marker: char, after: &str, out: &mut String) -> usize {
    if after.starts_with('(') {
        if let Some(close) = find_matching_delim(after, 0, '(', ')') {
            let inner = convert(&after[1..close]);
            out.push(marker);
            out.push('{');
            out.push_str(&inner);
            out.push('}');
            return close + 1;
        }
    }

    let run = script_run(after);
    if run.is_empty() {
        // Dangling marker; pass it through
        out.push(marker);
        return 0;
    }
    out.push(marker);
    out.push('{');
    out.push_str(run);
    out.push('}');
    run.len()
}

/// A flat script operand: optional minus sign plus digits, or a single
/// letter.
fn script_run(s: &str) -> &str {
    let bytes = s.as_bytes();
    let signed = bytes.first() == Some(&b'-');
    let digits_start = usize::from(signed);
    let mut len = digits_start;
    while len < bytes.len() && bytes[len].is_ascii_digit() {
        len += 1;
    }
    if len > digits_start {
        return &s[..len];
    }
    if !signed && bytes.first().is_some_and(|b| b.is_ascii_alphabetic()) {
        return &s[..1];
    }
    ""
}

/// Push a command, separating it from a following alphanumeric so the
/// output re-tokenizes as two tokens.
fn push_command(out: &mut String, tex: &str, following: &str) {
    out.push_str(tex);
    let ends_alpha = tex.chars().next_back().is_some_and(|c| c.is_ascii_alphabetic());
    let next_alnum = following.chars().next().is_some_and(|c| c.is_alphanumeric());
    if ends_alpha && next_alnum {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_power_and_sqrt() {
        assert_eq!(to_latex("x^2 + sqrt(9)"), "x^{2} + \\sqrt{9}");
    }

    #[test]
    fn test_paren_fraction() {
        assert_eq!(to_latex("(a)/(b)"), "\\frac{a}{b}");
        assert_eq!(to_latex("(x+1)/(2)"), "\\frac{x+1}{2}");
    }

    #[test]
    fn test_nested_fraction() {
        assert_eq!(to_latex("((x)/(y))/(b)"), "\\frac{\\frac{x}{y}}{b}");
    }

    #[test]
    fn test_nested_sqrt() {
        assert_eq!(to_latex("sqrt(sqrt(16))"), "\\sqrt{\\sqrt{16}}");
        assert_eq!(to_latex("sqrt((a)/(b))"), "\\sqrt{\\frac{a}{b}}");
    }

    #[test]
    fn test_relations() {
        assert_eq!(to_latex("x >= 2"), "x \\geq 2");
        assert_eq!(to_latex("x<=y"), "x\\leq y");
        assert_eq!(to_latex("a != b"), "a \\neq b");
        assert_eq!(to_latex("+-1"), "\\pm 1");
    }

    #[test]
    fn test_greek_words() {
        assert_eq!(to_latex("alpha"), "\\alpha");
        assert_eq!(to_latex("pi r^2"), "\\pi r^{2}");
        assert_eq!(to_latex("2 pi"), "2 \\pi");
    }

    #[test]
    fn test_unicode_symbols() {
        assert_eq!(to_latex("π"), "\\pi");
        assert_eq!(to_latex("x ≥ 2"), "x \\geq 2");
        assert_eq!(to_latex("a ÷ b"), "a \\div b");
    }

    #[test]
    fn test_functions_and_operators() {
        assert_eq!(to_latex("sin x"), "\\sin x");
        assert_eq!(to_latex("2*3"), "2\\times 3");
        assert_eq!(to_latex("infinity"), "\\infty");
        assert_eq!(to_latex("inf"), "\\infty");
    }

    #[test]
    fn test_unknown_words_pass_through() {
        assert_eq!(to_latex("speed = 12"), "speed = 12");
        assert_eq!(to_latex("pix"), "pix");
    }

    #[test]
    fn test_script_variants() {
        assert_eq!(to_latex("x^-2"), "x^{-2}");
        assert_eq!(to_latex("x^(a+b)"), "x^{a+b}");
        assert_eq!(to_latex("x_n"), "x_{n}");
        assert_eq!(to_latex("x^"), "x^");
    }

    #[test]
    fn test_unbalanced_parens_pass_through() {
        assert_eq!(to_latex("(a/(b"), "(a/(b");
        assert_eq!(to_latex("sqrt(9"), "sqrt(9");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_latex(""), "");
    }
}
