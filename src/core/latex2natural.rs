//! LaTeX to natural and plain conversion.
//!
//! Both directions walk the same token stream. The natural rendering is
//! the editable linear form (`(a)/(b)`, `sqrt(x)`, `>=`); the plain
//! rendering strips presentation commands and produces the one-line
//! human-readable string used for final-answer summaries (`a/b`, `≥`,
//! `π`). Round-trips through `to_latex` are exact only for flat
//! single-macro expressions; nested expressions are approximate by
//! design.

use std::iter::Peekable;

use crate::core::engine::utils::{read_argument, read_balanced_group};
use crate::core::engine::{tokenize, MathToken};
use crate::data::maps::{
    PRESENTATION_COMMANDS, TEX_TO_NATURAL, TEX_TO_PLAIN, TEX_TO_PLAIN_ASCII,
};

/// Options for the plain rendering.
#[derive(Debug, Clone)]
pub struct PlainOptions {
    /// Render symbols as Unicode (`π`, `≥`, `√`) instead of ASCII names
    /// Default: true
    pub unicode_symbols: bool,

    /// Render simple fractions as `a ÷ b` instead of `a/b`
    /// Default: false
    pub division_sign: bool,
}

impl Default for PlainOptions {
    fn default() -> Self {
        Self {
            unicode_symbols: true,
            division_sign: false,
        }
    }
}

impl PlainOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// ASCII-only output, for surfaces without Unicode math glyphs
    pub fn ascii() -> Self {
        Self {
            unicode_symbols: false,
            division_sign: false,
        }
    }
}

/// How the token stream is rendered back to text.
#[derive(Debug, Clone, Copy)]
struct Rendering {
    natural: bool,
    unicode: bool,
    division_sign: bool,
}

impl Rendering {
    const NATURAL: Rendering = Rendering {
        natural: true,
        unicode: false,
        division_sign: false,
    };

    fn plain(options: &PlainOptions) -> Self {
        Rendering {
            natural: false,
            unicode: options.unicode_symbols,
            division_sign: options.division_sign,
        }
    }

    /// Table form of a command, if the dialect has one.
    fn command_text(&self, name: &str) -> Option<&'static str> {
        if self.natural {
            TEX_TO_NATURAL.get(name).copied()
        } else if self.unicode {
            TEX_TO_PLAIN.get(name).copied()
        } else {
            TEX_TO_PLAIN_ASCII
                .get(name)
                .or_else(|| TEX_TO_NATURAL.get(name))
                .copied()
        }
    }
}

/// Convert the LaTeX dialect to natural linear notation.
pub fn to_natural(input: &str) -> String {
    render_input(input, Rendering::NATURAL)
}

/// Convert the LaTeX dialect to a human-readable plain string.
pub fn to_plain(input: &str) -> String {
    to_plain_with_options(input, &PlainOptions::default())
}

/// Like [`to_plain`] with explicit options.
pub fn to_plain_with_options(input: &str, options: &PlainOptions) -> String {
    render_input(input, Rendering::plain(options))
}

fn render_input(input: &str, rendering: Rendering) -> String {
    let mut iter = tokenize(input).into_iter().peekable();
    let out = render_stream(&mut iter, rendering);
    cleanup(out)
}

fn render_tokens(tokens: Vec<MathToken>, rendering: Rendering) -> String {
    let mut iter = tokens.into_iter().peekable();
    render_stream(&mut iter, rendering)
}

fn render_stream<I>(iter: &mut Peekable<I>, rendering: Rendering) -> String
where
    I: Iterator<Item = MathToken>,
{
    let mut out = String::new();

    while let Some(token) = iter.next() {
        match token {
            MathToken::Command(name) => render_command(&name, iter, rendering, &mut out),
            MathToken::BeginGroup => {
                // Bare groups are transparent outside macro arguments
                let group = read_balanced_group(iter);
                out.push_str(&render_tokens(group, rendering));
            }
            // Stray close brace; drop and keep going
            MathToken::EndGroup => {}
            MathToken::Superscript => render_script('^', iter, rendering, &mut out),
            MathToken::Subscript => render_script('_', iter, rendering, &mut out),
            MathToken::Char('$') => {}
            MathToken::Char(c) => out.push(c),
            MathToken::Space => out.push(' '),
        }
    }

    out
}

fn render_command<I>(name: &str, iter: &mut Peekable<I>, rendering: Rendering, out: &mut String)
where
    I: Iterator<Item = MathToken>,
{
    match name {
        "frac" => {
            let numerator = render_tokens(read_argument(iter), rendering);
            let denominator = render_tokens(read_argument(iter), rendering);
            render_fraction(&numerator, &denominator, rendering, out);
        }
        "sqrt" => {
            let radicand = render_tokens(read_argument(iter), rendering);
            if rendering.natural || !rendering.unicode {
                out.push_str("sqrt(");
                out.push_str(&radicand);
                out.push(')');
            } else if is_simple_term(&radicand) {
                out.push('√');
                out.push_str(&radicand);
            } else {
                out.push_str("√(");
                out.push_str(&radicand);
                out.push(')');
            }
        }
        // Math delimiters carried by the LaTeX form
        "(" | ")" | "[" | "]" => {}
        _ if PRESENTATION_COMMANDS.contains(name) => {}
        _ => {
            if let Some(text) = rendering.command_text(name) {
                out.push_str(text);
                // The lexer swallows spaces after alphabetic commands;
                // put the token separator back
                if next_needs_separator(iter) {
                    out.push(' ');
                }
            } else if rendering.natural {
                // Unknown command: pass through unchanged
                out.push('\\');
                out.push_str(name);
                if next_needs_separator(iter) {
                    out.push(' ');
                }
            } else {
                out.push_str(name);
                if next_needs_separator(iter) {
                    out.push(' ');
                }
            }
        }
    }
}

fn render_fraction(numerator: &str, denominator: &str, rendering: Rendering, out: &mut String) {
    if rendering.natural {
        out.push('(');
        out.push_str(numerator);
        out.push_str(")/(");
        out.push_str(denominator);
        out.push(')');
        return;
    }

    if is_simple_term(numerator) && is_simple_term(denominator) {
        if rendering.division_sign {
            out.push_str(numerator);
            out.push_str(" ÷ ");
            out.push_str(denominator);
        } else {
            out.push_str(numerator);
            out.push('/');
            out.push_str(denominator);
        }
        return;
    }

    // Keep the grouping visible for compound operands
    if is_simple_term(numerator) {
        out.push_str(numerator);
    } else {
        out.push('(');
        out.push_str(numerator);
        out.push(')');
    }
    out.push('/');
    if is_simple_term(denominator) {
        out.push_str(denominator);
    } else {
        out.push('(');
        out.push_str(denominator);
        out.push(')');
    }
}

fn render_script<I>(marker: char, iter: &mut Peekable<I>, rendering: Rendering, out: &mut String)
where
    I: Iterator<Item = MathToken>,
{
    let inner = render_tokens(read_argument(iter), rendering);
    if inner.is_empty() {
        out.push(marker);
        return;
    }

    if marker == '^' && !rendering.natural && rendering.unicode {
        if let Some(superscript) = unicode_superscript(&inner) {
            out.push_str(&superscript);
            return;
        }
    }

    out.push(marker);
    if is_flat_script(&inner) {
        out.push_str(&inner);
    } else {
        out.push('(');
        out.push_str(&inner);
        out.push(')');
    }
}

/// Flat script operand: optional minus sign plus alphanumerics.
fn is_flat_script(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    !body.is_empty() && body.chars().all(|c| c.is_alphanumeric())
}

/// Short operand that reads fine without parentheses.
fn is_simple_term(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    let flat = s.strip_prefix('-').unwrap_or(s);
    !flat.is_empty() && flat.chars().count() <= 3 && flat.chars().all(|c| c.is_alphanumeric())
}

/// Superscript form of a signed digit run, e.g. `-12` -> `⁻¹²`.
fn unicode_superscript(s: &str) -> Option<String> {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    let mut out = String::new();
    let body = match s.strip_prefix('-') {
        Some(rest) => {
            out.push('⁻');
            rest
        }
        None => s,
    };
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    for b in body.bytes() {
        out.push(DIGITS[(b - b'0') as usize]);
    }
    Some(out)
}

fn next_needs_separator<I>(iter: &mut Peekable<I>) -> bool
where
    I: Iterator<Item = MathToken>,
{
    match iter.peek() {
        Some(MathToken::Char(c)) => c.is_alphanumeric(),
        Some(MathToken::Command(_)) => true,
        _ => false,
    }
}

fn cleanup(out: String) -> String {
    let mut result = out;
    while result.contains("  ") {
        result = result.replace("  ", " ");
    }
    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fraction_to_natural() {
        assert_eq!(to_natural("\\frac{a}{b}"), "(a)/(b)");
        assert_eq!(to_natural("\\frac{x+1}{2}"), "(x+1)/(2)");
    }

    #[test]
    fn test_sqrt_to_natural() {
        assert_eq!(to_natural("\\sqrt{9}"), "sqrt(9)");
        assert_eq!(to_natural("\\sqrt{\\frac{a}{b}}"), "sqrt((a)/(b))");
    }

    #[test]
    fn test_scripts_to_natural() {
        assert_eq!(to_natural("x^{2}"), "x^2");
        assert_eq!(to_natural("x^{-1}"), "x^-1");
        assert_eq!(to_natural("x^{a+b}"), "x^(a+b)");
        assert_eq!(to_natural("x_{n}"), "x_n");
        assert_eq!(to_natural("x^2"), "x^2");
    }

    #[test]
    fn test_symbols_to_natural() {
        assert_eq!(to_natural("\\geq"), ">=");
        assert_eq!(to_natural("\\alpha"), "alpha");
        assert_eq!(to_natural("\\infty"), "infinity");
        assert_eq!(to_natural("\\pi r^{2}"), "pi r^2");
        assert_eq!(to_natural("x \\times y"), "x * y");
    }

    #[test]
    fn test_commands_keep_token_separation() {
        // The lexer swallows the space in "\pi r"; the rendering must
        // put the separator back
        assert_eq!(to_natural("\\pi r"), "pi r");
        assert_eq!(to_natural("\\alpha\\beta"), "alpha beta");
    }

    #[test]
    fn test_unknown_command_passes_through() {
        assert_eq!(to_natural("\\oint"), "\\oint");
        assert_eq!(to_natural("\\oint x"), "\\oint x");
    }

    #[test]
    fn test_presentation_commands_dropped() {
        assert_eq!(to_natural("\\left(\\frac{a}{b}\\right)"), "((a)/(b))");
        assert_eq!(to_natural("a \\, b"), "a b");
    }

    #[test]
    fn test_plain_fraction() {
        assert_eq!(to_plain("\\frac{1}{2}"), "1/2");
        assert_eq!(to_plain("\\frac{x+1}{2}"), "(x+1)/2");
    }

    #[test]
    fn test_plain_division_sign() {
        let options = PlainOptions {
            division_sign: true,
            ..Default::default()
        };
        assert_eq!(to_plain_with_options("\\frac{1}{2}", &options), "1 ÷ 2");
        // Compound operands keep the slash form
        assert_eq!(
            to_plain_with_options("\\frac{x+1}{2}", &options),
            "(x+1)/2"
        );
    }

    #[test]
    fn test_plain_symbols() {
        assert_eq!(to_plain("x \\geq 2"), "x ≥ 2");
        assert_eq!(to_plain("\\pi"), "π");
        assert_eq!(to_plain("x \\neq \\infty"), "x ≠ ∞");
        assert_eq!(to_plain("a \\times b"), "a × b");
    }

    #[test]
    fn test_plain_superscripts() {
        assert_eq!(to_plain("x^{2}"), "x²");
        assert_eq!(to_plain("x^{-1}"), "x⁻¹");
        assert_eq!(to_plain("x^{a}"), "x^a");
    }

    #[test]
    fn test_plain_sqrt() {
        assert_eq!(to_plain("\\sqrt{9}"), "√9");
        assert_eq!(to_plain("\\sqrt{x+1}"), "√(x+1)");
    }

    #[test]
    fn test_plain_ascii_options() {
        let options = PlainOptions::ascii();
        assert_eq!(to_plain_with_options("\\pi", &options), "pi");
        assert_eq!(to_plain_with_options("x \\geq 2", &options), "x >= 2");
        assert_eq!(to_plain_with_options("\\sqrt{9}", &options), "sqrt(9)");
    }

    #[test]
    fn test_plain_strips_display_delimiters() {
        assert_eq!(to_plain("\\[x = \\frac{1}{2}\\]"), "x = 1/2");
        assert_eq!(to_plain("$x$"), "x");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_natural(""), "");
        assert_eq!(to_plain(""), "");
    }

    #[test]
    fn test_unbalanced_groups_degrade() {
        assert_eq!(to_natural("\\frac{1}{2"), "(1)/(2)");
        assert_eq!(to_natural("}x{"), "x");
    }
}
