//! Token definitions for the LaTeX-side converters.
//!
//! The converters work over a token stream rather than raw characters so
//! that nested braces and macro arguments are handled the way TeX
//! groups them.

use std::fmt;

/// The smallest unit the LaTeX-side converters operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathToken {
    /// A control sequence like `\frac`. The string does NOT include the
    /// leading backslash.
    Command(String),

    /// Begin group token `{`
    BeginGroup,

    /// End group token `}`
    EndGroup,

    /// Superscript `^`
    Superscript,

    /// Subscript `_`
    Subscript,

    /// A regular character
    Char(char),

    /// Whitespace run, normalized to a single space
    Space,
}

impl MathToken {
    pub fn is_begin_group(&self) -> bool {
        matches!(self, MathToken::BeginGroup)
    }

    pub fn is_space(&self) -> bool {
        matches!(self, MathToken::Space)
    }

    /// Returns the command name if this is a Command token
    pub fn as_command(&self) -> Option<&str> {
        match self {
            MathToken::Command(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for MathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathToken::Command(name) => write!(f, "\\{}", name),
            MathToken::BeginGroup => write!(f, "{{"),
            MathToken::EndGroup => write!(f, "}}"),
            MathToken::Superscript => write!(f, "^"),
            MathToken::Subscript => write!(f, "_"),
            MathToken::Char(c) => write!(f, "{}", c),
            MathToken::Space => write!(f, " "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        assert_eq!(format!("{}", MathToken::Command("frac".into())), "\\frac");
        assert_eq!(format!("{}", MathToken::BeginGroup), "{");
        assert_eq!(format!("{}", MathToken::Char('x')), "x");
        assert_eq!(format!("{}", MathToken::Superscript), "^");
    }

    #[test]
    fn test_as_command() {
        assert_eq!(MathToken::Command("pi".into()).as_command(), Some("pi"));
        assert_eq!(MathToken::Char('p').as_command(), None);
    }
}
