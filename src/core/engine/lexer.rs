//! Lexer for the LaTeX dialect.
//!
//! Follows TeX tokenization where it matters for math expressions:
//! control sequence recognition, space swallowing after alphabetic
//! control sequences, whitespace normalization.

use super::token::MathToken;

pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    /// Track if we just emitted a control sequence (for space swallowing)
    after_command: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars().peekable(),
            after_command: false,
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn next_char(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Read a control sequence name (letters only, or single non-letter)
    fn read_command(&mut self) -> String {
        let mut name = String::new();

        if let Some(c) = self.peek_char() {
            if c.is_ascii_alphabetic() {
                while let Some(c) = self.peek_char() {
                    if c.is_ascii_alphabetic() {
                        name.push(c);
                        self.next_char();
                    } else {
                        break;
                    }
                }
                // TeX swallows spaces after alphabetic control sequences
                self.after_command = true;
            } else {
                name.push(c);
                self.next_char();
                self.after_command = false;
            }
        }

        name
    }

    fn next_token(&mut self) -> Option<MathToken> {
        if self.after_command {
            self.skip_whitespace();
            self.after_command = false;
        }

        let c = self.next_char()?;

        match c {
            '\\' => {
                let name = self.read_command();
                if name.is_empty() {
                    // Lone backslash at end of input
                    Some(MathToken::Char('\\'))
                } else {
                    Some(MathToken::Command(name))
                }
            }

            '{' => Some(MathToken::BeginGroup),
            '}' => Some(MathToken::EndGroup),
            '^' => Some(MathToken::Superscript),
            '_' => Some(MathToken::Subscript),

            c if c.is_whitespace() => {
                self.skip_whitespace();
                Some(MathToken::Space)
            }

            _ => Some(MathToken::Char(c)),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = MathToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Convenience function to tokenize a string
pub fn tokenize(input: &str) -> Vec<MathToken> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokenize() {
        let tokens = tokenize("x+1");
        assert_eq!(
            tokens,
            vec![
                MathToken::Char('x'),
                MathToken::Char('+'),
                MathToken::Char('1'),
            ]
        );
    }

    #[test]
    fn test_command_with_groups() {
        let tokens = tokenize("\\frac{a}{b}");
        assert_eq!(tokens[0], MathToken::Command("frac".into()));
        assert_eq!(tokens[1], MathToken::BeginGroup);
        assert_eq!(tokens[2], MathToken::Char('a'));
        assert_eq!(tokens[3], MathToken::EndGroup);
    }

    #[test]
    fn test_space_swallowing_after_command() {
        let tokens = tokenize("\\frac  {a}");
        assert_eq!(tokens[0], MathToken::Command("frac".into()));
        assert_eq!(tokens[1], MathToken::BeginGroup);
    }

    #[test]
    fn test_whitespace_normalized() {
        let tokens = tokenize("a   b");
        assert_eq!(
            tokens,
            vec![
                MathToken::Char('a'),
                MathToken::Space,
                MathToken::Char('b'),
            ]
        );
    }

    #[test]
    fn test_scripts() {
        let tokens = tokenize("x^2_n");
        assert_eq!(
            tokens,
            vec![
                MathToken::Char('x'),
                MathToken::Superscript,
                MathToken::Char('2'),
                MathToken::Subscript,
                MathToken::Char('n'),
            ]
        );
    }

    #[test]
    fn test_single_char_command() {
        let tokens = tokenize("\\( \\)");
        assert_eq!(tokens[0], MathToken::Command("(".into()));
        assert_eq!(tokens[1], MathToken::Space);
        assert_eq!(tokens[2], MathToken::Command(")".into()));
    }

    #[test]
    fn test_lone_backslash() {
        let tokens = tokenize("\\");
        assert_eq!(tokens, vec![MathToken::Char('\\')]);
    }
}
