//! Symbol maps shared by the dialect converters.
//!
//! All maps are compile-time `phf` tables. Keys on the LaTeX side are
//! command names without the leading backslash, matching how the lexer
//! reports control sequences.

use phf::{phf_map, phf_set};

/// Natural-dialect words that translate to a LaTeX command.
///
/// Matched on word boundaries only; a word absent from this map passes
/// through unchanged.
pub static NATURAL_WORDS: phf::Map<&'static str, &'static str> = phf_map! {
    // Greek letters
    "alpha" => "\\alpha",
    "beta" => "\\beta",
    "gamma" => "\\gamma",
    "delta" => "\\delta",
    "theta" => "\\theta",
    "sigma" => "\\sigma",
    "omega" => "\\omega",
    "lambda" => "\\lambda",
    "mu" => "\\mu",
    "phi" => "\\phi",
    "psi" => "\\psi",
    "rho" => "\\rho",
    "tau" => "\\tau",
    "pi" => "\\pi",
    // Named functions
    "sin" => "\\sin",
    "cos" => "\\cos",
    "tan" => "\\tan",
    "log" => "\\log",
    "ln" => "\\ln",
    // Big operators
    "int" => "\\int",
    "sum" => "\\sum",
    // Misc
    "infinity" => "\\infty",
    "inf" => "\\infty",
    "approx" => "\\approx",
};

/// Natural-dialect operator tokens, tried longest-first at each scan
/// position. Order matters: a prefix of a longer token must come later.
pub static NATURAL_OPERATORS: &[(&str, &str)] = &[
    (">=", "\\geq"),
    ("<=", "\\leq"),
    ("!=", "\\neq"),
    ("+-", "\\pm"),
    ("≥", "\\geq"),
    ("≤", "\\leq"),
    ("≠", "\\neq"),
    ("±", "\\pm"),
    ("÷", "\\div"),
    ("×", "\\times"),
    ("π", "\\pi"),
    ("∞", "\\infty"),
    ("·", "\\cdot"),
    ("*", "\\times"),
];

/// LaTeX command -> natural-dialect token.
///
/// Commands absent from this map (and not handled structurally, like
/// `frac` and `sqrt`) pass through verbatim.
pub static TEX_TO_NATURAL: phf::Map<&'static str, &'static str> = phf_map! {
    "alpha" => "alpha",
    "beta" => "beta",
    "gamma" => "gamma",
    "delta" => "delta",
    "theta" => "theta",
    "sigma" => "sigma",
    "omega" => "omega",
    "lambda" => "lambda",
    "mu" => "mu",
    "phi" => "phi",
    "psi" => "psi",
    "rho" => "rho",
    "tau" => "tau",
    "pi" => "pi",
    "sin" => "sin",
    "cos" => "cos",
    "tan" => "tan",
    "log" => "log",
    "ln" => "ln",
    "int" => "int",
    "sum" => "sum",
    "infty" => "infinity",
    "approx" => "approx",
    "geq" => ">=",
    "leq" => "<=",
    "neq" => "!=",
    "pm" => "+-",
    "times" => "*",
    "cdot" => "*",
    "div" => "÷",
};

/// LaTeX command -> human-readable Unicode form, used by the plain
/// rendering for one-line answers.
pub static TEX_TO_PLAIN: phf::Map<&'static str, &'static str> = phf_map! {
    "alpha" => "α",
    "beta" => "β",
    "gamma" => "γ",
    "delta" => "δ",
    "theta" => "θ",
    "sigma" => "σ",
    "omega" => "ω",
    "lambda" => "λ",
    "mu" => "μ",
    "phi" => "φ",
    "psi" => "ψ",
    "rho" => "ρ",
    "tau" => "τ",
    "pi" => "π",
    "infty" => "∞",
    "approx" => "≈",
    "geq" => "≥",
    "leq" => "≤",
    "neq" => "≠",
    "pm" => "±",
    "times" => "×",
    "cdot" => "·",
    "div" => "÷",
    "int" => "∫",
    "sum" => "Σ",
    "sin" => "sin",
    "cos" => "cos",
    "tan" => "tan",
    "log" => "log",
    "ln" => "ln",
};

/// ASCII fallbacks for the plain rendering when Unicode output is
/// disabled. Commands missing here fall back to their natural form.
pub static TEX_TO_PLAIN_ASCII: phf::Map<&'static str, &'static str> = phf_map! {
    "infty" => "infinity",
    "approx" => "~",
    "geq" => ">=",
    "leq" => "<=",
    "neq" => "!=",
    "pm" => "+/-",
    "times" => "*",
    "cdot" => "*",
    "div" => "/",
    "pi" => "pi",
    "int" => "int",
    "sum" => "sum",
};

/// Spacing and presentation-only commands dropped by the natural and
/// plain renderings.
pub static PRESENTATION_COMMANDS: phf::Set<&'static str> = phf_set! {
    "left",
    "right",
    "displaystyle",
    "textstyle",
    "quad",
    "qquad",
    ",",
    ";",
    ":",
    "!",
};
