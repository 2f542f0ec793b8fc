//! Command-pattern and symbol registries.
//!
//! Both registries are built once at first use and never mutated, so the
//! per-call transforms stay stateless. The command registry is
//! insertion-ordered: iteration order is match priority (longest keyword
//! first), which is what the repair pass and the segmenter rely on.

use fxhash::FxHashMap;
use indexmap::IndexMap;
use lazy_static::lazy_static;

/// Number of brace-delimited argument groups a command consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Bare symbol command, e.g. `\pi`
    Zero,
    /// Single group, e.g. `\sqrt{..}`
    One,
    /// Two consecutive groups, e.g. `\frac{..}{..}`
    Two,
}

/// One recognized LaTeX macro.
#[derive(Debug, Clone, Copy)]
pub struct CommandPattern {
    /// Command keyword without the escape prefix
    pub keyword: &'static str,
    pub arity: Arity,
}

/// A segmentation trigger: the literal substring that opens a formula
/// candidate, plus the pattern it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct TriggerPattern {
    /// Literal trigger, including the opening brace
    pub literal: &'static str,
    /// Keyword of the command this trigger resolves to
    pub keyword: &'static str,
    /// Whether the trigger carries the escape prefix
    pub escaped: bool,
    pub arity: Arity,
}

/// Inline-math delimiter pair, `\( .. \)`.
pub const INLINE_MATH_OPEN: &str = "\\(";
pub const INLINE_MATH_CLOSE: &str = "\\)";

lazy_static! {
    /// All recognized command keywords, longest first.
    ///
    /// Iteration order is the priority order used when building the
    /// repair alternation, so a keyword is never claimed by a shorter
    /// pattern that happens to be its suffix.
    pub static ref COMMAND_REGISTRY: IndexMap<&'static str, CommandPattern> = {
        let mut registry = IndexMap::new();
        let patterns = [
            CommandPattern { keyword: "approx", arity: Arity::Zero },
            CommandPattern { keyword: "lambda", arity: Arity::Zero },
            CommandPattern { keyword: "infty", arity: Arity::Zero },
            CommandPattern { keyword: "alpha", arity: Arity::Zero },
            CommandPattern { keyword: "gamma", arity: Arity::Zero },
            CommandPattern { keyword: "delta", arity: Arity::Zero },
            CommandPattern { keyword: "theta", arity: Arity::Zero },
            CommandPattern { keyword: "sigma", arity: Arity::Zero },
            CommandPattern { keyword: "omega", arity: Arity::Zero },
            CommandPattern { keyword: "times", arity: Arity::Zero },
            CommandPattern { keyword: "frac", arity: Arity::Two },
            CommandPattern { keyword: "sqrt", arity: Arity::One },
            CommandPattern { keyword: "beta", arity: Arity::Zero },
            CommandPattern { keyword: "phi", arity: Arity::Zero },
            CommandPattern { keyword: "psi", arity: Arity::Zero },
            CommandPattern { keyword: "rho", arity: Arity::Zero },
            CommandPattern { keyword: "tau", arity: Arity::Zero },
            CommandPattern { keyword: "int", arity: Arity::Zero },
            CommandPattern { keyword: "sum", arity: Arity::Zero },
            CommandPattern { keyword: "neq", arity: Arity::Zero },
            CommandPattern { keyword: "leq", arity: Arity::Zero },
            CommandPattern { keyword: "geq", arity: Arity::Zero },
            CommandPattern { keyword: "div", arity: Arity::Zero },
            CommandPattern { keyword: "mu", arity: Arity::Zero },
            CommandPattern { keyword: "pi", arity: Arity::Zero },
            CommandPattern { keyword: "pm", arity: Arity::Zero },
        ];
        for pattern in patterns {
            registry.insert(pattern.keyword, pattern);
        }
        registry
    };

    /// Formula triggers scanned by the segmenter.
    ///
    /// `rac{` is the degenerate form of `\frac{` left behind when the
    /// upstream model's `\f` is eaten as a form feed; its candidates are
    /// normalized back to the escaped form.
    pub static ref SEGMENT_TRIGGERS: Vec<TriggerPattern> = vec![
        TriggerPattern { literal: "\\frac{", keyword: "frac", escaped: true, arity: Arity::Two },
        TriggerPattern { literal: "rac{", keyword: "frac", escaped: false, arity: Arity::Two },
        TriggerPattern { literal: "\\sqrt{", keyword: "sqrt", escaped: true, arity: Arity::One },
        TriggerPattern { literal: "sqrt{", keyword: "sqrt", escaped: false, arity: Arity::One },
    ];
}

/// One palette symbol: how it is written in each dialect, split into the
/// text inserted before and after the selection, plus where the caret
/// lands (relative to the end of the prefix) on an empty selection.
#[derive(Debug, Clone, Copy)]
pub struct SymbolMapping {
    pub name: &'static str,
    pub natural_prefix: &'static str,
    pub natural_suffix: &'static str,
    pub latex_prefix: &'static str,
    pub latex_suffix: &'static str,
    pub cursor_offset: i32,
}

impl SymbolMapping {
    /// Prefix/suffix pair for the natural dialect.
    pub fn natural(&self) -> (&'static str, &'static str) {
        (self.natural_prefix, self.natural_suffix)
    }

    /// Prefix/suffix pair for the LaTeX dialect.
    pub fn latex(&self) -> (&'static str, &'static str) {
        (self.latex_prefix, self.latex_suffix)
    }
}

/// The fixed palette table. Not user-extensible at runtime.
pub static SYMBOL_TABLE: &[SymbolMapping] = &[
    SymbolMapping {
        name: "fraction",
        natural_prefix: "(",
        natural_suffix: ")/()",
        latex_prefix: "\\frac{",
        latex_suffix: "}{}",
        cursor_offset: 0,
    },
    SymbolMapping {
        name: "sqrt",
        natural_prefix: "sqrt(",
        natural_suffix: ")",
        latex_prefix: "\\sqrt{",
        latex_suffix: "}",
        cursor_offset: 0,
    },
    SymbolMapping {
        name: "power",
        natural_prefix: "^",
        natural_suffix: "",
        latex_prefix: "^{",
        latex_suffix: "}",
        cursor_offset: 0,
    },
    SymbolMapping {
        name: "pi",
        natural_prefix: "pi",
        natural_suffix: "",
        latex_prefix: "\\pi",
        latex_suffix: "",
        cursor_offset: 0,
    },
    SymbolMapping {
        name: "infinity",
        natural_prefix: "infinity",
        natural_suffix: "",
        latex_prefix: "\\infty",
        latex_suffix: "",
        cursor_offset: 0,
    },
    SymbolMapping {
        name: "integral",
        natural_prefix: "int",
        natural_suffix: "",
        latex_prefix: "\\int",
        latex_suffix: "",
        cursor_offset: 0,
    },
    SymbolMapping {
        name: "sum",
        natural_prefix: "sum",
        natural_suffix: "",
        latex_prefix: "\\sum",
        latex_suffix: "",
        cursor_offset: 0,
    },
    SymbolMapping {
        name: "times",
        natural_prefix: "*",
        natural_suffix: "",
        latex_prefix: "\\times",
        latex_suffix: "",
        cursor_offset: 0,
    },
    SymbolMapping {
        name: "divide",
        natural_prefix: "÷",
        natural_suffix: "",
        latex_prefix: "\\div",
        latex_suffix: "",
        cursor_offset: 0,
    },
    SymbolMapping {
        name: "plus-minus",
        natural_prefix: "+-",
        natural_suffix: "",
        latex_prefix: "\\pm",
        latex_suffix: "",
        cursor_offset: 0,
    },
    SymbolMapping {
        name: "leq",
        natural_prefix: "<=",
        natural_suffix: "",
        latex_prefix: "\\leq",
        latex_suffix: "",
        cursor_offset: 0,
    },
    SymbolMapping {
        name: "geq",
        natural_prefix: ">=",
        natural_suffix: "",
        latex_prefix: "\\geq",
        latex_suffix: "",
        cursor_offset: 0,
    },
    SymbolMapping {
        name: "neq",
        natural_prefix: "!=",
        natural_suffix: "",
        latex_prefix: "\\neq",
        latex_suffix: "",
        cursor_offset: 0,
    },
];

lazy_static! {
    /// Palette lookup by symbol name.
    pub static ref SYMBOL_INDEX: FxHashMap<&'static str, &'static SymbolMapping> = {
        let mut index = FxHashMap::default();
        for symbol in SYMBOL_TABLE {
            index.insert(symbol.name, symbol);
        }
        index
    };
}

/// Look up a palette symbol by name.
pub fn symbol(name: &str) -> Option<&'static SymbolMapping> {
    SYMBOL_INDEX.get(name).copied()
}
