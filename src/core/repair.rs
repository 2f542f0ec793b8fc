//! Escape-prefix repair for model-emitted LaTeX.
//!
//! Upstream model output loses backslashes in transit (`\f` becomes a
//! form feed, leaving `rac{-4}{2}`; other commands arrive bare, like
//! `sqrt{9}` or `x neq 2`). Repair restores the escape prefix on the
//! fixed keyword set without ever double-escaping, so it composes with
//! itself: `repair(repair(x)) == repair(x)`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::segment::matching_brace;
use crate::data::patterns::COMMAND_REGISTRY;
use crate::utils::report::{DegradeKind, DegradeReport, Recorder};

lazy_static! {
    /// Word-boundary alternation over every registered keyword, longest
    /// first so a keyword is never claimed by a shorter suffix of
    /// itself. The regex only locates trigger words; the escape check
    /// and all group scanning stay explicit.
    static ref KEYWORD_RE: Regex = {
        let alternation: Vec<&str> = COMMAND_REGISTRY.keys().copied().collect();
        Regex::new(&format!(r"\b(?:{})\b", alternation.join("|")))
            .expect("keyword alternation compiles")
    };
}

/// Restore missing escape prefixes on known command keywords.
pub fn repair(text: &str) -> String {
    let mut recorder = Recorder::new();
    repair_inner(text, &mut recorder)
}

/// Like [`repair`], additionally reporting every fix applied.
pub fn repair_with_report(text: &str) -> (String, DegradeReport) {
    let mut recorder = Recorder::new();
    let repaired = repair_inner(text, &mut recorder);
    (repaired, recorder.into_report("repair"))
}

fn repair_inner(text: &str, recorder: &mut Recorder) -> String {
    let rebuilt = rebuild_dangling_fractions(text, recorder);
    escape_bare_keywords(&rebuilt, recorder)
}

/// Rebuild `rac{..}{..}` as `\frac{..}{..}`.
///
/// `rac` is what remains of `\frac` once the form feed is stripped. It
/// is only rebuilt when it starts a standalone token (never inside
/// `frac`, which the longest-first keyword pass owns) and both argument
/// groups close; anything else is left for downstream degradation.
fn rebuild_dangling_fractions(text: &str, recorder: &mut Recorder) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut rest = 0usize;
    let mut search = 0usize;

    while let Some(found) = text[search..].find("rac{") {
        let start = search + found;
        search = start + 1;

        let standalone = match text[..start].chars().next_back() {
            None => true,
            Some(prev) => !prev.is_alphanumeric() && prev != '\\',
        };
        if !standalone {
            continue;
        }

        let open = start + 3;
        let Some(first_close) = matching_brace(text, open) else {
            continue;
        };
        if !text[first_close + 1..].starts_with('{') {
            continue;
        }
        let Some(second_close) = matching_brace(text, first_close + 1) else {
            continue;
        };

        out.push_str(&text[rest..start]);
        out.push_str("\\frac");
        out.push_str(&text[open..=second_close]);
        recorder.record(
            DegradeKind::RepairApplied,
            Some("frac".to_string()),
            "rebuilt dangling fraction",
            Some(text[start..=second_close].to_string()),
        );
        rest = second_close + 1;
        search = second_close + 1;
    }

    out.push_str(&text[rest..]);
    out
}

/// Prefix a backslash onto bare keyword tokens.
///
/// A match already preceded by the escape character is left alone, which
/// is what makes the whole pass idempotent.
fn escape_bare_keywords(text: &str, recorder: &mut Recorder) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut rest = 0usize;

    for found in KEYWORD_RE.find_iter(text) {
        if text[..found.start()].ends_with('\\') {
            continue;
        }
        out.push_str(&text[rest..found.start()]);
        out.push('\\');
        out.push_str(found.as_str());
        recorder.record(
            DegradeKind::RepairApplied,
            Some(found.as_str().to_string()),
            "restored missing escape prefix",
            Some(found.as_str().to_string()),
        );
        rest = found.end();
    }

    out.push_str(&text[rest..]);
    out
}
