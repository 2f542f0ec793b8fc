//! Formula segmentation.
//!
//! Splits mixed prose/formula text into an ordered sequence of `Text`
//! and `Formula` segments for rendering. Formula spans are located by
//! literal triggers (`\frac{`, `sqrt{`, the inline-math pair) and then
//! extended with a depth-counted scan over the braces, so nested
//! argument groups span correctly — a regex alone cannot express
//! unbounded nesting depth.

use std::ops::Range;

use serde::Serialize;

use crate::data::patterns::{Arity, INLINE_MATH_CLOSE, INLINE_MATH_OPEN, SEGMENT_TRIGGERS};
use crate::utils::report::{DegradeKind, DegradeReport, Recorder};

/// Segment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Verbatim passthrough
    Text,
    /// Math expression in the LaTeX dialect, ready for a typesetter
    Formula,
}

/// A contiguous span of the input, classified.
///
/// `span` addresses the original input by byte range and reconstructs it
/// losslessly. `content` is what downstream consumers render: identical
/// to the raw slice for `Text` and escaped-trigger formulas, normalized
/// (escape prefix restored, inline delimiters stripped) otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub span: Range<usize>,
    pub content: String,
}

impl Segment {
    fn text(span: Range<usize>, content: &str) -> Self {
        Segment {
            kind: SegmentKind::Text,
            span,
            content: content.to_string(),
        }
    }

    pub fn is_formula(&self) -> bool {
        self.kind == SegmentKind::Formula
    }
}

/// Ordered, non-overlapping segmentation of one input string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub segments: Vec<Segment>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Concatenation of the raw spans over the original input.
    /// Equals `source` for every input.
    pub fn reconstruct(&self, source: &str) -> String {
        self.segments
            .iter()
            .map(|s| &source[s.span.clone()])
            .collect()
    }

    /// Concatenation of segment content. Equals the input whenever the
    /// input was already normalized and free of inline delimiters.
    pub fn content(&self) -> String {
        self.segments.iter().map(|s| s.content.as_str()).collect()
    }
}

/// Find the byte index of the brace matching the one at `open`.
///
/// Single left-to-right scan with an integer depth counter; `None` when
/// the group never closes.
pub(crate) fn find_matching_delim(
    text: &str,
    open_idx: usize,
    open: char,
    close: char,
) -> Option<usize> {
    let mut depth = 0i32;
    for (off, c) in text[open_idx..].char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(open_idx + off);
            }
        }
    }
    None
}

pub(crate) fn matching_brace(text: &str, open_idx: usize) -> Option<usize> {
    find_matching_delim(text, open_idx, '{', '}')
}

/// A formula span proposed by one trigger pattern.
#[derive(Debug, Clone)]
struct Candidate {
    start: usize,
    end: usize,
    content: String,
    escaped: bool,
    keyword: &'static str,
}

/// Split `text` into alternating `Text`/`Formula` segments.
pub fn segment(text: &str) -> Document {
    let mut recorder = Recorder::new();
    segment_inner(text, &mut recorder)
}

/// Like [`segment`], additionally reporting dropped and degraded
/// candidates.
pub fn segment_with_report(text: &str) -> (Document, DegradeReport) {
    let mut recorder = Recorder::new();
    let document = segment_inner(text, &mut recorder);
    (document, recorder.into_report("segment"))
}

fn segment_inner(text: &str, recorder: &mut Recorder) -> Document {
    if text.is_empty() {
        return Document::default();
    }

    let mut candidates = collect_trigger_candidates(text, recorder);
    candidates.extend(collect_inline_candidates(text, recorder));

    // Overlap resolution: escaped form beats unescaped, then the longer
    // match, then the earlier start. Claimed spans exclude the rest.
    candidates.sort_by(|a, b| {
        b.escaped
            .cmp(&a.escaped)
            .then_with(|| (b.end - b.start).cmp(&(a.end - a.start)))
            .then_with(|| a.start.cmp(&b.start))
    });

    let mut claimed: Vec<(usize, usize)> = Vec::new();
    let mut survivors: Vec<Candidate> = Vec::new();
    for candidate in candidates {
        let overlaps = claimed
            .iter()
            .any(|&(s, e)| candidate.start < e && s < candidate.end);
        if overlaps {
            recorder.record(
                DegradeKind::OverlapDiscard,
                Some(candidate.keyword.to_string()),
                "candidate overlaps a higher-priority match",
                Some(text[candidate.start..candidate.end].to_string()),
            );
            continue;
        }
        claimed.push((candidate.start, candidate.end));
        survivors.push(candidate);
    }
    survivors.sort_by_key(|c| c.start);

    let mut segments = Vec::with_capacity(survivors.len() * 2 + 1);
    let mut cursor = 0usize;
    for candidate in survivors {
        if candidate.start > cursor {
            segments.push(Segment::text(
                cursor..candidate.start,
                &text[cursor..candidate.start],
            ));
        }
        segments.push(Segment {
            kind: SegmentKind::Formula,
            span: candidate.start..candidate.end,
            content: candidate.content,
        });
        cursor = candidate.end;
    }
    if cursor < text.len() {
        segments.push(Segment::text(cursor..text.len(), &text[cursor..]));
    }

    Document { segments }
}

/// Collect candidates for the brace-delimited command triggers.
fn collect_trigger_candidates(text: &str, recorder: &mut Recorder) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for trigger in SEGMENT_TRIGGERS.iter() {
        let mut search = 0usize;
        while let Some(found) = text[search..].find(trigger.literal) {
            let start = search + found;
            search = start + 1;

            if !trigger.escaped && !unescaped_trigger_allowed(text, start, trigger.keyword) {
                continue;
            }

            // The literal ends with the opening brace of the first group
            let open = start + trigger.literal.len() - 1;
            let Some(first_close) = matching_brace(text, open) else {
                recorder.record(
                    DegradeKind::UnterminatedGroup,
                    Some(trigger.keyword.to_string()),
                    "no matching close brace; trigger kept as plain text",
                    Some(snippet_at(text, start)),
                );
                continue;
            };

            let mut end = first_close + 1;
            if trigger.arity == Arity::Two {
                if text[end..].starts_with('{') {
                    match matching_brace(text, end) {
                        Some(second_close) => end = second_close + 1,
                        None => {
                            recorder.record(
                                DegradeKind::MissingSecondGroup,
                                Some(trigger.keyword.to_string()),
                                "second group never closes; claiming the first only",
                                Some(snippet_at(text, start)),
                            );
                        }
                    }
                } else {
                    recorder.record(
                        DegradeKind::MissingSecondGroup,
                        Some(trigger.keyword.to_string()),
                        "second group absent; claiming the first only",
                        Some(snippet_at(text, start)),
                    );
                }
            }

            let content = if trigger.escaped {
                text[start..end].to_string()
            } else {
                // Restore the escape prefix in the rendered content; the
                // raw span stays untouched
                format!("\\{}{}", trigger.keyword, &text[open..end])
            };

            candidates.push(Candidate {
                start,
                end,
                content,
                escaped: trigger.escaped,
                keyword: trigger.keyword,
            });
        }
    }

    candidates
}

/// Collect candidates for the inline-math delimiter pair.
fn collect_inline_candidates(text: &str, recorder: &mut Recorder) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut search = 0usize;

    while let Some(found) = text[search..].find(INLINE_MATH_OPEN) {
        let start = search + found;
        let inner_start = start + INLINE_MATH_OPEN.len();
        match text[inner_start..].find(INLINE_MATH_CLOSE) {
            Some(rel_close) => {
                let inner_end = inner_start + rel_close;
                let end = inner_end + INLINE_MATH_CLOSE.len();
                candidates.push(Candidate {
                    start,
                    end,
                    // The typesetter receives the bare expression
                    content: text[inner_start..inner_end].to_string(),
                    escaped: true,
                    keyword: "inline-math",
                });
                search = end;
            }
            None => {
                recorder.record(
                    DegradeKind::UnterminatedGroup,
                    Some("inline-math".to_string()),
                    "closing delimiter missing; trigger kept as plain text",
                    Some(snippet_at(text, start)),
                );
                search = inner_start;
            }
        }
    }

    candidates
}

/// An unescaped trigger must begin a standalone token: not the tail of a
/// longer word (`rac{` inside `frac{`) and not already escaped.
fn unescaped_trigger_allowed(text: &str, start: usize, keyword: &str) -> bool {
    match text[..start].chars().next_back() {
        None => true,
        Some('\\') => false,
        // Only the fraction trigger is a strict suffix of another
        // keyword; reject any word character in front of it
        Some(prev) if keyword == "frac" => !prev.is_alphanumeric(),
        Some(_) => true,
    }
}

fn snippet_at(text: &str, start: usize) -> String {
    let mut end = (start + 24).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }
    text[start..end].to_string()
}
