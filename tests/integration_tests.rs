//! Integration tests for the mathscribe engine surface

use mathscribe::{
    normalize, repair, repair_with_report, sanitize, segment, segment_with_report, to_latex,
    to_natural, to_plain, to_plain_with_options, PlainOptions, SegmentKind,
};

// ============================================================================
// Normalization pipeline - sanitize + repair
// ============================================================================

mod pipeline {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            "",
            "plain text",
            "  padded  ",
            "a\x0Cb",
            "\\frac{1}{2}\n\twith layout",
            "\x00\x01 control soup \x1f\x7f",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "sanitize not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_repair_is_idempotent() {
        let inputs = [
            "",
            "rac{-4}{2}",
            "sqrt{9} plus pi",
            "\\frac{a}{b} stays",
            "x neq y, a leq b, c geq d",
            "int sum infty theta alpha",
        ];
        for input in inputs {
            let once = repair(input);
            assert_eq!(repair(&once), once, "repair not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_repair_fixtures() {
        assert_eq!(repair("rac{-4}{2}"), "\\frac{-4}{2}");
        assert_eq!(repair("sqrt{9}"), "\\sqrt{9}");
        assert_eq!(repair("\\sqrt{9}"), "\\sqrt{9}");
    }

    #[test]
    fn test_form_feed_fraction_normalizes() {
        // \f eaten as a form feed is the canonical upstream corruption
        assert_eq!(normalize("\u{0c}rac{-4}{2}"), "\\frac{-4}{2}");
    }

    #[test]
    fn test_repair_report_is_serializable() {
        let (_, report) = repair_with_report("sqrt{9} and pi");
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("repair-applied"));
    }

    #[test]
    fn test_empty_inputs_are_fine_everywhere() {
        assert_eq!(sanitize(""), "");
        assert_eq!(repair(""), "");
        assert_eq!(normalize(""), "");
        assert!(segment("").is_empty());
        assert_eq!(to_latex(""), "");
        assert_eq!(to_natural(""), "");
        assert_eq!(to_plain(""), "");
    }
}

// ============================================================================
// Segmentation
// ============================================================================

mod segmentation {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parts(input: &str) -> Vec<(SegmentKind, String)> {
        segment(input)
            .iter()
            .map(|s| (s.kind, s.content.clone()))
            .collect()
    }

    #[test]
    fn test_prose_with_one_fraction() {
        assert_eq!(
            parts("Compute \\frac{1}{2} then stop"),
            vec![
                (SegmentKind::Text, "Compute ".to_string()),
                (SegmentKind::Formula, "\\frac{1}{2}".to_string()),
                (SegmentKind::Text, " then stop".to_string()),
            ]
        );
    }

    #[test]
    fn test_nested_fraction_spans_whole_expression() {
        // Depth-aware matching, not non-greedy regex
        assert_eq!(
            parts("\\frac{\\frac{1}{2}}{3}"),
            vec![(SegmentKind::Formula, "\\frac{\\frac{1}{2}}{3}".to_string())]
        );
    }

    #[test]
    fn test_completeness_over_normalized_text() {
        // After repair, content concatenation reconstructs the input
        let raw = "Add \u{0c}rac{1}{2} to sqrt{9} where x neq 0";
        let normalized = normalize(raw);
        let document = segment(&normalized);
        assert_eq!(document.content(), normalized);
    }

    #[test]
    fn test_spans_reconstruct_any_input() {
        let inputs = [
            "Compute \\frac{1}{2} then stop",
            "rac{-4}{2} unrepaired",
            "text \\(x^2\\) more \\sqrt{3}",
            "dangling \\frac{1 brace",
            "{{only braces}}",
        ];
        for input in inputs {
            let document = segment(input);
            assert_eq!(document.reconstruct(input), input);
        }
    }

    #[test]
    fn test_segments_ordered_and_nonoverlapping() {
        let input = "a \\frac{1}{2} b \\(x\\) c sqrt{3} d";
        let document = segment(input);
        let mut cursor = 0usize;
        for seg in document.iter() {
            assert!(seg.span.start >= cursor, "segments out of order");
            assert!(seg.span.end > seg.span.start, "zero-length segment");
            cursor = seg.span.end;
        }
        assert_eq!(cursor, input.len());
    }

    #[test]
    fn test_unmatched_braces_degrade_to_text() {
        let (document, report) = segment_with_report("\\frac{never closes");
        assert_eq!(document.segments.len(), 1);
        assert_eq!(document.segments[0].kind, SegmentKind::Text);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_degenerate_single_group_fraction() {
        let (document, _) = segment_with_report("\\frac{1} rest");
        assert_eq!(document.segments[0].kind, SegmentKind::Formula);
        assert_eq!(document.segments[0].content, "\\frac{1}");
    }

    #[test]
    fn test_inline_math_content_is_bare() {
        let document = segment("see \\(a+b\\) here");
        let formula = document.iter().find(|s| s.is_formula()).unwrap();
        assert_eq!(formula.content, "a+b");
    }

    #[test]
    fn test_overlap_resolution_prefers_escaped_outer_match() {
        // The inline pair encloses the fraction; exactly one formula
        let document = segment("\\(\\frac{1}{2}\\)");
        let formulas: Vec<_> = document.iter().filter(|s| s.is_formula()).collect();
        assert_eq!(formulas.len(), 1);
        assert_eq!(formulas[0].content, "\\frac{1}{2}");
    }

    #[test]
    fn test_document_serializes_for_the_renderer() {
        let document = segment("x \\sqrt{2}");
        let json = serde_json::to_string(&document.segments).unwrap();
        assert!(json.contains("\"kind\":\"formula\""));
        assert!(json.contains("\"kind\":\"text\""));
    }
}

// ============================================================================
// Dialect conversion - natural to LaTeX
// ============================================================================

mod natural_to_latex {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_powers_and_roots() {
        let result = to_latex("x^2 + sqrt(9)");
        assert!(result.contains("x^{2}"));
        assert!(result.contains("\\sqrt{9}"));
    }

    #[test]
    fn test_paren_fractions_track_depth() {
        assert_eq!(to_latex("(a)/(b)"), "\\frac{a}{b}");
        assert_eq!(to_latex("((x)/(y))/(b)"), "\\frac{\\frac{x}{y}}{b}");
    }

    #[test]
    fn test_relations_and_greek() {
        assert_eq!(to_latex("x >= 0"), "x \\geq 0");
        assert_eq!(to_latex("theta != pi"), "\\theta \\neq \\pi");
    }

    #[test]
    fn test_unrecognized_text_passes_through() {
        assert_eq!(to_latex("let y = 3"), "let y = 3");
    }
}

// ============================================================================
// Dialect conversion - LaTeX to natural / plain
// ============================================================================

mod latex_to_natural {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fraction_and_sqrt() {
        assert_eq!(to_natural("\\frac{a}{b}"), "(a)/(b)");
        assert_eq!(to_natural("\\sqrt{9}"), "sqrt(9)");
    }

    #[test]
    fn test_plain_summary_line() {
        assert_eq!(to_plain("x = \\frac{1}{2}"), "x = 1/2");
        assert_eq!(to_plain("x \\geq \\pi"), "x ≥ π");
        assert_eq!(to_plain("x^{2} + 1"), "x² + 1");
    }

    #[test]
    fn test_plain_options() {
        let division = PlainOptions {
            division_sign: true,
            ..Default::default()
        };
        assert_eq!(to_plain_with_options("\\frac{1}{2}", &division), "1 ÷ 2");

        let ascii = PlainOptions::ascii();
        assert_eq!(to_plain_with_options("\\pi \\geq 3", &ascii), "pi >= 3");
    }

    #[test]
    fn test_unknown_commands_survive() {
        assert_eq!(to_natural("\\oint f"), "\\oint f");
    }
}

// ============================================================================
// Round-trip law (flat-case class only)
// ============================================================================

mod round_trip {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flat_expressions_round_trip_exactly() {
        // Single powers, single fractions, named functions, relations,
        // Greek letters: toLatex(toNatural(e)) == e
        let flat = [
            "\\frac{a}{b}",
            "\\frac{1}{2}",
            "\\sqrt{9}",
            "x^{2}",
            "x^{-1}",
            "x_{n}",
            "\\geq",
            "\\leq",
            "\\neq",
            "\\pm",
            "\\times",
            "\\alpha",
            "\\theta",
            "\\pi",
            "\\infty",
            "\\sin",
            "\\log",
        ];
        for expr in flat {
            let natural = to_natural(expr);
            assert_eq!(
                to_latex(&natural),
                expr,
                "round trip broke for {:?} (natural form {:?})",
                expr,
                natural
            );
        }
    }

    #[test]
    fn test_nested_round_trip_is_approximate_not_lossy() {
        // Nested expressions need not reproduce byte-for-byte, but a
        // second round trip must be stable
        let expr = "\\frac{\\sqrt{x+1}}{2}";
        let once = to_latex(&to_natural(expr));
        let twice = to_latex(&to_natural(&once));
        assert_eq!(once, twice);
    }
}
