//! Mathscribe CLI - math-notation repair, segmentation, and dialect conversion

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use mathscribe::{
    normalize, repair_with_report, sanitize, segment_with_report, to_latex, to_natural, to_plain,
    to_plain_with_options, DegradeReport, EngineError, EngineResult, PlainOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mathscribe")]
#[command(version)]
#[command(about = "Mathscribe - math-notation repair, segmentation, and dialect conversion", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Transformation to apply
    #[arg(short, long, value_enum, default_value_t = Mode::Normalize)]
    mode: Mode,

    /// Write the degradation report JSON to this path (repair/segment modes)
    #[arg(long)]
    report: Option<String>,

    /// ASCII-only plain output (to-plain mode)
    #[arg(long)]
    ascii: bool,

    /// Render simple fractions with a division sign (to-plain mode)
    #[arg(long)]
    division_sign: bool,

    /// Use colored diagnostics on stderr
    #[arg(long, default_value_t = true)]
    color: bool,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Strip control characters and trim
    Sanitize,
    /// Restore missing escape prefixes
    Repair,
    /// Sanitize + repair
    Normalize,
    /// Split into text/formula segments (JSON output)
    Segment,
    /// Natural notation to LaTeX
    ToLatex,
    /// LaTeX to natural notation
    ToNatural,
    /// LaTeX to a human-readable one-line string
    ToPlain,
}

#[cfg(feature = "cli")]
fn main() -> EngineResult<()> {
    let cli = Cli::parse();

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut degrade_report: Option<DegradeReport> = None;

    let result = match cli.mode {
        Mode::Sanitize => sanitize(&input),
        Mode::Repair => {
            let (repaired, report) = repair_with_report(&input);
            degrade_report = Some(report);
            repaired
        }
        Mode::Normalize => normalize(&input),
        Mode::Segment => {
            let (document, report) = segment_with_report(&input);
            degrade_report = Some(report);
            serde_json::to_string_pretty(&document.segments)
                .map_err(|e| EngineError::internal(e.to_string()))?
        }
        Mode::ToLatex => to_latex(&input),
        Mode::ToNatural => to_natural(&input),
        Mode::ToPlain => {
            if cli.ascii || cli.division_sign {
                let options = PlainOptions {
                    unicode_symbols: !cli.ascii,
                    division_sign: cli.division_sign,
                };
                to_plain_with_options(&input, &options)
            } else {
                to_plain(&input)
            }
        }
    };

    if let Some(ref report) = degrade_report {
        if let Some(ref path) = cli.report {
            let serialized = serde_json::to_string_pretty(report)
                .map_err(|e| EngineError::internal(e.to_string()))?;
            fs::write(path, serialized)?;
        }
        for diagnostic in report.diagnostics() {
            if cli.color {
                eprintln!("{}{}\x1b[0m", diagnostic.color_code(), diagnostic);
            } else {
                eprintln!("{}", diagnostic);
            }
        }
    }

    // Output
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install mathscribe --features cli");
    eprintln!("  mathscribe [OPTIONS] [INPUT_FILE]");
}
