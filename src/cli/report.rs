//! Report formatting and printing utilities.
//!
//! Annotations are printed cargo-style: a headline, a clickable
//! `--> path:line:col` location, the source line with a caret under the end
//! of the call-site, and one `=` note per language.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::present::InlineHint;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// An inline hint together with the line it annotates.
#[derive(Debug, Clone)]
pub struct HintReport {
    pub hint: InlineHint,
    pub source_line: Option<String>,
}

/// All hints of one source file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Path relative to the project root.
    pub path: String,
    pub hints: Vec<HintReport>,
}

impl FileReport {
    pub fn missing_count(&self) -> usize {
        self.hints
            .iter()
            .filter(|h| !h.hint.resolved.is_found())
            .count()
    }
}

/// Print hints to stdout.
pub fn report(files: &[FileReport]) {
    report_to(files, &mut io::stdout().lock());
}

/// Print hints to a custom writer.
pub fn report_to<W: Write>(files: &[FileReport], writer: &mut W) {
    let max_line_width = files
        .iter()
        .flat_map(|f| &f.hints)
        .map(|h| h.hint.position.line.to_string().len())
        .max()
        .unwrap_or(1);

    for file in files {
        for hint in &file.hints {
            print_hint(&file.path, hint, writer, max_line_width);
        }
    }

    print_summary(files, writer);
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed{}",
            "warning:".bold().yellow(),
            count,
            if verbose {
                String::new()
            } else {
                format!(" (use {} for details)", "-v".cyan())
            }
        );
    }
}

/// Print a one-line warning to stderr.
pub fn print_warning(message: &str) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {}",
        "warning:".bold().yellow(),
        message
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_hint<W: Write>(path: &str, report: &HintReport, writer: &mut W, max_line_width: usize) {
    let hint = &report.hint;
    let found = hint.resolved.is_found();

    if found {
        let _ = writeln!(
            writer,
            "{}: {}  {}",
            "hint".bold().cyan(),
            hint.label,
            hint.key.as_str().dimmed()
        );
    } else {
        let _ = writeln!(
            writer,
            "{}: missing translation for \"{}\"  {}",
            "warning".bold().yellow(),
            hint.key,
            hint.namespaces.to_string().dimmed().cyan()
        );
    }

    let line = hint.position.line;
    let col = hint.position.column;
    let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), path, line, col);

    if let Some(source_line) = &report.source_line {
        let caret = if found { "^".cyan() } else { "^".yellow() };
        let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = max_line_width);
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // The hint sits right after the call-site; point at its last character.
        let prefix: String = source_line.chars().take(col.saturating_sub(2)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(namespace) = &hint.resolved.matched_namespace {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "namespace:".bold(),
            namespace,
            width = max_line_width
        );
    }
    for block_line in &hint.block_lines {
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            "",
            "=".blue(),
            block_line,
            width = max_line_width
        );
    }
    let _ = writeln!(writer);
}

fn print_summary<W: Write>(files: &[FileReport], writer: &mut W) {
    let total: usize = files.iter().map(|f| f.hints.len()).sum();
    let missing: usize = files.iter().map(FileReport::missing_count).sum();
    let file_count = files.len();
    let files_word = if file_count == 1 { "file" } else { "files" };

    let msg = if missing == 0 {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Resolved {} translation call(s) in {} {}",
                total, file_count, files_word
            )
            .green()
        )
    } else {
        format!(
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} of {} translation call(s) have no translation ({} {})",
                missing, total, file_count, files_word
            )
            .red()
        )
    };
    let _ = writeln!(writer, "{}", msg);
}
