use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;

use super::super::args::HintsCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{FileReport, HintReport, print_parse_warning, report};
use crate::{
    core::{LensContext, file_scanner::scan_files, locate::SyntaxHost},
    present::collect_inline_hints,
};

pub fn hints(cmd: HintsCommand) -> Result<ExitStatus> {
    let common = &cmd.common;
    let ctx = LensContext::new(&common.start_dir(), &common.overrides())?;

    let (files, mut skipped) = collect_files(&ctx, &cmd.paths)?;

    let results: Vec<Result<FileReport>> = files
        .par_iter()
        .map(|path| annotate_file(&ctx, path))
        .collect();

    let mut reports = Vec::new();
    for result in results {
        match result {
            Ok(file) if !file.hints.is_empty() => reports.push(file),
            Ok(_) => {}
            Err(e) => {
                debug!("{:#}", e);
                skipped += 1;
            }
        }
    }

    report(&reports);
    print_parse_warning(skipped, common.verbose);

    if reports.iter().any(|f| f.missing_count() > 0) {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// Explicit paths when given, otherwise the configured scan.
///
/// Returns the files and the number of entries the scan could not read.
fn collect_files(ctx: &LensContext, paths: &[PathBuf]) -> Result<(Vec<PathBuf>, usize)> {
    if paths.is_empty() {
        let scan = ctx.scan();
        return Ok((scan.files, scan.skipped_count));
    }

    let mut files = Vec::new();
    let mut skipped = 0;
    for path in paths {
        let path = path
            .canonicalize()
            .with_context(|| format!("Path not found: {:?}", path))?;
        if path.is_dir() {
            let scan = scan_files(&path, &[], &ctx.config.ignores);
            files.extend(scan.files);
            skipped += scan.skipped_count;
        } else {
            files.push(path);
        }
    }
    files.sort();
    files.dedup();
    Ok((files, skipped))
}

fn annotate_file(ctx: &LensContext, path: &Path) -> Result<FileReport> {
    let parsed = ctx.parse_file(path)?;
    let hints = collect_inline_hints(&parsed, ctx.store(), &ctx.config)
        .into_iter()
        .map(|hint| HintReport {
            source_line: parsed
                .source()
                .line_text(hint.position.line)
                .map(str::to_string),
            hint,
        })
        .collect();

    Ok(FileReport {
        path: ctx.display_path(path),
        hints,
    })
}
