use anyhow::{Context, Result, anyhow};

use super::super::args::HoverCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_warning;
use crate::{
    core::{LensContext, LineColumn, locate::SyntaxHost},
    present::hover_at,
};

pub fn hover(cmd: HoverCommand) -> Result<ExitStatus> {
    let common = &cmd.common;
    let ctx = LensContext::new(&common.start_dir(), &common.overrides())?;

    let path = cmd
        .file
        .canonicalize()
        .with_context(|| format!("Path not found: {:?}", cmd.file))?;
    let parsed = ctx.parse_file(&path)?;
    let position = LineColumn {
        line: cmd.line,
        column: cmd.column,
    };
    let offset = parsed
        .source()
        .offset_of(position)
        .ok_or_else(|| anyhow!("Position {} is outside of {:?}", position, cmd.file))?;

    let Some(doc) = hover_at(&parsed, offset, ctx.store(), &ctx.config) else {
        if ctx.languages().is_empty() {
            print_warning(&format!(
                "no language directories found under '{}'",
                ctx.config.locales_path
            ));
        } else {
            print_warning(&format!(
                "no translation call at {}:{}",
                ctx.display_path(&path),
                position
            ));
        }
        return Ok(ExitStatus::Failure);
    };

    if cmd.html {
        println!("{}", doc.render_html());
    } else {
        print!("{}", doc.render_text());
    }
    Ok(ExitStatus::Success)
}
