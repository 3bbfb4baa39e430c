use anyhow::Result;

use super::super::args::LanguagesCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_warning;
use crate::core::LensContext;

pub fn languages(cmd: LanguagesCommand) -> Result<ExitStatus> {
    let common = &cmd.common;
    let ctx = LensContext::new(&common.start_dir(), &common.overrides())?;

    let languages = ctx.languages();
    if languages.is_empty() {
        print_warning(&format!(
            "no language directories found under '{}'",
            ctx.config.locales_path
        ));
        return Ok(ExitStatus::Success);
    }

    for language in languages {
        println!("{}", language);
    }
    Ok(ExitStatus::Success)
}
