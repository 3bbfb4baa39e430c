use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): every translation call resolved
/// - `Failure` (1): some call has no translation, or nothing to show at a hover position
/// - `Error` (2): bad configuration, unreadable or unparsable requested file
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// Completed, but with unresolved translations.
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
