use crate::CliError;

/// Environment variable naming the runtime mode.
pub const MODE_VAR: &str = "ERDGEN_ENV";
/// The only mode in which diagrams may be generated.
pub const ALLOWED_MODE: &str = "development";

/// Current runtime mode; unset or blank means development.
pub fn current_mode() -> String {
    std::env::var(MODE_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| ALLOWED_MODE.to_string())
}

pub fn ensure_allowed(mode: &str) -> Result<(), CliError> {
    if mode == ALLOWED_MODE {
        Ok(())
    } else {
        Err(CliError::EnvironmentNotAllowed(mode.to_string()))
    }
}
