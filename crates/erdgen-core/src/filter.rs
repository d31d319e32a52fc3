use crate::config::FilterConfig;

/// Decide whether a model name may appear in the diagram.
///
/// Exclusions win over `only`; an empty `only` list restricts nothing. The
/// check runs on the fully-qualified name, before any sanitization. Blank
/// names are never eligible.
pub fn is_eligible(name: &str, config: &FilterConfig) -> bool {
    if name.trim().is_empty() {
        return false;
    }

    if config.exclude.iter().any(|pattern| pattern.matches(name)) {
        return false;
    }

    config.only.is_empty() || config.only.iter().any(|pattern| pattern.matches(name))
}
