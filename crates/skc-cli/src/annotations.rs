//! GitHub workflow command annotations.
//!
//! Lines in the `::error::`/`::warning::` form are recognized by the build
//! system and surfaced on the workflow run summary.

/// Emit an error annotation.
pub fn error(message: &str) {
    println!("{}", format_command("error", message));
}

/// Emit a warning annotation.
pub fn warning(message: &str) {
    println!("{}", format_command("warning", message));
}

fn format_command(level: &str, message: &str) -> String {
    format!("::{level}::{message}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::format_command;

    #[test]
    fn workflow_command_format() {
        assert_eq!(
            format_command("error", "One or more compilations failed"),
            "::error::One or more compilations failed"
        );
        assert_eq!(
            format_command("warning", "quota reached"),
            "::warning::quota reached"
        );
    }
}
