//! Interactive questions for options missing from the command line.
//!
//! Prompts only run on a terminal, in builds with the `interactive` feature,
//! and when `--non-interactive` was not passed. Everything else falls back
//! to configured defaults.

use std::fmt::Display;
use std::io::IsTerminal as _;

use crate::error::CliResult;

/// Whether this run may ask questions.
pub fn available(non_interactive: bool) -> bool {
    cfg!(feature = "interactive")
        && !non_interactive
        && std::io::stdin().is_terminal()
        && std::io::stderr().is_terminal()
}

/// Ask for a project name, re-prompting until it passes the name rules.
pub fn project_name() -> CliResult<String> {
    #[cfg(feature = "interactive")]
    {
        use backforge_core::domain::DomainValidator;
        use dialoguer::{Input, theme::ColorfulTheme};

        let name = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Project name")
            .validate_with(|input: &String| -> Result<(), String> {
                DomainValidator::validate_project_name(input).map_err(|e| e.to_string())
            })
            .interact_text()?;
        Ok(name)
    }

    #[cfg(not(feature = "interactive"))]
    {
        Err(crate::error::CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

/// Pick one of `choices`, pre-selecting `default`.
pub fn choose<T>(prompt: &str, choices: &[T], default: T) -> CliResult<T>
where
    T: Copy + PartialEq + Display,
{
    #[cfg(feature = "interactive")]
    {
        use dialoguer::{Select, theme::ColorfulTheme};

        let labels: Vec<String> = choices.iter().map(ToString::to_string).collect();
        let selected = choices.iter().position(|c| *c == default).unwrap_or(0);
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(&labels)
            .default(selected)
            .interact()?;
        Ok(choices.get(index).copied().unwrap_or(default))
    }

    #[cfg(not(feature = "interactive"))]
    {
        let _ = (prompt, choices, default);
        Err(crate::error::CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

/// Yes/no question.
pub fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
    #[cfg(feature = "interactive")]
    {
        use dialoguer::{Confirm, theme::ColorfulTheme};

        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    #[cfg(not(feature = "interactive"))]
    {
        let _ = (prompt, default);
        Err(crate::error::CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_flag_disables_prompts() {
        assert!(!available(true));
    }
}
