//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use backforge_core::application::ports::{GenerationStep, ProgressSink};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet and JSON mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.tagged("\u{2713}", msg, |s| s.green().bold().to_string(), |s| {
            s.green().to_string()
        })
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.tagged("\u{26a0}", msg, |s| s.yellow().bold().to_string(), |s| {
            s.yellow().to_string()
        })
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.tagged("\u{2139}", msg, |s| s.blue().bold().to_string(), |s| {
            s.blue().to_string()
        })
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// `  label      value` row, label dimmed.
    pub fn field(&self, label: &str, value: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let padded = format!("{label:<16}");
        let line = if self.no_color {
            format!("  {padded}{value}")
        } else {
            format!("  {}{}", padded.dimmed(), value.green())
        };
        self.term.write_line(&line)
    }

    /// Pretty-printed JSON document. Only written in JSON mode; quiet does
    /// not suppress it.
    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        if self.resolved_format != OutputFormat::Json {
            return Ok(());
        }
        let text = serde_json::to_string_pretty(value).map_err(|e| CliError::InvalidInput {
            message: format!("could not encode output as JSON: {e}"),
        })?;
        self.term.write_line(&text)?;
        Ok(())
    }

    /// Progress bar for the generation pipeline; hidden unless the output is
    /// a human terminal.
    pub fn progress(&self) -> PipelineProgress {
        if self.is_silent() || self.resolved_format != OutputFormat::Human {
            return PipelineProgress::hidden();
        }
        PipelineProgress::new(!self.no_color)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn is_silent(&self) -> bool {
        self.quiet || self.is_json()
    }

    fn tagged(
        &self,
        symbol: &str,
        msg: &str,
        paint_symbol: impl Fn(&str) -> String,
        paint_msg: impl Fn(&str) -> String,
    ) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            format!("{} {}", paint_symbol(symbol), paint_msg(msg))
        };
        self.term.write_line(&line)
    }
}

// ── Progress ──────────────────────────────────────────────────────────────────

/// `ProgressSink` backed by an indicatif bar on stderr.
pub struct PipelineProgress {
    bar: ProgressBar,
}

impl PipelineProgress {
    fn new(color: bool) -> Self {
        let template = if color {
            "{spinner:.cyan} [{bar:30.cyan/blue}] {pos:>3}% {msg}"
        } else {
            "{spinner} [{bar:30}] {pos:>3}% {msg}"
        };
        let style = ProgressStyle::with_template(template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");

        let bar = ProgressBar::new(100).with_style(style);
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }
}

/// A failed run drops the bar without `finish`; clear it so the error
/// message is not printed under a half-drawn bar.
impl Drop for PipelineProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

impl ProgressSink for PipelineProgress {
    fn step(&self, step: GenerationStep, percent: u8) {
        self.bar.set_position(u64::from(percent));
        self.bar.set_message(step.label());
    }

    fn finish(&self) {
        self.bar.set_position(100);
        self.bar.finish_and_clear();
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            quiet,
            no_color: true,
            output_format: format,
            ..GlobalArgs::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert_eq!(out.progress().position(), 0);
    }

    #[test]
    fn plain_format_never_colors() {
        let args = GlobalArgs {
            output_format: OutputFormat::Plain,
            ..GlobalArgs::default()
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        assert!(!out.supports_color());
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn config_can_disable_color() {
        let args = GlobalArgs {
            output_format: OutputFormat::Human,
            ..GlobalArgs::default()
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&args, &config).supports_color());
    }

    #[test]
    fn json_mode_is_silent_for_text() {
        let out = make_manager(false, OutputFormat::Json);
        assert!(out.is_json());
        assert!(out.print("not shown").is_ok());
    }

    #[test]
    fn progress_tracks_step_percentages() {
        let progress = PipelineProgress::hidden();
        progress.step(GenerationStep::WriteFiles, GenerationStep::WriteFiles.percent());
        assert_eq!(progress.position(), 40);
        progress.finish();
        assert_eq!(progress.position(), 100);
    }

    #[test]
    fn dropped_progress_is_cleared() {
        let progress = PipelineProgress::hidden();
        let bar = progress.bar.clone();
        progress.step(GenerationStep::CreateDirectories, 20);

        drop(progress);
        assert!(bar.is_finished());
    }
}
