//! Human-readable console output, color-coded by severity.
//!
//! Progress lines go to stdout and errors to stderr. `--quiet` suppresses
//! everything except warnings and errors. Diagnostic detail belongs in
//! `tracing`, not here.

use std::sync::OnceLock;

use owo_colors::{OwoColorize, Stream};

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
}

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Apply output settings from global CLI flags. Only the first call takes effect.
pub fn configure(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

fn quiet() -> bool {
    OUTPUT_CONFIG.get().copied().unwrap_or_default().quiet
}

/// Print a banner line.
pub fn header(title: &str) {
    if quiet() {
        return;
    }
    println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
}

/// Print a numbered workflow step heading.
pub fn step(index: usize, total: usize, title: &str) {
    if quiet() {
        return;
    }
    let label = format!("[{index}/{total}]");
    println!();
    println!(
        "{} {}",
        label.if_supports_color(Stream::Stdout, |t| t.blue()),
        title.if_supports_color(Stream::Stdout, |t| t.bold())
    );
}

/// Print an informational line.
pub fn info(message: &str) {
    if quiet() {
        return;
    }
    println!("  {}", message.if_supports_color(Stream::Stdout, |t| t.blue()));
}

/// Print a success line.
pub fn success(message: &str) {
    if quiet() {
        return;
    }
    println!(
        "  {} {}",
        "✓".if_supports_color(Stream::Stdout, |t| t.green()),
        message.if_supports_color(Stream::Stdout, |t| t.green())
    );
}

/// Print a warning line.
pub fn warning(message: &str) {
    eprintln!(
        "  {} {}",
        "⚠".if_supports_color(Stream::Stderr, |t| t.yellow()),
        message.if_supports_color(Stream::Stderr, |t| t.yellow())
    );
}

/// Print an error line.
pub fn error(message: &str) {
    eprintln!("{}", message.if_supports_color(Stream::Stderr, |t| t.red()));
}
