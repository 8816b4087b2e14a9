/// Output formatting: pretty, JSON, table modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::{ColorChoice, OutputFormat};
use super::render::{RenderOptions, render};
use crate::module::{InspectError, Value, flatten};

/// Resolve the effective output format, handling the `--json` shorthand.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Resolve whether pretty output should carry ANSI colors.
#[must_use]
pub fn resolve_colors(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Auto => std::io::stdout().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Output context passed to all writers.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub colors: bool,
    pub depth: usize,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(
        fmt: OutputFormat,
        json_flag: bool,
        color: ColorChoice,
        depth: usize,
        no_header: bool,
    ) -> Self {
        let colors = resolve_colors(color);
        // The colored crate has its own TTY heuristic; pin it to ours so
        // `--color always` survives piping.
        colored::control::set_override(colors);
        Self {
            format: resolve_format(fmt, json_flag),
            colors,
            depth,
            no_header,
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            colors: self.colors,
            depth: self.depth,
        }
    }
}

/// Write a loaded value to stdout in the selected format.
pub fn write_value(value: &Value, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Pretty => println!("{}", render(value, &ctx.render_options())),
        OutputFormat::Json => print_json(value),
        OutputFormat::Compact => print_compact_json(value),
        OutputFormat::Table => write_value_table(value, ctx),
    }
}

fn write_value_table(value: &Value, ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["PATH", "KIND", "PREVIEW"]);
    }
    for entry in flatten(value) {
        let path = if entry.path.is_empty() {
            "(root)".to_owned()
        } else {
            entry.path
        };
        table.add_row([path.as_str(), entry.kind, entry.preview.as_str()]);
    }
    println!("{table}");
}

/// Write the list of built-in module names to stdout.
pub fn write_builtins(names: &[&str], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(&names),
        OutputFormat::Compact => print_compact_json(&names),
        _ => {
            for name in names {
                println!("{name}");
            }
        }
    }
}

/// Warn that extra positional arguments were ignored. Always one line,
/// regardless of load outcome.
pub fn write_extra_args_warning(out: &mut impl Write) {
    let _ = writeln!(out, "Warning: you provided more than one argument.");
}

/// Write the two-line load failure report.
///
/// Line 1 names the identifier (empty when none was given), line 2 carries
/// the failure's message. Exactly these two lines, for every failure kind.
pub fn write_load_failure(out: &mut impl Write, identifier: &str, err: &InspectError) {
    let _ = writeln!(out, "Unable to inspect module {identifier}.");
    let _ = writeln!(out, "Reason: {err}");
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
