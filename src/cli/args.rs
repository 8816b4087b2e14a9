/// CLI argument definitions via clap derive.
use clap::{Parser, ValueEnum};

/// modcli — load a named data module and pretty-print its structure.
#[derive(Debug, Parser)]
// No `arg_required_else_help`: a missing MODULE is a load failure with the
// standard two-line report, not a usage error.
#[command(
    name = "modcli",
    about = "Load a named data module and pretty-print its structure",
    version
)]
pub struct Cli {
    /// Target module: a built-in name, a bare name looked up in MODCLI_PATH,
    /// or a path to a .json/.toml file.
    #[arg(value_name = "MODULE")]
    pub module: Option<String>,

    /// Extra positional arguments. Accepted but ignored (with a warning).
    #[arg(value_name = "EXTRA", hide = true)]
    pub extra: Vec<String>,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// When to colorize pretty output.
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,

    /// Collection nesting levels to expand in pretty output.
    #[arg(long, value_name = "N", default_value = "2")]
    pub depth: usize,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long)]
    pub no_header: bool,

    /// List the built-in module names instead of inspecting.
    #[arg(long, conflicts_with = "module")]
    pub builtins: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable pretty print (colorized when stdout is a TTY).
    #[default]
    Pretty,
    /// Pretty-printed JSON.
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Flat table of entries: PATH, KIND, PREVIEW.
    Table,
}

/// Color behavior for pretty output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ColorChoice {
    /// Colorize when stdout is a TTY.
    #[default]
    Auto,
    /// Always emit ANSI colors.
    Always,
    /// Never emit ANSI colors.
    Never,
}
