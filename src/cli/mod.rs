/// CLI layer: argument parsing, pretty rendering, output formatting.
pub mod args;
pub mod output;
pub mod render;

pub use args::{Cli, OutputFormat};
pub use output::{OutputCtx, write_load_failure};
