/// Command dispatch: routes the parsed CLI to its implementation.
pub mod builtins;
pub mod inspect;

use crate::cli::OutputCtx;
use crate::cli::args::Cli;
use crate::module::InspectError;

/// Dispatch the parsed CLI to its handler.
///
/// # Errors
///
/// Returns `InspectError` on any load failure.
pub fn dispatch(cli: &Cli, ctx: &OutputCtx) -> Result<(), InspectError> {
    if cli.builtins {
        builtins::run(ctx)
    } else {
        inspect::run(cli, ctx)
    }
}
