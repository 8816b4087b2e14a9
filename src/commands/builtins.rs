/// List the built-in module names.
use crate::cli::output::{self, OutputCtx};
use crate::module::InspectError;
use crate::module::builtin::BUILTIN_NAMES;

/// Run `modcli --builtins`.
///
/// # Errors
///
/// Infallible today; the signature matches the other commands.
pub fn run(ctx: &OutputCtx) -> Result<(), InspectError> {
    output::write_builtins(&BUILTIN_NAMES, ctx);
    Ok(())
}
