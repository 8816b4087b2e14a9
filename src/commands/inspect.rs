/// The inspect operation: resolve the target module and write its value.
use std::io::Write;

use crate::cli::args::Cli;
use crate::cli::output::{self, OutputCtx};
use crate::module::{FsResolver, InspectError, Resolver, Value};

/// Run `modcli <MODULE>`.
///
/// # Errors
///
/// Returns `InspectError` when the identifier is missing or does not load.
pub fn run(args: &Cli, ctx: &OutputCtx) -> Result<(), InspectError> {
    let resolver = FsResolver::from_env();
    let value = run_with(
        &resolver,
        args.module.as_deref(),
        &args.extra,
        &mut std::io::stderr().lock(),
    )?;
    output::write_value(&value, ctx);
    Ok(())
}

/// Warn about extra arguments, then resolve the identifier.
///
/// The warning goes to `warn` before the load is attempted, so it appears
/// whether the load succeeds or fails.
///
/// # Errors
///
/// Same as [`load`].
pub fn run_with<R: Resolver>(
    resolver: &R,
    identifier: Option<&str>,
    extra: &[String],
    warn: &mut impl Write,
) -> Result<Value, InspectError> {
    if !extra.is_empty() {
        output::write_extra_args_warning(warn);
    }
    load(resolver, identifier)
}

/// Resolve an optional identifier against a resolver.
///
/// An absent identifier is a load failure like any other, not a usage error.
///
/// # Errors
///
/// `InspectError::MissingIdentifier` when no identifier was given; otherwise
/// whatever the resolver reports.
pub fn load<R: Resolver>(resolver: &R, identifier: Option<&str>) -> Result<Value, InspectError> {
    let identifier = identifier.ok_or(InspectError::MissingIdentifier)?;
    resolver.resolve(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeResolver {
        known: &'static str,
    }

    impl Resolver for FakeResolver {
        fn resolve(&self, identifier: &str) -> Result<Value, InspectError> {
            if identifier == self.known {
                Ok(Value::Map(vec![("ok".to_owned(), Value::Bool(true))]))
            } else {
                Err(InspectError::NotFound {
                    identifier: identifier.to_owned(),
                    suggestion: None,
                })
            }
        }
    }

    #[test]
    fn test_known_identifier_loads() {
        let resolver = FakeResolver { known: "demo" };
        let value = load(&resolver, Some("demo")).unwrap();
        assert_eq!(value.get("ok"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_missing_identifier_is_load_failure() {
        let resolver = FakeResolver { known: "demo" };
        let err = load(&resolver, None).unwrap_err();
        assert!(matches!(err, InspectError::MissingIdentifier));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_resolver_failure_propagates() {
        let resolver = FakeResolver { known: "demo" };
        let err = load(&resolver, Some("other")).unwrap_err();
        assert!(matches!(
            err,
            InspectError::NotFound { identifier, .. } if identifier == "other"
        ));
    }

    const WARNING: &str = "Warning: you provided more than one argument.\n";

    #[test]
    fn test_extra_args_warn_on_success() {
        let resolver = FakeResolver { known: "demo" };
        let mut warn = Vec::new();
        let result = run_with(&resolver, Some("demo"), &["ignored".to_owned()], &mut warn);
        assert!(result.is_ok());
        assert_eq!(String::from_utf8(warn).unwrap(), WARNING);
    }

    #[test]
    fn test_extra_args_warn_on_failure() {
        let resolver = FakeResolver { known: "demo" };
        let mut warn = Vec::new();
        let result = run_with(&resolver, Some("other"), &["ignored".to_owned()], &mut warn);
        assert!(result.is_err());
        assert_eq!(String::from_utf8(warn).unwrap(), WARNING);
    }

    #[test]
    fn test_no_extras_no_warning() {
        let resolver = FakeResolver { known: "demo" };
        let mut warn = Vec::new();
        let result = run_with(&resolver, Some("demo"), &[], &mut warn);
        assert!(result.is_ok());
        assert!(warn.is_empty());
    }
}
