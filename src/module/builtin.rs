/// Compiled-in module registry.
///
/// Built-ins resolve before the filesystem, matching how most module systems
/// give core modules precedence over same-named files.
use super::value::Value;

/// Names of all built-in modules, in display order.
pub const BUILTIN_NAMES: [&str; 4] = ["path", "os", "env", "math"];

/// Look up a built-in module by name.
///
/// Returns `None` for unknown names so the resolver can fall through to the
/// filesystem.
#[must_use]
pub fn lookup(name: &str) -> Option<Value> {
    match name {
        "path" => Some(path_module()),
        "os" => Some(os_module()),
        "env" => Some(env_module()),
        "math" => Some(math_module()),
        _ => None,
    }
}

fn callable(name: &str) -> (String, Value) {
    (name.to_owned(), Value::Callable(name.to_owned()))
}

/// Path manipulation helpers, mirroring the host platform's conventions.
fn path_module() -> Value {
    Value::Map(vec![
        callable("join"),
        callable("resolve"),
        callable("basename"),
        callable("dirname"),
        callable("extname"),
        callable("normalize"),
        callable("is_absolute"),
        (
            "sep".to_owned(),
            Value::Str(std::path::MAIN_SEPARATOR.to_string()),
        ),
        (
            "delimiter".to_owned(),
            Value::Str(if cfg!(windows) { ";" } else { ":" }.to_owned()),
        ),
    ])
}

/// Host platform facts.
fn os_module() -> Value {
    Value::Map(vec![
        ("platform".to_owned(), Value::Str(std::env::consts::OS.to_owned())),
        ("arch".to_owned(), Value::Str(std::env::consts::ARCH.to_owned())),
        (
            "family".to_owned(),
            Value::Str(std::env::consts::FAMILY.to_owned()),
        ),
        (
            "exe_suffix".to_owned(),
            Value::Str(std::env::consts::EXE_SUFFIX.to_owned()),
        ),
        callable("hostname"),
        callable("tmpdir"),
    ])
}

/// Snapshot of the process environment at load time, sorted by name.
fn env_module() -> Value {
    let mut vars: Vec<(String, Value)> = std::env::vars()
        .map(|(k, v)| (k, Value::Str(v)))
        .collect();
    vars.sort_by(|(a, _), (b, _)| a.cmp(b));
    Value::Map(vars)
}

/// Mathematical constants and elementary functions.
fn math_module() -> Value {
    Value::Map(vec![
        ("pi".to_owned(), Value::Float(std::f64::consts::PI)),
        ("e".to_owned(), Value::Float(std::f64::consts::E)),
        ("tau".to_owned(), Value::Float(std::f64::consts::TAU)),
        ("sqrt2".to_owned(), Value::Float(std::f64::consts::SQRT_2)),
        callable("abs"),
        callable("min"),
        callable("max"),
        callable("floor"),
        callable("ceil"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_builtin_resolves() {
        for name in BUILTIN_NAMES {
            assert!(lookup(name).is_some(), "builtin '{name}' missing");
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert!(lookup("definitely-not-a-real-module-xyz").is_none());
    }

    #[test]
    fn test_path_exposes_join_and_resolve() {
        let path = lookup("path").unwrap();
        assert_eq!(path.get("join"), Some(&Value::Callable("join".to_owned())));
        assert_eq!(
            path.get("resolve"),
            Some(&Value::Callable("resolve".to_owned()))
        );
        assert!(matches!(path.get("sep"), Some(Value::Str(_))));
    }

    #[test]
    fn test_env_snapshot_is_sorted() {
        let Some(Value::Map(vars)) = lookup("env") else {
            panic!("env must be a mapping");
        };
        let keys: Vec<&String> = vars.iter().map(|(k, _)| k).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
