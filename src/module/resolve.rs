/// Identifier resolution: convert user-provided strings to loaded `Value`s.
///
/// Resolution strategy (in priority order):
///
/// 1. **Built-in**: the identifier names a compiled-in module.
/// 2. **Direct file**: the identifier contains a path separator or a
///    recognized extension; load that file.
/// 3. **Search path**: a bare name is tried against every search directory
///    with every recognized extension, first hit wins.
/// 4. **Not found**: fail, with a fuzzy "did you mean" candidate when one
///    scores clearly enough.
use std::fs;
use std::path::{Path, PathBuf};

use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

use super::builtin;
use super::errors::InspectError;
use super::value::Value;

/// Environment variable holding the colon-separated module search path.
pub const SEARCH_PATH_VAR: &str = "MODCLI_PATH";

/// Extensions tried for bare identifiers, in order.
const EXTENSIONS: [&str; 2] = ["json", "toml"];

/// The capability that turns an identifier into a loaded value.
///
/// The production implementation is [`FsResolver`]; tests inject fakes.
pub trait Resolver {
    /// Resolve `identifier` to its module value.
    ///
    /// # Errors
    ///
    /// Returns `InspectError` when the identifier does not resolve or the
    /// resolved module fails to load.
    fn resolve(&self, identifier: &str) -> Result<Value, InspectError>;
}

/// Resolver backed by the built-in registry and the filesystem.
pub struct FsResolver {
    search_paths: Vec<PathBuf>,
}

impl FsResolver {
    /// Resolver over an explicit list of search directories.
    #[must_use]
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Resolver configured from `MODCLI_PATH`, defaulting to the current
    /// directory when the variable is unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        let paths = std::env::var(SEARCH_PATH_VAR)
            .ok()
            .map(|raw| {
                raw.split(':')
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect::<Vec<_>>()
            })
            .filter(|paths| !paths.is_empty())
            .unwrap_or_else(|| vec![PathBuf::from(".")]);
        Self::new(paths)
    }

    /// Whether the identifier should bypass the search path and be treated
    /// as a file path directly.
    fn is_direct_path(identifier: &str) -> bool {
        identifier.contains(std::path::MAIN_SEPARATOR)
            || identifier.contains('/')
            || Path::new(identifier)
                .extension()
                .is_some_and(|ext| EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
    }

    /// All module names visible to this resolver: built-ins plus the stems
    /// of recognized files in the search directories. Used for suggestions.
    fn known_names(&self) -> Vec<String> {
        let mut names: Vec<String> = builtin::BUILTIN_NAMES
            .iter()
            .map(|&n| n.to_owned())
            .collect();
        for dir in &self.search_paths {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                let recognized = path
                    .extension()
                    .is_some_and(|ext| EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)));
                if recognized {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names.dedup();
        names
    }

    fn not_found(&self, identifier: &str) -> InspectError {
        InspectError::NotFound {
            identifier: identifier.to_owned(),
            suggestion: suggest(identifier, &self.known_names()),
        }
    }
}

impl Resolver for FsResolver {
    fn resolve(&self, identifier: &str) -> Result<Value, InspectError> {
        if let Some(value) = builtin::lookup(identifier) {
            return Ok(value);
        }

        if Self::is_direct_path(identifier) {
            let path = Path::new(identifier);
            if !path.is_file() {
                return Err(self.not_found(identifier));
            }
            return load_file(path);
        }

        for dir in &self.search_paths {
            for ext in EXTENSIONS {
                let candidate = dir.join(format!("{identifier}.{ext}"));
                if candidate.is_file() {
                    return load_file(&candidate);
                }
            }
        }

        Err(self.not_found(identifier))
    }
}

/// Parse a module file into a `Value` based on its extension.
///
/// # Errors
///
/// `InspectError::Io` when the file cannot be read, `InspectError::Parse`
/// when its contents are malformed, `InspectError::UnsupportedFormat` for
/// unrecognized extensions.
pub fn load_file(path: &Path) -> Result<Value, InspectError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let contents = fs::read_to_string(path).map_err(|source| InspectError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match extension.as_str() {
        "json" => serde_json::from_str::<serde_json::Value>(&contents)
            .map(Value::from)
            .map_err(|e| parse_error(path, &e.to_string())),
        "toml" => toml::from_str::<toml::Value>(&contents)
            .map(Value::from)
            .map_err(|e| parse_error(path, &e.to_string())),
        _ => Err(InspectError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        }),
    }
}

/// Flatten a parser message to a single line so the two-line failure report
/// stays two lines.
fn parse_error(path: &Path, message: &str) -> InspectError {
    InspectError::Parse {
        path: path.to_path_buf(),
        reason: message.lines().collect::<Vec<_>>().join(" "),
    }
}

/// Fuzzy-match `identifier` against `candidates`, returning the best-scoring
/// name. A score existing at all already means the identifier is a
/// subsequence of the candidate, so no extra threshold is applied.
fn suggest(identifier: &str, candidates: &[String]) -> Option<String> {
    if identifier.is_empty() {
        return None;
    }

    let pattern = Pattern::parse(identifier, CaseMatching::Smart, Normalization::Smart);
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

    let mut scored: Vec<(&String, u32)> = candidates
        .iter()
        .filter_map(|name| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(name, &mut buf);
            pattern.score(haystack, &mut matcher).map(|s| (name, s))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.first().map(|(name, _)| (*name).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_module(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_builtin_takes_precedence_over_file() {
        let dir = tempfile::tempdir().unwrap();
        write_module(dir.path(), "path.json", r#"{"shadowed": true}"#);
        let resolver = FsResolver::new(vec![dir.path().to_path_buf()]);
        let value = resolver.resolve("path").unwrap();
        assert!(value.get("join").is_some());
        assert!(value.get("shadowed").is_none());
    }

    #[test]
    fn test_bare_name_found_in_search_path() {
        let dir = tempfile::tempdir().unwrap();
        write_module(dir.path(), "colors.json", r#"{"primary": "red"}"#);
        let resolver = FsResolver::new(vec![dir.path().to_path_buf()]);
        let value = resolver.resolve("colors").unwrap();
        assert_eq!(value.get("primary"), Some(&Value::Str("red".to_owned())));
    }

    #[test]
    fn test_json_tried_before_toml() {
        let dir = tempfile::tempdir().unwrap();
        write_module(dir.path(), "config.json", r#"{"from": "json"}"#);
        write_module(dir.path(), "config.toml", "from = \"toml\"");
        let resolver = FsResolver::new(vec![dir.path().to_path_buf()]);
        let value = resolver.resolve("config").unwrap();
        assert_eq!(value.get("from"), Some(&Value::Str("json".to_owned())));
    }

    #[test]
    fn test_direct_path_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_module(dir.path(), "settings.toml", "debug = true");
        let resolver = FsResolver::new(vec![]);
        let value = resolver.resolve(path.to_str().unwrap()).unwrap();
        assert_eq!(value.get("debug"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_unknown_identifier_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = FsResolver::new(vec![dir.path().to_path_buf()]);
        let err = resolver
            .resolve("definitely-not-a-real-module-xyz")
            .unwrap_err();
        assert!(matches!(err, InspectError::NotFound { .. }));
    }

    #[test]
    fn test_near_miss_gets_suggestion() {
        let resolver = FsResolver::new(vec![]);
        let err = resolver.resolve("pat").unwrap_err();
        let InspectError::NotFound { suggestion, .. } = err else {
            panic!("expected NotFound");
        };
        assert_eq!(suggestion.as_deref(), Some("path"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_module(dir.path(), "broken.json", "{not json");
        let resolver = FsResolver::new(vec![dir.path().to_path_buf()]);
        let err = resolver.resolve("broken").unwrap_err();
        assert!(matches!(err, InspectError::Parse { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_module(dir.path(), "notes.txt", "hello");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            err,
            InspectError::UnsupportedFormat { extension, .. } if extension == "txt"
        ));
    }
}
