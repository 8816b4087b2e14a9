/// Human-readable pretty printer for loaded values.
///
/// Output follows the conventions of interactive inspectors: strings
/// single-quoted and green, numbers yellow, callables cyan, small
/// collections inline, larger ones broken across indented lines, and
/// collections nested deeper than the configured depth elided as
/// `[Object]` / `[Array]`.
use colored::Colorize;

use crate::module::Value;

/// Line width above which a collection is rendered multiline.
const LINE_WIDTH: usize = 80;

/// Maximum sequence items rendered before truncation.
const MAX_SEQ_ITEMS: usize = 100;

/// Maximum rendered string length in nested positions.
const MAX_STR_LEN: usize = 72;

/// Rendering options.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit ANSI color codes.
    pub colors: bool,
    /// Collection nesting levels to expand below the root.
    pub depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            colors: false,
            depth: 2,
        }
    }
}

/// Render a value to its display form.
#[must_use]
pub fn render(value: &Value, opts: &RenderOptions) -> String {
    // depth counts levels below the root, so the root itself gets one extra.
    render_node(value, opts.depth.saturating_add(1), 0, opts).0
}

/// Paint styles for the value tokens.
#[derive(Clone, Copy)]
enum Style {
    Str,
    Num,
    Bool,
    Null,
    Special,
}

fn paint(text: &str, style: Style, colors: bool) -> String {
    if !colors {
        return text.to_owned();
    }
    match style {
        Style::Str => text.green().to_string(),
        Style::Num | Style::Bool => text.yellow().to_string(),
        Style::Null => text.bold().to_string(),
        Style::Special => text.cyan().to_string(),
    }
}

/// Render one node. Returns the (possibly colored) text and its visible
/// width, since ANSI escapes must not count toward line-break decisions.
fn render_node(value: &Value, depth_left: usize, indent: usize, opts: &RenderOptions) -> (String, usize) {
    match value {
        Value::Null => token("null", Style::Null, opts),
        Value::Bool(b) => token(&b.to_string(), Style::Bool, opts),
        Value::Int(n) => token(&n.to_string(), Style::Num, opts),
        Value::Float(n) => token(&format_float(*n), Style::Num, opts),
        Value::Str(s) => {
            let quoted = quote_string(s, indent > 0);
            token(&quoted, Style::Str, opts)
        }
        Value::Callable(name) => token(&format!("[Function: {name}]"), Style::Special, opts),
        Value::Opaque(type_name) => token(&format!("[{type_name}]"), Style::Special, opts),
        Value::Seq(items) => render_seq(items, depth_left, indent, opts),
        Value::Map(entries) => render_map(entries, depth_left, indent, opts),
    }
}

fn token(text: &str, style: Style, opts: &RenderOptions) -> (String, usize) {
    let width = text.chars().count();
    (paint(text, style, opts.colors), width)
}

/// Floats always carry a decimal point so `1.0` stays distinguishable
/// from the integer `1`.
fn format_float(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{n:.1}")
    } else {
        n.to_string()
    }
}

/// Single-quote a string, escaping embedded quotes and truncating long
/// strings in nested positions.
fn quote_string(s: &str, nested: bool) -> String {
    let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");
    if nested && escaped.chars().count() > MAX_STR_LEN {
        let head: String = escaped.chars().take(MAX_STR_LEN).collect();
        format!("'{head}…'")
    } else {
        format!("'{escaped}'")
    }
}

fn render_seq(items: &[Value], depth_left: usize, indent: usize, opts: &RenderOptions) -> (String, usize) {
    if depth_left == 0 {
        return token("[Array]", Style::Special, opts);
    }
    if items.is_empty() {
        return ("[]".to_owned(), 2);
    }

    let mut parts: Vec<(String, usize)> = items
        .iter()
        .take(MAX_SEQ_ITEMS)
        .map(|item| render_node(item, depth_left - 1, indent + 1, opts))
        .collect();
    if items.len() > MAX_SEQ_ITEMS {
        let extra = items.len() - MAX_SEQ_ITEMS;
        let noun = if extra == 1 { "item" } else { "items" };
        let more = format!("... {extra} more {noun}");
        let width = more.chars().count();
        parts.push((more, width));
    }

    wrap(parts, ('[', ']'), indent)
}

fn render_map(
    entries: &[(String, Value)],
    depth_left: usize,
    indent: usize,
    opts: &RenderOptions,
) -> (String, usize) {
    if depth_left == 0 {
        return token("[Object]", Style::Special, opts);
    }
    if entries.is_empty() {
        return ("{}".to_owned(), 2);
    }

    let parts: Vec<(String, usize)> = entries
        .iter()
        .map(|(key, child)| {
            let key_text = format_key(key);
            let (child_text, child_width) = render_node(child, depth_left - 1, indent + 1, opts);
            let width = key_text.chars().count() + 2 + child_width;
            (format!("{key_text}: {child_text}"), width)
        })
        .collect();

    wrap(parts, ('{', '}'), indent)
}

/// Join already-rendered parts inline when they fit on one line at the
/// current indent, multiline otherwise.
fn wrap(parts: Vec<(String, usize)>, brackets: (char, char), indent: usize) -> (String, usize) {
    let (open, close) = brackets;
    let inline_width = 4 // "X " and " Y" around the joined parts
        + parts.iter().map(|(_, w)| w).sum::<usize>()
        + 2 * (parts.len() - 1);

    if indent * 2 + inline_width <= LINE_WIDTH {
        let joined = parts
            .into_iter()
            .map(|(text, _)| text)
            .collect::<Vec<_>>()
            .join(", ");
        (format!("{open} {joined} {close}"), inline_width)
    } else {
        let pad = "  ".repeat(indent + 1);
        let body = parts
            .into_iter()
            .map(|(text, _)| format!("{pad}{text}"))
            .collect::<Vec<_>>()
            .join(",\n");
        let close_pad = "  ".repeat(indent);
        // Multiline renderings never participate in a parent's inline fit.
        (format!("{open}\n{body}\n{close_pad}{close}"), LINE_WIDTH + 1)
    }
}

/// Bare key when it looks like an identifier, single-quoted otherwise.
fn format_key(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .chars()
            .enumerate()
            .all(|(i, c)| c == '_' || c.is_ascii_alphabetic() || (i > 0 && c.is_ascii_digit()));
    if bare {
        key.to_owned()
    } else {
        format!("'{}'", key.replace('\'', "\\'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> RenderOptions {
        RenderOptions::default()
    }

    #[test]
    fn test_primitives() {
        assert_eq!(render(&Value::Null, &plain()), "null");
        assert_eq!(render(&Value::Bool(true), &plain()), "true");
        assert_eq!(render(&Value::Int(42), &plain()), "42");
        assert_eq!(render(&Value::Float(1.0), &plain()), "1.0");
        assert_eq!(render(&Value::Str("hi".to_owned()), &plain()), "'hi'");
    }

    #[test]
    fn test_small_map_inline() {
        let value = Value::Map(vec![
            ("a".to_owned(), Value::Int(1)),
            ("b".to_owned(), Value::Int(2)),
        ]);
        assert_eq!(render(&value, &plain()), "{ a: 1, b: 2 }");
    }

    #[test]
    fn test_callable_bracket_form() {
        let value = Value::Map(vec![("join".to_owned(), Value::Callable("join".to_owned()))]);
        assert_eq!(render(&value, &plain()), "{ join: [Function: join] }");
    }

    #[test]
    fn test_depth_elision() {
        let value = Value::Map(vec![(
            "a".to_owned(),
            Value::Map(vec![(
                "b".to_owned(),
                Value::Map(vec![(
                    "c".to_owned(),
                    Value::Map(vec![("d".to_owned(), Value::Int(1))]),
                )]),
            )]),
        )]);
        assert_eq!(
            render(&value, &plain()),
            "{ a: { b: { c: [Object] } } }"
        );
    }

    #[test]
    fn test_depth_zero_elides_children() {
        let value = Value::Map(vec![(
            "a".to_owned(),
            Value::Seq(vec![Value::Int(1)]),
        )]);
        let opts = RenderOptions {
            depth: 0,
            ..RenderOptions::default()
        };
        assert_eq!(render(&value, &opts), "{ a: [Array] }");
    }

    #[test]
    fn test_long_map_goes_multiline() {
        let entries: Vec<(String, Value)> = (0..12)
            .map(|i| (format!("key_number_{i}"), Value::Str(format!("value {i}"))))
            .collect();
        let out = render(&Value::Map(entries), &plain());
        assert!(out.starts_with("{\n"));
        assert!(out.contains("\n  key_number_0: 'value 0',\n"));
        assert!(out.ends_with("\n}"));
    }

    #[test]
    fn test_sequence_truncation() {
        let items: Vec<Value> = (0..150).map(Value::Int).collect();
        let out = render(&Value::Seq(items), &plain());
        assert!(out.contains("... 50 more items"));
        assert!(!out.contains("\n  101,"));
    }

    #[test]
    fn test_sequence_truncation_singular() {
        let items: Vec<Value> = (0..101).map(Value::Int).collect();
        let out = render(&Value::Seq(items), &plain());
        assert!(out.contains("... 1 more item"));
        assert!(!out.contains("more items"));
    }

    #[test]
    fn test_max_depth_does_not_overflow() {
        let value = Value::Seq(vec![Value::Int(1)]);
        let opts = RenderOptions {
            depth: usize::MAX,
            ..RenderOptions::default()
        };
        assert_eq!(render(&value, &opts), "[ 1 ]");
    }

    #[test]
    fn test_non_identifier_key_quoted() {
        let value = Value::Map(vec![("my key".to_owned(), Value::Int(1))]);
        assert_eq!(render(&value, &plain()), "{ 'my key': 1 }");
    }

    #[test]
    fn test_colors_emit_ansi() {
        // colored auto-disables off-TTY; force it on for the assertion.
        colored::control::set_override(true);
        let opts = RenderOptions {
            colors: true,
            ..RenderOptions::default()
        };
        let out = render(&Value::Str("hi".to_owned()), &opts);
        assert!(out.contains("\u{1b}["));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let value = Value::Map(vec![
            ("a".to_owned(), Value::Seq(vec![Value::Int(1), Value::Null])),
            ("b".to_owned(), Value::Float(0.5)),
        ]);
        assert_eq!(render(&value, &plain()), render(&value, &plain()));
    }
}
