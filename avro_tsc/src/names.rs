//! TypeScript identifier helpers.

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Turn an arbitrary name into a TypeScript identifier.
///
/// Each run of non-word characters is dropped and the character after it is
/// upper-cased; leading digits are removed.
/// Examples: `"NAME.test.1"` -> `"NAMETest1"`, `"$1name"` -> `"name"`
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    let mut sanitized: String = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if is_word_char(c) {
            sanitized.push(c);
            continue;
        }
        while chars.peek().is_some_and(|next| !is_word_char(*next)) {
            chars.next();
        }
        if let Some(next) = chars.next() {
            sanitized.extend(next.to_uppercase());
        }
    }
    sanitized
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .to_string()
}

/// Words TypeScript never accepts as a type, enum or namespace name.
const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "implements", "import", "in", "instanceof", "interface", "let", "new", "null", "package",
    "private", "protected", "public", "return", "static", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// True if `name` is a TypeScript reserved word.
#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// True if `name` is a valid Avro name: `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn is_avro_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(is_word_char)
}

/// True if `namespace` is empty or a `.`-separated list of Avro names.
#[must_use]
pub fn is_avro_namespace(namespace: &str) -> bool {
    namespace.is_empty() || namespace.split('.').all(is_avro_name)
}

/// Sanitize every `.`-separated segment of a qualified name.
#[must_use]
pub fn sanitize_qualified_name(name: &str) -> String {
    name.split('.')
        .map(sanitize_name)
        .collect::<Vec<String>>()
        .join(".")
}

/// True if `name` can be used unquoted as a property key.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// A record field name as an object type key, single-quoted when it is not
/// an identifier.
#[must_use]
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", escape_single_quoted(name))
    }
}

/// Escape for use inside a single-quoted TypeScript string literal.
#[must_use]
pub fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
