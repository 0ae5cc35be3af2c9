//! Identifier quoting.
//!
//! Quoting is minimal: an identifier is wrapped in double quotes only when it
//! collides with a reserved keyword, contains a character outside
//! `[A-Za-z0-9_]`, starts with a digit, or is empty. Schema qualification is
//! structural, so dotted names are never split here.

/// SQLite reserved keywords that must be quoted when used as identifiers.
pub(crate) const RESERVED_WORDS: &[&str] = &[
    "abort",
    "action",
    "add",
    "after",
    "all",
    "alter",
    "always",
    "analyze",
    "and",
    "as",
    "asc",
    "attach",
    "autoincrement",
    "before",
    "begin",
    "between",
    "by",
    "cascade",
    "case",
    "cast",
    "check",
    "collate",
    "column",
    "commit",
    "conflict",
    "constraint",
    "create",
    "cross",
    "current",
    "current_date",
    "current_time",
    "current_timestamp",
    "database",
    "default",
    "deferrable",
    "deferred",
    "delete",
    "desc",
    "detach",
    "distinct",
    "do",
    "drop",
    "each",
    "else",
    "end",
    "escape",
    "except",
    "exclude",
    "exclusive",
    "exists",
    "explain",
    "fail",
    "filter",
    "first",
    "following",
    "for",
    "foreign",
    "from",
    "full",
    "generated",
    "glob",
    "group",
    "groups",
    "having",
    "if",
    "ignore",
    "immediate",
    "in",
    "index",
    "indexed",
    "initially",
    "inner",
    "insert",
    "instead",
    "intersect",
    "into",
    "is",
    "isnull",
    "join",
    "key",
    "last",
    "left",
    "like",
    "limit",
    "match",
    "materialized",
    "natural",
    "no",
    "not",
    "nothing",
    "notnull",
    "null",
    "nulls",
    "of",
    "offset",
    "on",
    "or",
    "order",
    "others",
    "outer",
    "over",
    "partition",
    "plan",
    "pragma",
    "preceding",
    "primary",
    "query",
    "raise",
    "range",
    "recursive",
    "references",
    "regexp",
    "reindex",
    "release",
    "rename",
    "replace",
    "restrict",
    "right",
    "rollback",
    "row",
    "rows",
    "savepoint",
    "select",
    "set",
    "table",
    "temp",
    "temporary",
    "then",
    "ties",
    "to",
    "transaction",
    "trigger",
    "unbounded",
    "union",
    "unique",
    "update",
    "using",
    "vacuum",
    "values",
    "view",
    "virtual",
    "when",
    "where",
    "window",
    "with",
    "without",
];

/// Quote an identifier only when it needs it.
pub(crate) fn escape_identifier(name: &str) -> String {
    let lower = name.to_lowercase();
    let needs_quoting = name.is_empty()
        || RESERVED_WORDS.binary_search(&lower.as_str()).is_ok()
        || name.chars().any(|c| !c.is_ascii_alphanumeric() && c != '_')
        || name.chars().next().is_some_and(|c| c.is_ascii_digit());

    if needs_quoting {
        format!("\"{}\"", name.replace('"', "\"\""))
    } else {
        name.to_string()
    }
}

/// Single-quote and escape a text literal.
pub(crate) fn escape_text(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_words_sorted_for_binary_search() {
        let mut sorted = RESERVED_WORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, RESERVED_WORDS);
    }

    #[test]
    fn test_ordinary_identifier_unquoted() {
        assert_eq!(escape_identifier("testTable"), "testTable");
        assert_eq!(escape_identifier("user_id"), "user_id");
    }

    #[test]
    fn test_reserved_word_quoted() {
        assert_eq!(escape_identifier("order"), "\"order\"");
        assert_eq!(escape_identifier("Group"), "\"Group\"");
    }

    #[test]
    fn test_special_characters_quoted() {
        assert_eq!(escape_identifier("has space"), "\"has space\"");
        assert_eq!(escape_identifier("dot.ted"), "\"dot.ted\"");
        assert_eq!(escape_identifier("1st"), "\"1st\"");
        assert_eq!(escape_identifier("has\"quote"), "\"has\"\"quote\"");
    }

    #[test]
    fn test_text_escaping() {
        assert_eq!(escape_text("it's"), "'it''s'");
    }
}
