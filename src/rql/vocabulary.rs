//! RQL vocabulary: the word lists and patterns behind the default rule set.
//!
//! The word lists double as the completion dictionary (see `autocomplete`).
//! Operators are literal strings, not regular expressions; they are matched
//! in the order listed here, so every multi-character operator must come
//! before any operator that is a prefix of it.

pub const KEYWORDS: &[&str] = &[
    "select",
    "distinct",
    "from",
    "where",
    "group",
    "by",
    "having",
    "in",
    "union",
    "order",
    "desc",
    "asc",
    "if",
    "then",
    "else",
    "parse",
    "parse?",
    "into",
    "not",
    "and",
    "or",
    "flatten",
    "like",
    "as",
    "all",
    "cast",
    "partition",
    "on",
    "error",
    "fail",
    "skip",
    "when",
    "coalesce",
    "enumerate",
];

pub const BUILTIN_FUNCTIONS: &[&str] = &[
    "avg",
    "count",
    "exists",
    "max",
    "min",
    "sum",
    "trim",
    "startswith",
    "cavg",
    "ccount",
    "cmax",
    "cmin",
    "csum",
    "isnull",
    "isnone",
    "date_trunc",
    "strempty",
    "to_date",
    "to_time",
    "to_timestamp",
    "enumerate",
    "read",
    "read_many",
    "read_csv",
    "read_parquet_raw",
    "read_parquet_avro",
    "read_json",
    "read_xml",
    "read_pgsql",
    "read_mysql",
    "read_oracle",
    "read_sqlserver",
    "read_hive",
    "read_sqlite",
    "query_pgsql",
    "query_mysql",
    "query_oracle",
    "query_sqlserver",
    "try_read",
    "try_read_many",
    "try_read_csv",
    "try_read_json",
    "try_read_xml",
    "try_read_pgsql",
    "try_read_mysql",
    "try_read_oracle",
    "try_read_sqlserver",
    "try_read_hive",
    "try_read_sqlite",
    "try_query_pgsql",
    "try_query_mysql",
    "try_query_oracle",
    "try_query_sqlserver",
    "ls",
    "ls_schemas",
    "ls_tables",
];

/// Constants, type names and format names.
pub const CONSTANTS: &[&str] = &[
    "typealias",
    "true",
    "false",
    "null",
    "none",
    "string",
    "int",
    "long",
    "short",
    "byte",
    "float",
    "double",
    "decimal",
    "date",
    "time",
    "timestamp",
    "interval",
    "bool",
    "collection",
    "array",
    "record",
    "format",
    "auto",
    "csv",
    "json",
    "excel",
    "hjson",
    "xml",
    "text",
    "nullif",
];

pub const OPERATORS: &[&str] = &[
    "<@>", "@>", "<@", "<=", "=>", "==", "!=", ":=", "<>", ":", "+", "-", "/", "%", "&", "^",
    "~", "<", ">", "=",
];

pub const NUMBER_PATTERN: &str = r"\b[+-]?\d+(?:(?:\.\d*)?(?:[e][+-]?\d+)?)?\b";
pub const LINE_COMMENT_PATTERN: &str = r"//[^\n]*";
pub const BRACKET_PATTERN: &str = r"[\(\[\{\)\]\}]";
pub const STRING_PATTERN: &str = r#"r?"(?:[^"\\]|\\.)*""#;

/// Catch-all used when no rule matches: whitespace run, word run, or one
/// non-word character.
pub const FALLBACK_PATTERN: &str = r"^(?:\s+|\w+|\W)";

pub const MULTILINE_STRING_START: &str = r#"^""""#;
