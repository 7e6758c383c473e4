// Chunk: docs/chunks/grammar_registration - Runtime grammar registration

use thiserror::Error;

/// Errors raised while registering a grammar.
///
/// Highlighting itself never fails: unknown languages and unparsable input
/// leave the escaped markup as it is.
#[derive(Error, Debug)]
pub enum SyntaxError {
    #[error("language name must not be empty")]
    EmptyName,

    #[error("grammar for `{language}` is incompatible with this tree-sitter version: {source}")]
    IncompatibleGrammar {
        language: String,
        #[source]
        source: tree_sitter::LanguageError,
    },

    #[error("highlight query for `{language}` does not compile: {source}")]
    InvalidQuery {
        language: String,
        #[source]
        source: tree_sitter::QueryError,
    },
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
