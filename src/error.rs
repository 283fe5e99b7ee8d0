use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// `]` reached with no saved turtle to restore
    #[error("unbalanced bracket: ']' at position {position} has no matching '['")]
    UnbalancedBracket { position: usize },

    #[error("system '{system}': rule key '{key}' must be exactly one character")]
    InvalidRuleKey { system: String, key: String },

    #[error("unknown system: {0}")]
    UnknownSystem(String),

    #[error("generation {generation} would hold {len} symbols (limit {limit})")]
    SymbolLimit {
        generation: usize,
        len: usize,
        limit: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
