use thiserror::Error;

/// A pattern string that does not follow the shortcut grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Empty key is not allowed in \"{pattern}\".")]
    EmptyKey { pattern: String },

    #[error("\"{0}\" is not allowed.")]
    InvalidKey(String),

    #[error("\"{0}\" is not a valid prefix.")]
    InvalidPrefix(String),

    #[error("Empty value after \"{prefix}:\" is not allowed.")]
    EmptyPrefixedValue { prefix: String },

    #[error("Only one trigger key can exist in \"{pattern}\".")]
    MultipleTriggers { pattern: String },

    #[error("A trigger key is required in \"{pattern}\".")]
    MissingTrigger { pattern: String },

    #[error("Only one \"Any\" can exist in \"{pattern}\".")]
    MultipleAnyModifiers { pattern: String },

    #[error("Modifier keys of \"{pattern}\" are not allowed.")]
    DuplicateModifiers { pattern: String },
}
