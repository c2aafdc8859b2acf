//! Graph-specific error types.

/// Graph construction and lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A component or connection endpoint has an empty id.
    EmptyId { context: &'static str, position: usize },

    /// The id does not name a declared component.
    UnknownComponent { id: String },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::EmptyId { context, position } => {
                write!(f, "Empty id in {} at position {}", context, position)
            }
            GraphError::UnknownComponent { id } => {
                write!(f, "Component {} not found", id)
            }
        }
    }
}

impl std::error::Error for GraphError {}
