//! Request validation error kinds.

/// Ways a completion request can be rejected before submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// The request contains no turns.
    #[display("request contains no turns")]
    EmptyTurns,
    /// A turn contains no content blocks.
    #[display("turn {_0} contains no content blocks")]
    EmptyContent(usize),
    /// The token budget is not a positive integer.
    #[display("max_tokens must be a positive integer")]
    ZeroTokenBudget,
}
