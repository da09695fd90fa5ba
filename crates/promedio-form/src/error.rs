use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("scores must be between 0 and 20")]
    OutOfRange,

    #[error("enter at least one score")]
    NoScoresEntered,

    #[error("nothing to round")]
    NothingToRound,
}
