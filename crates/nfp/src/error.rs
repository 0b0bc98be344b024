//! The error taxonomy (§7): a closed sum, surfaced through `thiserror`. No
//! variant holds a trait object; each carries exactly the context needed to
//! reconstruct what failed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NfpError {
    #[error("invalid input polygon: {0}")]
    InvalidInput(String),

    #[error("outer loop failed to close back to its starting reference point")]
    OuterLoopFailed,

    #[error("B overlaps A after a slide translation (iteration {iteration})")]
    SlideOverlap { iteration: usize },

    #[error("no touching points between A and B mid-slide (iteration {iteration})")]
    NoTouch { iteration: usize },

    #[error("numeric instability: {0}")]
    NumericInstability(String),

    #[error("no feasible translation vector found with at least one touch")]
    NoFeasibleVector,
}

pub type NfpResult<T> = Result<T, NfpError>;
