//! Engine configuration (§6). `NfpConfig` is passed by value/reference into
//! [`crate::generate_nfp`]; nothing in the engine reads a process-wide constant.

/// Numeric backend selector. See [`crate::numeric`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Float,
    Rational,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NfpConfig {
    pub backend: Backend,
    /// Absolute+relative tolerance for the float backend; ignored under `Rational`.
    pub epsilon: f64,
    pub check_validity: bool,
    /// Per-slide iteration ceiling; `0` means unbounded.
    pub max_iterations: usize,
}

impl Default for NfpConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Float,
            epsilon: 1e-8,
            check_validity: true,
            max_iterations: 0,
        }
    }
}
