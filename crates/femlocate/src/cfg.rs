//! Numeric tolerances for the kernel and weight solver (internal).
//!
//! Policy
//! - Fixed constants, shared by every call site. Callers that need other
//!   thresholds pre-scale their coordinates instead.

/// Simplex solves with `|det| <= DET_EPS` are treated as degenerate.
pub(crate) const DET_EPS: f64 = 1e-7;
/// Slack when accepting sub-simplex weights during quad/hex decomposition.
pub(crate) const WEIGHT_EPS: f64 = 1e-12;
/// Value written into every slot of a rejected weight vector.
pub const SENTINEL_WEIGHT: f64 = -1.0;
/// Upper bound on accepted volume ratios; the locator starts its running minimum here.
pub(crate) const RATIO_LIMIT: f64 = 2.0;
