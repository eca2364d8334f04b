//! Prompt analysis heuristics.
//!
//! - [`requires_plot`] - keyword/pattern classifier for plot-request intent
//! - [`TokenEstimator`] - rough chars-per-token budget estimation
//!
//! Both are deliberately crude: the classifier is a keyword list, the estimator a
//! character-count division. They guide behavior, they do not enforce anything.

pub mod intent;
pub mod tokens;

pub use intent::requires_plot;
pub use tokens::TokenEstimator;
