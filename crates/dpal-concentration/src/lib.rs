//! # dpal-concentration
//!
//! Estimates the Dirichlet-Process concentration from how many categories
//! have been seen among how many labelled items.
//!
//! With `k` categories among `n` items and a `Gamma(a, b)` prior on the
//! concentration `α`, the posterior is sampled with the auxiliary-variable
//! Gibbs scheme:
//!
//! ```text
//! η | α      ~ Beta(α + 1, n)
//! π / (1-π)  = (a + k - 1) / (n (b - ln η))
//! α | η      ~ π Gamma(a + k, b - ln η) + (1 - π) Gamma(a + k - 1, b - ln η)
//! ```
//!
//! The estimate is the mean of the retained samples.

pub mod gamma_posterior;

pub use gamma_posterior::GammaPosteriorConcentration;
