//! # dpal-pool
//!
//! A pool of unlabelled entities and the strategies that pick which one an
//! oracle should label next.
//!
//! ## Strategies
//!
//! | Strategy | Score per entity | Pick |
//! |----------|------------------|------|
//! | Random | none | uniform |
//! | Outlier | prior-weighted marginal likelihood | lowest, or `exp(-beta·s)` draw |
//! | Entropy | entropy of the prior-weighted posterior | highest, or `exp(-beta·H)` draw |
//! | P(new) | DP probability of an unseen category | highest, or proportional draw |
//! | P(wrong) | probability the classifier mislabels it | highest, or proportional draw |
//!
//! Every selection removes exactly one entity from the pool and returns it.

pub mod catalog;
pub mod pool;
pub mod strategies;
pub mod weighted;

pub use catalog::{Strategy, StrategyCall};
pub use pool::Pool;
pub use weighted::WeightTransform;
