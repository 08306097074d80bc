//! Value types shared by the pool and its collaborators.

pub mod counts;
pub mod entity;
pub mod likelihoods;
pub mod prior;

pub use counts::CategoryCounts;
pub use entity::Entity;
pub use likelihoods::Likelihoods;
pub use prior::Prior;
