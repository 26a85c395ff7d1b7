pub mod catalogue;
pub mod classifier;
pub mod weights;

pub use catalogue::{Indicator, RELATIONSHIPS};
pub use classifier::{Classification, Regime, classify};
pub use weights::WeightMap;
