pub mod scores;
pub mod stats;
pub mod weights;
