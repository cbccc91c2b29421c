//! Composite scoring and ranking of driver season statistics.
//!
//! Each driver's wins, podiums and points are log-compressed with `ln(1 + x)`,
//! weighted, summed and multiplied by `csi ^ csi_alpha`, where `csi` is the car
//! strength index of the driver's equipment. Drivers are then ordered by that
//! score, descending, with ties broken by wins, then points, then input order.

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use model::scores::{CompositeScore, RankedDriver, Rejection, ScoreBreakdown, ScoreError};
pub use model::stats::{DriverSeasonStats, SeasonStats};
pub use model::weights::{ScoreWeights, ScoreWeightsOverride};
pub use pipeline::stage2_compress::log_compress;
pub use pipeline::stage3_score::{score, score_all, score_breakdown};
pub use pipeline::stage4_rank::{RankOutcome, featured, rank, rank_lenient};
