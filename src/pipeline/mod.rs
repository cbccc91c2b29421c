pub mod stage1_validate;
pub mod stage2_compress;
pub mod stage3_score;
pub mod stage4_rank;
pub mod stage5_report;
