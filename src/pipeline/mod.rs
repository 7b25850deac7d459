pub mod stage2_filter;
pub mod stage3_aggregate;
pub mod stage4_normalize;
pub mod stage5_rank;
pub mod stage6_report;
