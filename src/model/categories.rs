/// Task categories in dataset order. Task ids are grouped into fixed
/// difficulty bands; everything outside the known bands falls into `OTHER`.
pub const EASY_FACTUAL: &str = "Easy factual & rewriting";
pub const REASONING_QUANTITATIVE: &str = "Reasoning & quantitative";
pub const PROGRAMMING_DEBUGGING: &str = "Programming & debugging";
pub const HARDER_KNOWLEDGE: &str = "Harder knowledge & reasoning";
pub const ADVANCED_CREATIVE: &str = "Advanced / creative & multi-step";
pub const OTHER: &str = "Other";

pub const ALL_CATEGORIES: [&str; 6] = [
    EASY_FACTUAL,
    REASONING_QUANTITATIVE,
    PROGRAMMING_DEBUGGING,
    HARDER_KNOWLEDGE,
    ADVANCED_CREATIVE,
    OTHER,
];

pub fn task_category(task_id: u32) -> &'static str {
    match task_id {
        1..=10 => EASY_FACTUAL,
        11..=15 => REASONING_QUANTITATIVE,
        16..=20 => PROGRAMMING_DEBUGGING,
        21..=25 => HARDER_KNOWLEDGE,
        26..=30 => ADVANCED_CREATIVE,
        _ => OTHER,
    }
}
