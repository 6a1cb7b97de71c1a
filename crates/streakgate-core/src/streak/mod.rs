mod evaluator;

pub use evaluator::{classify, evaluate, StreakProgress, StreakStatus};
