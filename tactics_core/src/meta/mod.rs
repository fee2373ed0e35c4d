//! Meta-state assessment and pattern detection

mod assess;
mod pattern;

pub use assess::{assess, MetaState};
pub use pattern::{detect_patterns, has_loop, PatternReport};
