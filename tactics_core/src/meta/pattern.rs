//! Pattern detector - finds repeating cycles at the tail of a move history

use serde::{Deserialize, Serialize};

/// Loops found at the end of a history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternReport {
    /// A-B-A-B
    pub loop2: bool,
    /// A-B-C-A-B-C
    pub loop3: bool,
    /// A-B-C-D-A-B-C-D
    pub loop4: bool,
    /// Any of the above
    pub stuck_loop: bool,
}

/// Check whether the last `2 * period` entries are two identical halves
pub fn has_loop<S: AsRef<str>>(history: &[S], period: usize) -> bool {
    if period == 0 || history.len() < 2 * period {
        return false;
    }
    let tail = &history[history.len() - 2 * period..];
    let (first, second) = tail.split_at(period);
    first.iter().zip(second).all(|(a, b)| a.as_ref() == b.as_ref())
}

/// Scan a history (oldest first) for period-2, -3 and -4 loops
pub fn detect_patterns<S: AsRef<str>>(history: &[S]) -> PatternReport {
    let loop2 = has_loop(history, 2);
    let loop3 = has_loop(history, 3);
    let loop4 = has_loop(history, 4);
    PatternReport {
        loop2,
        loop3,
        loop4,
        stuck_loop: loop2 || loop3 || loop4,
    }
}
