//! Scoring module - flat, level-free scoring
//!
//! - 100 points per cleared line, regardless of how many go at once
//! - 30 points whenever the rescue policy fires
//! - a milestone notice when the line total lands on a multiple of 5

use crate::types::{LINE_CLEAR_POINTS, LINE_MILESTONE_EVERY, RESCUE_BONUS};

/// Points for clearing `lines` rows in one lock.
pub fn line_clear_points(lines: u32) -> u32 {
    lines * LINE_CLEAR_POINTS
}

/// Flat bonus for a rescue.
pub fn rescue_bonus() -> u32 {
    RESCUE_BONUS
}

/// Whether the cumulative line total should trigger a milestone notice.
///
/// Only the total after the clear is checked, so jumping from 4 to 6 lines
/// does not count as reaching 5.
pub fn is_line_milestone(total_lines: u32) -> bool {
    total_lines > 0 && total_lines % LINE_MILESTONE_EVERY == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points_are_linear() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 100);
        assert_eq!(line_clear_points(2), 200);
        assert_eq!(line_clear_points(4), 400);
    }

    #[test]
    fn test_rescue_bonus() {
        assert_eq!(rescue_bonus(), 30);
    }

    #[test]
    fn test_milestones() {
        assert!(!is_line_milestone(0));
        assert!(!is_line_milestone(4));
        assert!(is_line_milestone(5));
        assert!(!is_line_milestone(6));
        assert!(is_line_milestone(10));
    }
}
