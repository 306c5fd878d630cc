//! Skill level curve

/// Points needed to advance from `level` to `level + 1`
pub fn points_for_level(level: u32) -> u32 {
    // Base 100 points for the first level, +50 per level after
    100 + level.saturating_mul(50)
}

/// Get a title/rank based on level
pub fn level_title(level: u32) -> &'static str {
    match level {
        0..=4 => "Novice",
        5..=9 => "Apprentice",
        10..=19 => "Journeyman",
        20..=29 => "Adept",
        30..=49 => "Expert",
        _ => "Master",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_for_level() {
        assert_eq!(points_for_level(0), 100);
        assert_eq!(points_for_level(1), 150);
        assert_eq!(points_for_level(4), 300);
    }

    #[test]
    fn test_level_title() {
        assert_eq!(level_title(0), "Novice");
        assert_eq!(level_title(12), "Journeyman");
        assert_eq!(level_title(80), "Master");
    }
}
