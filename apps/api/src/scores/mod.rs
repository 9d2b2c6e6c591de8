// Score tracking: per-language points, proficiency levels, leaderboard.

pub mod handlers;

/// Proficiency band derived from accumulated points. Content generators use
/// it to pitch difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

/// Maps accumulated points to a level. Bands: below 100 is beginner, below
/// 300 intermediate, otherwise advanced.
pub fn level_for_points(points: i64) -> Level {
    if points < 100 {
        Level::Beginner
    } else if points < 300 {
        Level::Intermediate
    } else {
        Level::Advanced
    }
}

/// Scores are keyed by the uppercased language name, so "spanish",
/// "Spanish" and "SPANISH" all address the same entry.
pub fn normalize_language(language: &str) -> String {
    language.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_band_boundaries() {
        assert_eq!(level_for_points(0), Level::Beginner);
        assert_eq!(level_for_points(99), Level::Beginner);
        assert_eq!(level_for_points(100), Level::Intermediate);
        assert_eq!(level_for_points(299), Level::Intermediate);
        assert_eq!(level_for_points(300), Level::Advanced);
        assert_eq!(level_for_points(100_000), Level::Advanced);
    }

    #[test]
    fn test_normalize_language_uppercases_and_trims() {
        assert_eq!(normalize_language("spanish"), "SPANISH");
        assert_eq!(normalize_language("  Spanish "), "SPANISH");
        assert_eq!(normalize_language("FRENCH"), "FRENCH");
    }
}
