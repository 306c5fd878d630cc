//! Sound definitions and mappings
//!
//! Defines the one-shot sounds behind each feedback cue.

/// Sound event identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    /// A talent point was gained
    TalentPoint,
    /// Enough points banked for a new talent
    TalentUnlock,
    /// A skill level was reached
    LevelUp,
}

impl SoundId {
    pub const ALL: [SoundId; 3] = [SoundId::TalentPoint, SoundId::TalentUnlock, SoundId::LevelUp];

    /// Get the file path for this sound
    pub fn file_path(&self) -> &'static str {
        match self {
            SoundId::TalentPoint => "assets/sounds/talent/point.ogg",
            SoundId::TalentUnlock => "assets/sounds/talent/unlock.ogg",
            SoundId::LevelUp => "assets/sounds/skill/level_up.ogg",
        }
    }

    /// Get the default volume for this sound (0.0 - 1.0)
    pub fn default_volume(&self) -> f64 {
        match self {
            SoundId::TalentPoint => 0.6,
            SoundId::TalentUnlock => 0.8,
            SoundId::LevelUp => 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_paths_are_distinct() {
        let mut paths: Vec<_> = SoundId::ALL.iter().map(|s| s.file_path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), SoundId::ALL.len());
    }

    #[test]
    fn test_volumes_in_range() {
        for sound in SoundId::ALL {
            assert!((0.0..=1.0).contains(&sound.default_volume()));
        }
    }
}
