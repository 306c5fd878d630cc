//! Audio manager using Kira
//!
//! Handles loading and playing cue sounds.

use std::collections::HashMap;
use std::path::Path;

use kira::{
    manager::{AudioManager as KiraManager, AudioManagerSettings, backend::DefaultBackend},
    sound::static_sound::{StaticSoundData, StaticSoundSettings},
    Volume,
};

use super::sounds::SoundId;

/// Audio manager that handles all sound playback
pub struct AudioManager {
    /// Kira audio manager, absent when no output device is available
    manager: Option<KiraManager>,
    /// Preloaded sound data
    sounds: HashMap<SoundId, StaticSoundData>,
    /// Master volume (0.0 - 1.0)
    master_volume: f64,
    enabled: bool,
}

impl AudioManager {
    /// Create a new audio manager
    pub fn new() -> Self {
        let manager = match KiraManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(m) => {
                log::info!("Audio manager initialized successfully");
                Some(m)
            }
            Err(e) => {
                log::warn!("Failed to initialize audio manager: {}. Audio disabled.", e);
                None
            }
        };

        let mut audio = Self {
            manager,
            sounds: HashMap::new(),
            master_volume: 1.0,
            enabled: true,
        };
        audio.preload_sounds();
        audio
    }

    /// A manager that never touches an audio device
    pub fn silent() -> Self {
        Self {
            manager: None,
            sounds: HashMap::new(),
            master_volume: 1.0,
            enabled: false,
        }
    }

    fn preload_sounds(&mut self) {
        for sound_id in SoundId::ALL {
            if let Err(e) = self.load_sound(sound_id) {
                log::debug!("Could not preload sound {:?}: {}", sound_id, e);
            }
        }
    }

    fn load_sound(&mut self, sound_id: SoundId) -> Result<(), String> {
        if self.sounds.contains_key(&sound_id) {
            return Ok(());
        }

        let path = sound_id.file_path();
        if !Path::new(path).exists() {
            return Err(format!("Sound file not found: {}", path));
        }

        match StaticSoundData::from_file(path) {
            Ok(data) => {
                self.sounds.insert(sound_id, data);
                Ok(())
            }
            Err(e) => Err(format!("Failed to load sound {}: {:?}", path, e)),
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, sound_id: SoundId) {
        if !self.is_enabled() {
            return;
        }

        if let Err(e) = self.load_sound(sound_id) {
            log::debug!("Cannot play sound {:?}: {}", sound_id, e);
            return;
        }
        let sound_data = match self.sounds.get(&sound_id) {
            Some(data) => data.clone(),
            None => return,
        };

        let final_volume = sound_id.default_volume() * self.master_volume;
        let settings = StaticSoundSettings::new().volume(Volume::Amplitude(final_volume));

        if let Some(manager) = &mut self.manager {
            if let Err(e) = manager.play(sound_data.with_settings(settings)) {
                log::debug!("Failed to play sound {:?}: {:?}", sound_id, e);
            }
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, volume: f64) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    pub fn master_volume(&self) -> f64 {
        self.master_volume
    }

    /// Check if audio is enabled and a backend is available
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.manager.is_some()
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_manager_ignores_play() {
        let mut audio = AudioManager::silent();
        assert!(!audio.is_enabled());
        audio.play(SoundId::LevelUp);
        audio.set_master_volume(3.0);
        assert_eq!(audio.master_volume(), 1.0);
    }
}
