//! Player settings and preferences
//!
//! Persisted separately from the bestiary in LocalStorage.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Bubble cap in the cauldron
    pub fn max_bubbles(&self) -> usize {
        match self {
            QualityPreset::Low => 12,
            QualityPreset::Medium => 35,
            QualityPreset::High => 60,
        }
    }

    /// Steam puff cap
    pub fn max_steam(&self) -> usize {
        match self {
            QualityPreset::Low => 6,
            QualityPreset::Medium => 20,
            QualityPreset::High => 32,
        }
    }

    /// Sparkle cap (splashes, mixing, reveal bursts)
    pub fn max_sparkles(&self) -> usize {
        match self {
            QualityPreset::Low => 60,
            QualityPreset::Medium => 250,
            QualityPreset::High => 600,
        }
    }
}

/// Particle budget handed to the cauldron effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleBudget {
    pub bubbles: usize,
    pub steam: usize,
    pub sparkles: usize,
}

/// Player settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Bubbles, steam and sparkles
    pub particles: bool,

    // === Gameplay ===
    /// How long the cauldron churns before the reveal
    #[serde(default = "default_mix_duration_ms")]
    pub mix_duration_ms: u32,
    /// Number of critters the bestiary progress bar counts toward
    #[serde(default = "default_bestiary_goal")]
    pub bestiary_goal: usize,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (skips the mix animation, no sparkle bursts)
    pub reduced_motion: bool,
}

fn default_mix_duration_ms() -> u32 {
    2000
}

fn default_bestiary_goal() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            particles: true,

            mix_duration_ms: default_mix_duration_ms(),
            bestiary_goal: default_bestiary_goal(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective particle caps (respects the particle toggle)
    pub fn particle_budget(&self) -> ParticleBudget {
        if !self.particles {
            return ParticleBudget {
                bubbles: 0,
                steam: 0,
                sparkles: 0,
            };
        }
        ParticleBudget {
            bubbles: self.quality.max_bubbles(),
            steam: self.quality.max_steam(),
            sparkles: if self.reduced_motion {
                0
            } else {
                self.quality.max_sparkles()
            },
        }
    }

    /// Mix delay actually used (reduced motion reveals immediately)
    pub fn effective_mix_duration_ms(&self) -> u32 {
        if self.reduced_motion {
            0
        } else {
            self.mix_duration_ms
        }
    }

    /// Volume applied to sound effects
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Flip mute, returning the new state
    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Flip reduced motion, returning the new state
    pub fn toggle_reduced_motion(&mut self) -> bool {
        self.reduced_motion = !self.reduced_motion;
        self.reduced_motion
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "critter_kitchen_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.mix_duration_ms, 2000);
        assert_eq!(s.bestiary_goal, 20);
        assert_eq!(s.particle_budget().bubbles, 35);
        assert_eq!(s.particle_budget().steam, 20);
    }

    #[test]
    fn test_particles_off() {
        let s = Settings {
            particles: false,
            ..Settings::from_preset(QualityPreset::High)
        };
        let budget = s.particle_budget();
        assert_eq!((budget.bubbles, budget.steam, budget.sparkles), (0, 0, 0));
    }

    #[test]
    fn test_reduced_motion() {
        let s = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        assert_eq!(s.effective_mix_duration_ms(), 0);
        assert_eq!(s.particle_budget().sparkles, 0);
        assert!(s.particle_budget().bubbles > 0);
    }

    #[test]
    fn test_volume() {
        let mut s = Settings::default();
        assert!((s.effective_volume() - 0.8).abs() < 1e-6);
        s.muted = true;
        assert_eq!(s.effective_volume(), 0.0);
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!(QualityPreset::from_str("MED"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::from_str("ultra"), None);
        assert_eq!(QualityPreset::High.as_str(), "High");
    }

    #[test]
    fn test_old_settings_fill_new_fields() {
        let json = r#"{"quality":"Low","particles":true,"master_volume":0.5,
            "sfx_volume":1.0,"muted":false,"reduced_motion":false}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.quality, QualityPreset::Low);
        assert_eq!(s.mix_duration_ms, 2000);
        assert_eq!(s.bestiary_goal, 20);
    }

    #[test]
    fn test_toggles_round_trip() {
        let mut s = Settings::default();
        assert!(s.toggle_muted());
        assert_eq!(s.effective_volume(), 0.0);
        assert!(!s.toggle_muted());
        assert!((s.effective_volume() - 0.8).abs() < 1e-6);

        assert!(s.toggle_reduced_motion());
        assert_eq!(s.effective_mix_duration_ms(), 0);
        assert_eq!(s.particle_budget().sparkles, 0);
        assert!(!s.toggle_reduced_motion());
        assert_eq!(s.effective_mix_duration_ms(), 2000);
        assert_eq!(s.particle_budget().sparkles, 250);
    }
}
