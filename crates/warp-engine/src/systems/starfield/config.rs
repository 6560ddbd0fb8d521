use serde::Deserialize;

use super::speed::SpeedRamp;

/// Tunable constants of the starfield.
/// Loaded from JSON; every field is optional and falls back to its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Size of the star pool. Fixed for the lifetime of the field.
    pub max_particles: usize,
    /// Far-plane distance stars start from.
    pub depth: f32,
    /// Radius of a star at the viewer plane.
    pub max_size: f32,
    /// Resting speed multiplier.
    pub speed_low: f32,
    /// Speed multiplier while the pointer is held.
    pub speed_high: f32,
    /// Per-tick increment when `animate_speed_ramp` is set.
    pub speed_ramp_step: f32,
    /// Ease press/release over several ticks instead of jumping.
    pub animate_speed_ramp: bool,
    /// Pause the ambient track on release and resume it on press.
    pub pause_audio_on_release: bool,
    /// Fixed RNG seed. When absent the host picks one.
    pub seed: Option<u64>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            max_particles: 100,
            depth: 200.0,
            max_size: 1.0,
            speed_low: SpeedRamp::DEFAULT_LOW,
            speed_high: SpeedRamp::DEFAULT_HIGH,
            speed_ramp_step: SpeedRamp::DEFAULT_STEP,
            animate_speed_ramp: false,
            pause_audio_on_release: false,
            seed: None,
        }
    }
}

impl StarfieldConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace values the simulation cannot run with by their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.max_particles == 0 {
            log::warn!("starfield: max_particles must be > 0, using {}", defaults.max_particles);
            self.max_particles = defaults.max_particles;
        }
        if !(self.depth > 0.0 && self.depth.is_finite()) {
            log::warn!("starfield: invalid depth {}, using {}", self.depth, defaults.depth);
            self.depth = defaults.depth;
        }
        if !(self.max_size >= 0.0 && self.max_size.is_finite()) {
            log::warn!("starfield: invalid max_size {}, using {}", self.max_size, defaults.max_size);
            self.max_size = defaults.max_size;
        }
        if !(self.speed_low.is_finite() && self.speed_high.is_finite()) {
            log::warn!("starfield: non-finite speed bounds, using defaults");
            self.speed_low = defaults.speed_low;
            self.speed_high = defaults.speed_high;
        }
        if self.speed_low > self.speed_high {
            log::warn!(
                "starfield: speed_low {} above speed_high {}, swapping",
                self.speed_low,
                self.speed_high
            );
            std::mem::swap(&mut self.speed_low, &mut self.speed_high);
        }
        if self.animate_speed_ramp && !(self.speed_ramp_step > 0.0 && self.speed_ramp_step.is_finite()) {
            log::warn!(
                "starfield: invalid speed_ramp_step {}, using {}",
                self.speed_ramp_step,
                defaults.speed_ramp_step
            );
            self.speed_ramp_step = defaults.speed_ramp_step;
        }
        self
    }

    /// Speed ramp described by this config.
    pub fn speed_ramp(&self) -> SpeedRamp {
        let ramp = SpeedRamp::new(self.speed_low, self.speed_high);
        if self.animate_speed_ramp {
            ramp.animated(self.speed_ramp_step)
        } else {
            ramp
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let cfg = StarfieldConfig::from_json("{}").unwrap();
        assert_eq!(cfg, StarfieldConfig::default());
        assert_eq!(cfg.max_particles, 100);
        assert_eq!(cfg.depth, 200.0);
    }

    #[test]
    fn partial_json_overrides_fields() {
        let json = r#"{ "max_particles": 250, "animate_speed_ramp": true, "seed": 9 }"#;
        let cfg = StarfieldConfig::from_json(json).unwrap();
        assert_eq!(cfg.max_particles, 250);
        assert!(cfg.animate_speed_ramp);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.speed_high, 4.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(StarfieldConfig::from_json("{ max_particles: }").is_err());
        assert!(StarfieldConfig::from_json(r#"{ "depth": "far" }"#).is_err());
    }

    #[test]
    fn sanitized_repairs_bad_values() {
        let cfg = StarfieldConfig {
            max_particles: 0,
            depth: -5.0,
            max_size: f32::NAN,
            speed_low: 6.0,
            speed_high: 3.0,
            ..StarfieldConfig::default()
        }
        .sanitized();
        assert_eq!(cfg.max_particles, 100);
        assert_eq!(cfg.depth, 200.0);
        assert_eq!(cfg.max_size, 1.0);
        assert_eq!((cfg.speed_low, cfg.speed_high), (3.0, 6.0));
    }

    #[test]
    fn speed_ramp_follows_config() {
        let cfg = StarfieldConfig {
            speed_low: 1.0,
            speed_high: 8.0,
            ..StarfieldConfig::default()
        };
        let mut ramp = cfg.speed_ramp();
        assert_eq!(ramp.value(), 1.0);
        ramp.press();
        assert_eq!(ramp.value(), 8.0);
    }
}
