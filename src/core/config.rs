//! Tunable constants for every renderer and controller
//!
//! All sections default to the values the site ships with. The browser reads
//! an optional JSON override from `<body data-site-config="...">`, the
//! simulator from the file named by `MEDVANCE_CONFIG`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub particles: ParticleConfig,
    pub helix: HelixConfig,
    pub radar: RadarConfig,
    pub counter: CounterConfig,
    pub typewriter: TypewriterConfig,
    pub form: FormConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    /// Delay between window `load` and hiding the page loader
    pub loader_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            particles: ParticleConfig::default(),
            helix: HelixConfig::default(),
            radar: RadarConfig::default(),
            counter: CounterConfig::default(),
            typewriter: TypewriterConfig::default(),
            form: FormConfig::default(),
            nav: NavConfig::default(),
            reveal: RevealConfig::default(),
            loader_delay_ms: 800,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse an optional override, falling back to defaults on any problem.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        let Some(json) = json.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => {
                debug!("Site config override applied");
                config
            }
            Err(e) => {
                warn!(error = %e, "Malformed site config, using defaults");
                Self::default()
            }
        }
    }
}

/// Particle field (`#particles-canvas`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Per-axis velocity is drawn from [-max_speed, max_speed]
    pub max_speed: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
    pub repulsion_radius: f64,
    pub repulsion_step: f64,
    pub link_distance: f64,
    pub link_opacity: f64,
    pub link_width: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 70,
            radius_min: 0.5,
            radius_max: 3.0,
            max_speed: 0.25,
            opacity_min: 0.1,
            opacity_max: 0.6,
            repulsion_radius: 120.0,
            repulsion_step: 1.5,
            link_distance: 110.0,
            link_opacity: 0.15,
            link_width: 0.8,
        }
    }
}

/// DNA helix (`#dna-canvas`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelixConfig {
    pub amplitude: f64,
    pub frequency: f64,
    /// Vertical distance between rows
    pub spacing: f64,
    /// Phase advance per clock tick
    pub speed: f64,
    pub dot_radius: f64,
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self {
            amplitude: 60.0,
            frequency: 0.04,
            spacing: 28.0,
            speed: 0.04,
            dot_radius: 5.0,
        }
    }
}

/// Radar map (`#map-canvas`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    pub grid_spacing: f64,
    pub rings: usize,
    /// Radius growth per clock tick
    pub ring_speed: f64,
    /// Radius offset between consecutive rings
    pub ring_offset: f64,
    /// Radius span after which a ring resets
    pub ring_cycle: f64,
    pub ring_min_radius: f64,
    pub fade_rate: f64,
    pub fade_offset: f64,
    pub peak_alpha: f64,
    pub stroke_alpha: f64,
    pub marker_outer: f64,
    pub marker_inner: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            grid_spacing: 60.0,
            rings: 5,
            ring_speed: 0.5,
            ring_offset: 50.0,
            ring_cycle: 220.0,
            ring_min_radius: 10.0,
            fade_rate: 0.012,
            fade_offset: 0.2,
            peak_alpha: 0.6,
            stroke_alpha: 0.4,
            marker_outer: 12.0,
            marker_inner: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: f64,
    /// Visible fraction required before a counter starts
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000.0,
            threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Pause once a phrase is fully typed
    pub hold_ms: u32,
    /// Pause once a phrase is fully deleted
    pub next_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_ms: 90,
            delete_ms: 60,
            hold_ms: 2000,
            next_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Simulated send latency before the success view appears
    pub send_delay_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { send_delay_ms: 1600 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub scrolled_offset: f64,
    pub back_to_top_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_offset: 60.0,
            back_to_top_offset: 400.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.12,
            root_margin: "0px 0px -40px 0px".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_site() {
        let config = SiteConfig::default();
        assert_eq!(config.particles.count, 70);
        assert_eq!(config.particles.link_distance, 110.0);
        assert_eq!(config.radar.rings, 5);
        assert_eq!(config.radar.ring_cycle, 220.0);
        assert_eq!(config.form.send_delay_ms, 1600);
        assert_eq!(config.loader_delay_ms, 800);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(r#"{"particles": {"count": 12}, "loader_delay_ms": 0}"#)
            .expect("valid json");
        assert_eq!(config.particles.count, 12);
        assert_eq!(config.particles.repulsion_radius, 120.0);
        assert_eq!(config.helix, HelixConfig::default());
        assert_eq!(config.loader_delay_ms, 0);
    }

    #[test]
    fn test_malformed_override_falls_back() {
        assert_eq!(SiteConfig::from_json_or_default(Some("{not json")), SiteConfig::default());
        assert_eq!(SiteConfig::from_json_or_default(Some("   ")), SiteConfig::default());
        assert_eq!(SiteConfig::from_json_or_default(None), SiteConfig::default());
    }
}
