use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

mod curve;

pub use curve::KeyframeCurve;

/// Shader parameter written by the original effect; used when a curve does
/// not name its own parameter.
pub const DEFAULT_PARAMETER: &str = "_MaterializationAmount";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse curve config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid curve config: {0}")]
    Invalid(String),
}

/// Top-level curve configuration file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurveConfig {
    pub version: u32,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub curves: BTreeMap<String, CurveDef>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Defaults {
    pub curve: Option<String>,
    pub speed: Option<f32>,
    #[serde(default)]
    pub on_load: Option<StartMode>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurveDef {
    #[serde(default = "default_parameter")]
    pub parameter: String,
    #[serde(default)]
    pub interpolation: Interpolation,
    #[serde(default)]
    pub speed: Option<f32>,
    #[serde(default)]
    pub keys: Vec<Key>,
}

fn default_parameter() -> String {
    DEFAULT_PARAMETER.to_string()
}

/// A single control point: effect amount `value` at curve time `time`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Key {
    pub time: f32,
    pub value: f32,
}

impl Key {
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// How values between two neighbouring keys are interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpolation {
    #[default]
    Linear,
    Smoothstep,
    EaseInOut,
    /// Hold the left key's value until the next key is reached.
    Hold,
}

impl std::fmt::Display for Interpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interpolation::Linear => f.write_str("linear"),
            Interpolation::Smoothstep => f.write_str("smoothstep"),
            Interpolation::EaseInOut => f.write_str("ease-in-out"),
            Interpolation::Hold => f.write_str("hold"),
        }
    }
}

/// What playback, if any, starts automatically once a curve is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StartMode {
    #[default]
    None,
    Materialize,
    Unmaterialize,
}

/// A curve with all defaults cascaded, ready to hand to a driver.
#[derive(Debug, Clone)]
pub struct ResolvedCurve {
    pub parameter: String,
    pub speed: f32,
    pub on_load: StartMode,
    pub curve: KeyframeCurve,
}

impl CurveConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: CurveConfig = toml::from_str(input)?;
        raw.validate()?;
        Ok(raw)
    }

    pub fn curve_def(&self, name: &str) -> Option<&CurveDef> {
        self.curves.get(name)
    }

    pub fn default_curve(&self) -> Option<&str> {
        self.defaults.curve.as_deref()
    }

    /// Cascades per-curve settings over `[defaults]` and builds the
    /// sampling curve.
    pub fn resolved_curve(&self, name: &str) -> Result<ResolvedCurve, ConfigError> {
        let def = self
            .curves
            .get(name)
            .ok_or_else(|| ConfigError::Invalid(format!("unknown curve '{name}'")))?;
        let speed = def.speed.or(self.defaults.speed).unwrap_or(1.0);
        let curve = KeyframeCurve::new(def.keys.clone(), def.interpolation)?;
        Ok(ResolvedCurve {
            parameter: def.parameter.clone(),
            speed,
            on_load: self.defaults.on_load.unwrap_or_default(),
            curve,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != 1 {
            return Err(ConfigError::Invalid(format!(
                "unsupported config version {}; expected 1",
                self.version
            )));
        }

        if self.curves.is_empty() {
            return Err(ConfigError::Invalid(
                "config must define at least one curve".into(),
            ));
        }

        for (name, def) in &self.curves {
            if def.parameter.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "curve '{name}' has an empty parameter name"
                )));
            }

            if def.keys.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "curve '{name}' must contain at least one key"
                )));
            }

            for key in &def.keys {
                if !key.time.is_finite() || !key.value.is_finite() {
                    return Err(ConfigError::Invalid(format!(
                        "curve '{name}' contains a non-finite key"
                    )));
                }
            }

            for pair in def.keys.windows(2) {
                if pair[1].time <= pair[0].time {
                    return Err(ConfigError::Invalid(format!(
                        "curve '{name}' key times must be strictly increasing ({} then {})",
                        pair[0].time, pair[1].time
                    )));
                }
            }

            if let Some(speed) = def.speed {
                if !speed.is_finite() || speed <= 0.0 {
                    return Err(ConfigError::Invalid(format!(
                        "curve '{name}' speed must be > 0"
                    )));
                }
            }
        }

        if let Some(speed) = self.defaults.speed {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(ConfigError::Invalid("defaults.speed must be > 0".into()));
            }
        }

        if let Some(default_curve) = &self.defaults.curve {
            if !self.curves.contains_key(default_curve) {
                return Err(ConfigError::Invalid(format!(
                    "defaults.curve references unknown curve '{default_curve}'"
                )));
            }
        }

        Ok(())
    }
}
