use serde::{Deserialize, Serialize};

pub const DEFAULT_BODY_COUNT: usize = 500;
pub const DEFAULT_RADIUS_MIN: f32 = 20.0;
pub const DEFAULT_RADIUS_MAX: f32 = 30.0;
/// Each velocity component is sampled in `[-max_speed, max_speed]`.
pub const DEFAULT_MAX_SPEED: f32 = 2.5;
pub const DEFAULT_MASS: f32 = 5.0;
/// Consecutive rejected candidates tolerated before placement gives up.
pub const DEFAULT_MAX_PLACEMENT_FAILURES: u32 = 100;

pub const DEFAULT_FILL: &str = "rgba(67, 224, 188, 0.63)";
pub const DEFAULT_STROKE: &str = "rgb(46, 84, 155)";
pub const DEFAULT_STROKE_WIDTH: f32 = 5.0;

/// Fill/stroke style shared by every body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyStyle {
    /// Any CSS color string
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f32,
}

impl Default for BodyStyle {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL.to_string(),
            stroke: DEFAULT_STROKE.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Simulation settings, loadable from JSON.
///
/// Every field is optional in the JSON document; missing fields take the
/// defaults above.
///
/// ```json
/// { "body_count": 200, "radius_min": 10, "radius_max": 15, "seed": 42 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Target number of bodies for initial placement
    pub body_count: usize,
    pub radius_min: f32,
    pub radius_max: f32,
    pub max_speed: f32,
    /// Mass shared by all bodies
    pub mass: f32,
    pub max_placement_failures: u32,
    /// RNG seed; `None` keeps the world's current random state
    pub seed: Option<u32>,
    pub style: BodyStyle,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            body_count: DEFAULT_BODY_COUNT,
            radius_min: DEFAULT_RADIUS_MIN,
            radius_max: DEFAULT_RADIUS_MAX,
            max_speed: DEFAULT_MAX_SPEED,
            mass: DEFAULT_MASS,
            max_placement_failures: DEFAULT_MAX_PLACEMENT_FAILURES,
            seed: None,
            style: BodyStyle::default(),
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            ("radius_min", self.radius_min),
            ("radius_max", self.radius_max),
            ("max_speed", self.max_speed),
            ("mass", self.mass),
            ("style.stroke_width", self.style.stroke_width),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{name} must be finite, got {value}"));
            }
        }

        if self.mass <= 0.0 {
            return Err(format!("mass must be positive, got {}", self.mass));
        }
        if self.radius_min <= 0.0 {
            return Err(format!("radius_min must be positive, got {}", self.radius_min));
        }
        if self.radius_max < self.radius_min {
            return Err(format!(
                "radius_max ({}) must not be smaller than radius_min ({})",
                self.radius_max, self.radius_min
            ));
        }
        if self.max_speed < 0.0 {
            return Err(format!("max_speed must not be negative, got {}", self.max_speed));
        }
        if self.style.stroke_width < 0.0 {
            return Err(format!(
                "style.stroke_width must not be negative, got {}",
                self.style.stroke_width
            ));
        }
        Ok(())
    }
}
