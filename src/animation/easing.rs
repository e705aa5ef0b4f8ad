use std::fmt;

use serde::{Deserialize, Serialize};

/// Control points of the overshooting curve used by bounce and spring presets.
pub const BOUNCE_BEZIER: [f64; 4] = [0.68, -0.55, 0.265, 1.55];

/// Timing curve of an animation, in CSS vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Easing {
    /// Keyword curve such as `ease-out` or `linear`.
    Named(String),
    /// `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier([f64; 4]),
}

impl Easing {
    pub fn ease_out() -> Self {
        Self::Named("ease-out".to_string())
    }

    pub fn bounce() -> Self {
        Self::CubicBezier(BOUNCE_BEZIER)
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::ease_out()
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::CubicBezier([x1, y1, x2, y2]) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl From<&str> for Easing {
    fn from(s: &str) -> Self {
        Self::Named(s.to_string())
    }
}
