use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Renderer capability flag: which uniforms the shader pipeline consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// `model` only, spinning about Y over time. View and projection stay identity.
    Spin,
    /// Static `model` plus a look-at `view` and a perspective `projection`.
    #[default]
    LookAt,
}

impl Variant {
    pub fn uses_view_projection(&self) -> bool {
        matches!(self, Self::LookAt)
    }

    /// Uniform names the shader reads, in binding order.
    pub fn uniform_names(&self) -> &'static [&'static str] {
        match self {
            Self::Spin => &["model"],
            Self::LookAt => &["model", "view", "projection"],
        }
    }

    /// Model matrix `elapsed` seconds after start.
    ///
    /// Spin flattens z and rotates by `45 · sin(t / 2)` radians about Y.
    pub fn model_matrix(&self, elapsed: f32) -> Mat4 {
        match self {
            Self::Spin => {
                let angle = 45.0 * (elapsed / 2.0).sin();
                Mat4::from_scale(Vec3::new(0.5, 0.5, 0.0)) * Mat4::from_rotation_y(angle)
            }
            Self::LookAt => Mat4::from_scale(Vec3::splat(0.5)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Spin => "spin",
            Self::LookAt => "look-at",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spin" => Ok(Self::Spin),
            "look-at" | "lookat" => Ok(Self::LookAt),
            other => Err(format!("unknown variant {other:?}, expected spin or look-at")),
        }
    }
}
