// External Dependencies ------------------------------------------------------
use thiserror::Error;


// Scene Errors ---------------------------------------------------------------
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("{what} radius must be positive and finite, got {radius}")]
    InvalidRadius { what: &'static str, radius: f64 },

    #[error("penumbra sample count must be at least 1, got {0}")]
    InvalidSampleCount(u32),

    #[error("light strength must be non-negative and finite, got {0}")]
    InvalidStrength(f64),

    #[error("{what} position must be finite")]
    InvalidPosition { what: &'static str },

    #[error("invalid shading parameter {name}: {value}")]
    InvalidShading { name: &'static str, value: f64 },

    #[error("unknown color name: {0}")]
    UnknownColor(String),

    #[error("failed to parse scene description: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read scene description: {0}")]
    Io(#[from] std::io::Error)
}
