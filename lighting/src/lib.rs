//! **lighting**
//!
//! Per frame illumination of a 2D scene made of one point light, circular
//! occluders and wall segments. Shadows are softened by casting a handful of
//! jittered rays from the light towards every occluder.
#![deny(
    missing_debug_implementations,
    trivial_casts, trivial_numeric_casts,
    unsafe_code,
    unused_import_braces, unused_qualifications
)]


// Modules --------------------------------------------------------------------
pub mod color;
pub mod error;
pub mod geometry;
pub mod scene;
pub mod shading;
pub mod shadow;


// Exports --------------------------------------------------------------------
pub use color::{Color, ColorName};
pub use error::SceneError;
pub use geometry::{Point2, Shape};
pub use scene::{Scene, Light, CircleOccluder, Wall};
pub use shading::{Shading, ShadingConfig, AMBIENT_FLOOR};
