//! Orthographic ray casting of CT volumes.
//!
//! A volume of signed 16-bit samples is viewed along one of its axes
//! ([`render::ViewAxis`]). Three kinds of images can be produced:
//! * slices through the volume,
//! * maximum intensity projections,
//! * volume renders composited front to back through a transfer function,
//!   optionally as a gradient shaded bone surface.
//!
//! ```
//! use ct_raycast::{render::{RenderOptions, Renderer, ViewAxis}, test_helpers};
//!
//! let renderer = Renderer::new(test_helpers::head_phantom(16));
//! let opts = RenderOptions::builder().gradient_shading(true).build().unwrap();
//! let image = renderer.render(ViewAxis::Front, &opts);
//! assert_eq!(image.resolution(), (16, 16));
//! ```

pub mod color;
pub mod common;
pub mod error;
pub mod premade;
pub mod render;
pub mod test_helpers;
pub mod transfer_functions;
pub mod volumetric;

pub use error::{RenderError, VolumeError};
