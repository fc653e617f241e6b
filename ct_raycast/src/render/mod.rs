mod gradient;
mod image;
mod lighting;
mod render_options;
mod renderer;
mod sampler;
mod view;

pub use image::Image;
pub use lighting::diffuse_intensity;
pub use render_options::{RenderOptions, RenderOptionsBuilder, LIGHT_SOURCE_X};
pub use renderer::{Renderer, BONE_THRESHOLD};
pub use sampler::{interpolate, invert, RayDepth};
pub use view::{ViewAxis, ViewProjector};
