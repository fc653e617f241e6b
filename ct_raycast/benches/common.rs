pub use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub use ct_raycast::{
    render::{RenderOptions, Renderer, ViewAxis},
    test_helpers::head_phantom,
    volumetric::LinearVolume,
};

pub const SIDE: usize = 128;

pub fn get_renderer() -> Renderer<LinearVolume> {
    Renderer::new(head_phantom(SIDE))
}
