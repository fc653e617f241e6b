use std::time::Instant;

use log::debug;
use nalgebra::vector;
use rayon::prelude::*;

use crate::{
    color::{self, RGBA},
    transfer_functions::{TransferFunction, TransferFunctions},
    volumetric::Volume,
};

use super::{sampler::invert, Image, RayDepth, RenderOptions, ViewAxis, ViewProjector};

/// Samples at or above this value are bone surface for gradient shading
pub const BONE_THRESHOLD: i16 = 400;

/// Renders orthographic projections of a volume.
///
/// All rendering methods only read the volume, so one renderer
/// can serve any number of views.
pub struct Renderer<V>
where
    V: Volume,
{
    pub volume: V,
    transfer_functions: TransferFunctions,
}

impl<V> Renderer<V>
where
    V: Volume,
{
    pub fn new(volume: V) -> Renderer<V> {
        Renderer::with_transfer_functions(volume, TransferFunctions::default())
    }

    pub fn with_transfer_functions(volume: V, transfer_functions: TransferFunctions) -> Renderer<V> {
        Renderer {
            volume,
            transfer_functions,
        }
    }

    pub fn transfer_functions(&self) -> &TransferFunctions {
        &self.transfer_functions
    }

    /// Register more transfer functions
    pub fn transfer_functions_mut(&mut self) -> &mut TransferFunctions {
        &mut self.transfer_functions
    }

    pub fn projector(&self, view: ViewAxis) -> ViewProjector<'_, V> {
        ViewProjector::new(&self.volume, view)
    }

    /// `(width, height)` of images of `view`
    pub fn resolution(&self, view: ViewAxis) -> (usize, usize) {
        let proj = self.projector(view);
        (proj.width(), proj.height())
    }

    /// Blank image of the right size for `view`
    pub fn new_image(&self, view: ViewAxis) -> Image {
        let (w, h) = self.resolution(view);
        Image::new(w, h)
    }

    /// Grayscale cut through the volume at ray position `depth`
    pub fn draw_slice(&self, view: ViewAxis, depth: usize) -> Image {
        let mut image = self.new_image(view);
        self.draw_slice_into(view, depth, &mut image);
        image
    }

    /// # Panics
    /// Panics if `depth` is past the end of the ray or `image` has wrong size.
    pub fn draw_slice_into(&self, view: ViewAxis, depth: usize, image: &mut Image) {
        let proj = self.projector(view);
        check_resolution(&proj, image);
        assert!(
            depth < proj.ray_length(),
            "slice {depth} out of range, {view} view has {} slices",
            proj.ray_length()
        );

        let range = self.volume.get_range();
        fill(image, true, |i, j| {
            let v = range.normalize(proj.sample(i, j, depth).into());
            color::mono(v, 1.0)
        });
    }

    /// Brightest sample along each ray, in grayscale
    pub fn maximum_intensity_projection(&self, view: ViewAxis) -> Image {
        let mut image = self.new_image(view);
        self.maximum_intensity_projection_into(view, &mut image);
        image
    }

    /// # Panics
    /// Panics if `image` has wrong size.
    pub fn maximum_intensity_projection_into(&self, view: ViewAxis, image: &mut Image) {
        let proj = self.projector(view);
        check_resolution(&proj, image);

        let begin = Instant::now();
        let range = self.volume.get_range();
        let floor = self.volume.min();

        fill(image, true, |i, j| {
            let maximum = (0..proj.ray_length())
                .map(|depth| proj.sample(i, j, depth))
                .fold(floor, i16::max);
            color::mono(range.normalize(maximum.into()), 1.0)
        });

        debug!("MIP {view} done in {:?}", begin.elapsed());
    }

    /// Volume render with transfer function and optional gradient shading
    pub fn render(&self, view: ViewAxis, opts: &RenderOptions) -> Image {
        let mut image = self.new_image(view);
        self.render_into(view, opts, &mut image);
        image
    }

    /// # Panics
    /// Panics if `image` has wrong size.
    pub fn render_into(&self, view: ViewAxis, opts: &RenderOptions, image: &mut Image) {
        let proj = self.projector(view);
        check_resolution(&proj, image);

        debug!("Render {view} started, {opts:?}");
        let begin = Instant::now();

        let tf = self
            .transfer_functions
            .get(&opts.transfer_function, opts.soft_tissue_opacity);
        let tf = tf.as_ref();

        fill(image, opts.multi_thread, |i, j| {
            Self::collect_light(&proj, tf, opts, i, j)
        });

        debug!("Render {view} done in {:?}", begin.elapsed());
    }

    /// March one ray front to back.
    ///
    /// Without gradient shading every sample is composited.
    /// With gradient shading nothing is composited until the first sample
    /// reaching [`BONE_THRESHOLD`]; that sample is lit by the local gradient,
    /// composited, and the ray ends. Rays missing bone stay black.
    pub fn collect_light(
        proj: &ViewProjector<'_, V>,
        tf: &dyn TransferFunction,
        opts: &RenderOptions,
        i: usize,
        j: usize,
    ) -> RGBA {
        let mut accum = vector![0.0f32, 0.0, 0.0];
        let mut alpha_accum = 1.0f32;
        let mut light = 1.0f32;

        for depth in 0..proj.ray_length() {
            let sample = proj.sample(i, j, depth);

            let hit = opts.gradient_shading && sample >= BONE_THRESHOLD;
            if hit {
                let surface = if opts.gradient_interpolation
                    && sample != BONE_THRESHOLD
                    && depth > 0
                {
                    let prev = proj.sample(i, j, depth - 1);
                    let exact = invert(
                        BONE_THRESHOLD.into(),
                        prev.into(),
                        sample.into(),
                        (depth - 1) as f64,
                        depth as f64,
                    );
                    RayDepth::Between(exact)
                } else {
                    RayDepth::Voxel(depth)
                };

                light = proj.diffuse_lighting(i, j, surface, opts.light_source_x) as f32;
            }

            if !opts.gradient_shading || hit {
                let color = tf.classify(sample);
                let opacity = color.w;

                accum += color.xyz() * (alpha_accum * opacity * light);
                accum = accum.map(|c| c.clamp(0.0, 1.0));
                alpha_accum *= 1.0 - opacity;
            }

            if hit {
                break;
            }
        }

        color::opaque(accum.x, accum.y, accum.z)
    }
}

fn check_resolution<V: Volume>(proj: &ViewProjector<'_, V>, image: &Image) {
    assert_eq!(
        image.resolution(),
        (proj.width(), proj.height()),
        "image does not match {} view",
        proj.view()
    );
}

/// Evaluate `shader` for every pixel.
/// Rows are disjoint slices, so they can be shaded in parallel.
fn fill<F>(image: &mut Image, multi_thread: bool, shader: F)
where
    F: Fn(usize, usize) -> RGBA + Sync,
{
    let width = image.width();
    if width == 0 {
        return;
    }

    let shade_row = |(j, row): (usize, &mut [RGBA])| {
        for (i, px) in row.iter_mut().enumerate() {
            *px = shader(i, j);
        }
    };

    if multi_thread {
        image
            .pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(shade_row);
    } else {
        image
            .pixels_mut()
            .chunks_mut(width)
            .enumerate()
            .for_each(shade_row);
    }
}
