use crate::{
    error::RenderError, premade::transfer_functions::SOFT_TISSUE_OPACITY,
    transfer_functions::DEFAULT_TF,
};

/// Default horizontal position of the light
pub const LIGHT_SOURCE_X: f64 = 83.0;

/// Settings of one volume render call
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Opacity of the skin band of the transfer function
    pub soft_tissue_opacity: f32,
    /// Stop every ray at the first bone sample and shade it
    pub gradient_shading: bool,
    /// Shade at the interpolated bone crossing instead of the voxel
    pub gradient_interpolation: bool,
    /// Horizontal position of the light
    pub light_source_x: f64,
    /// Name of the transfer function
    pub transfer_function: String,
    /// Render rows in parallel
    pub multi_thread: bool,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }

    fn validate(&self) -> Result<(), RenderError> {
        let opacity = self.soft_tissue_opacity;
        if !(0.0..=1.0).contains(&opacity) {
            return Err(RenderError::InvalidOpacity(opacity));
        }
        if !self.light_source_x.is_finite() {
            return Err(RenderError::InvalidLightSource(self.light_source_x));
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            soft_tissue_opacity: SOFT_TISSUE_OPACITY,
            gradient_shading: false,
            gradient_interpolation: false,
            light_source_x: LIGHT_SOURCE_X,
            transfer_function: DEFAULT_TF.to_owned(),
            multi_thread: true,
        }
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    opts: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn soft_tissue_opacity(mut self, opacity: f32) -> Self {
        self.opts.soft_tissue_opacity = opacity;
        self
    }

    pub fn gradient_shading(mut self, enable: bool) -> Self {
        self.opts.gradient_shading = enable;
        self
    }

    pub fn gradient_interpolation(mut self, enable: bool) -> Self {
        self.opts.gradient_interpolation = enable;
        self
    }

    pub fn light_source_x(mut self, x: f64) -> Self {
        self.opts.light_source_x = x;
        self
    }

    pub fn transfer_function(mut self, name: &str) -> Self {
        self.opts.transfer_function = name.to_owned();
        self
    }

    pub fn multi_thread(mut self, enable: bool) -> Self {
        self.opts.multi_thread = enable;
        self
    }

    /// Validates values
    pub fn build(self) -> Result<RenderOptions, RenderError> {
        self.opts.validate()?;
        Ok(self.opts)
    }

    pub fn build_unchecked(self) -> RenderOptions {
        self.opts
    }
}
