use crate::color::{self, RGBA};

/// RGBA raster, row major, `y = 0` is the top row
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<RGBA>,
}

impl Image {
    /// Transparent black image
    pub fn new(width: usize, height: usize) -> Image {
        Image {
            width,
            height,
            pixels: vec![color::zero(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resolution(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixel(&self, x: usize, y: usize) -> RGBA {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) outside of image");
        self.pixels[x + y * self.width]
    }

    pub fn pixels(&self) -> &[RGBA] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [RGBA] {
        &mut self.pixels
    }

    /// Pack into 3 bytes per pixel, alpha dropped
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            buffer.push(color::channel_to_u8(px.x));
            buffer.push(color::channel_to_u8(px.y));
            buffer.push(color::channel_to_u8(px.z));
        }
        buffer
    }
}
