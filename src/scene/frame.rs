//! Minimal software frame buffer the cinematic composites into. Real
//! presentation (scaling, windowing) lives outside this crate; the scene
//! only needs pixels it can clear, fill and alpha-blend over.

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    fn with_alpha(self, a: u8) -> Self {
        Color { a, ..self }
    }
}

/// A rectangle in fractions of the frame, so message windows keep their
/// placement at any resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RelativeRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        RelativeRect { x, y, w, h }
    }

    /// Pixel rectangle (x, y, w, h) for a given frame size.
    pub fn to_pixels(&self, width: usize, height: usize) -> (usize, usize, usize, usize) {
        let px = (self.x * width as f32) as usize;
        let py = (self.y * height as f32) as usize;
        let pw = (self.w * width as f32) as usize;
        let ph = (self.h * height as f32) as usize;
        (px, py, pw, ph)
    }
}

#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Overwrite a rectangle, clipped to the frame.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Color) {
        for row in y..(y + h).min(self.height) {
            for col in x..(x + w).min(self.width) {
                self.pixels[row * self.width + col] = color;
            }
        }
    }

    /// Alpha-blend a color over the whole frame. Fade overlays use this
    /// with the fade's current opacity.
    pub fn overlay(&mut self, color: Color) {
        if color.a == 0 {
            return;
        }
        if color.a == 255 {
            self.clear(color);
            return;
        }
        let a = color.a as u16;
        for px in &mut self.pixels {
            px.r = (((color.r as u16) * a + (px.r as u16) * (255 - a)) / 255) as u8;
            px.g = (((color.g as u16) * a + (px.g as u16) * (255 - a)) / 255) as u8;
            px.b = (((color.b as u16) * a + (px.b as u16) * (255 - a)) / 255) as u8;
        }
    }

    /// [`overlay`](Self::overlay) with opacity given as a 0.0-1.0 factor.
    pub fn overlay_with_opacity(&mut self, color: Color, opacity: f32) {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.overlay(color.with_alpha(a));
    }
}
