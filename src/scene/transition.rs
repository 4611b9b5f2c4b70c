use crate::scene::frame::{Color, FrameBuffer};

/// A multi-frame screen transition. The scene's logic tick calls
/// [`advance`](Transition::advance) once per frame and polls
/// [`is_done`](Transition::is_done); the render tick composites the
/// overlay on top of whatever was drawn below it.
pub trait Transition {
    fn advance(&mut self);
    fn is_done(&self) -> bool;
    fn render(&self, frame: &mut FrameBuffer);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadeDirection {
    /// Start fully covered by the color and reveal the scene.
    FromColor,
    /// Start clear and end fully covered by the color.
    ToColor,
}

/// Fixed-duration color fade, counted in frames.
#[derive(Debug)]
pub struct TimedFade {
    elapsed: u32,
    duration: u32,
    color: Color,
    direction: FadeDirection,
}

impl TimedFade {
    pub fn from_color(duration: u32, color: Color) -> Self {
        TimedFade {
            elapsed: 0,
            duration: duration.max(1),
            color,
            direction: FadeDirection::FromColor,
        }
    }

    pub fn to_color(duration: u32, color: Color) -> Self {
        TimedFade {
            elapsed: 0,
            duration: duration.max(1),
            color,
            direction: FadeDirection::ToColor,
        }
    }

    fn opacity(&self) -> f32 {
        let progress = self.elapsed as f32 / self.duration as f32;
        match self.direction {
            FadeDirection::FromColor => 1.0 - progress,
            FadeDirection::ToColor => progress,
        }
    }
}

impl Transition for TimedFade {
    fn advance(&mut self) {
        if self.elapsed < self.duration {
            self.elapsed += 1;
        }
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn render(&self, frame: &mut FrameBuffer) {
        frame.overlay_with_opacity(self.color, self.opacity());
    }
}
