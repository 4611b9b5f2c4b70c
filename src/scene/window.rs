use crate::scene::frame::{Color, FrameBuffer, RelativeRect};

/// The modal message surface behind the evolution text.
pub trait MessageWindow {
    fn render(&self, frame: &mut FrameBuffer);
    fn close(&mut self);
}

/// The per-frame text printer. `advance` is ticked once per frame until
/// [`is_done`](TextPrinter::is_done) reports completion.
pub trait TextPrinter {
    fn advance(&mut self);
    fn is_done(&self) -> bool;
    fn render(&self, frame: &mut FrameBuffer);
    fn close(&mut self);
    /// The part of the message revealed so far.
    fn visible_text(&self) -> &str;
}

/// Solid-color message window.
#[derive(Debug)]
pub struct BasicWindow {
    rect: RelativeRect,
    color: Color,
    closed: bool,
}

impl BasicWindow {
    pub fn new(rect: RelativeRect, color: Color) -> Self {
        BasicWindow {
            rect,
            color,
            closed: false,
        }
    }
}

impl MessageWindow for BasicWindow {
    fn render(&self, frame: &mut FrameBuffer) {
        if self.closed {
            return;
        }
        let (x, y, w, h) = self.rect.to_pixels(frame.width(), frame.height());
        frame.fill_rect(x, y, w, h, self.color);
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Reveals a message a character at a time, one character every
/// `frames_per_char` frames. Glyph rasterization belongs to the font
/// system outside this crate; rendering paints a fill bar proportional to
/// the revealed text so compositing order is still observable.
#[derive(Debug)]
pub struct TickPrinter {
    text: String,
    rect: RelativeRect,
    shown: usize,
    frames_per_char: u32,
    counter: u32,
    closed: bool,
}

impl TickPrinter {
    pub fn new(text: impl Into<String>, rect: RelativeRect, frames_per_char: u32) -> Self {
        TickPrinter {
            text: text.into(),
            rect,
            shown: 0,
            frames_per_char: frames_per_char.max(1),
            counter: 0,
            closed: false,
        }
    }
}

impl TextPrinter for TickPrinter {
    fn advance(&mut self) {
        if self.is_done() {
            return;
        }
        self.counter += 1;
        if self.counter >= self.frames_per_char {
            self.counter = 0;
            self.shown += 1;
        }
    }

    fn is_done(&self) -> bool {
        self.shown >= self.text.chars().count()
    }

    fn render(&self, frame: &mut FrameBuffer) {
        if self.closed || self.shown == 0 {
            return;
        }
        let (x, y, w, h) = self.rect.to_pixels(frame.width(), frame.height());
        let total = self.text.chars().count().max(1);
        let bar = w * self.shown / total;
        // Text strip sits inside the window with a small inset.
        let inset = h / 4;
        frame.fill_rect(
            x + inset,
            y + inset,
            bar.saturating_sub(inset * 2),
            h.saturating_sub(inset * 2),
            Color::rgb(60, 60, 60),
        );
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn visible_text(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }
}
