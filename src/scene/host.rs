use crate::pokemon::PartyPokemon;
use crate::scene::frame::{Color, FrameBuffer, RelativeRect};
use crate::scene::transition::{TimedFade, Transition};
use crate::scene::window::{BasicWindow, MessageWindow, TextPrinter, TickPrinter};
use schema::Species;

/// A drawable creature image. Sprite sourcing (sheets, palettes, shiny
/// variants) is the asset pipeline's business; the scene only needs size
/// and a draw-at-offset operation.
pub trait Sprite {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn draw(&self, frame: &mut FrameBuffer, x: usize, y: usize);
}

/// Everything the evolution cinematic asks of the rest of the engine:
/// transition and printer construction, sprite lookup, the cry sound, and
/// the overworld's resume entry point.
pub trait SceneHost {
    fn fade_from_color(&mut self, frames: u32, color: Color) -> Box<dyn Transition>;
    fn fade_to_color(&mut self, frames: u32, color: Color) -> Box<dyn Transition>;
    fn open_window(&mut self, rect: RelativeRect, color: Color) -> Box<dyn MessageWindow>;
    fn begin_message(&mut self, rect: RelativeRect, text: &str) -> Box<dyn TextPrinter>;
    fn pokemon_sprite(&mut self, pkmn: &PartyPokemon) -> Box<dyn Sprite>;
    fn play_cry(&mut self, species: Species, form: u8);
    /// Resume field presentation; the dispatcher re-checks the pending
    /// evolution queue from there.
    fn return_to_field(&mut self);
}

/// Flat-color stand-in sprite, tinted per species so a sprite swap is
/// visible in the frame buffer.
#[derive(Debug)]
pub struct FlatSprite {
    width: usize,
    height: usize,
    color: Color,
}

impl FlatSprite {
    pub fn for_pokemon(pkmn: &PartyPokemon) -> Self {
        let name = pkmn.species.name().as_bytes();
        let seed = name.iter().fold(0u32, |acc, &b| acc.wrapping_mul(31).wrapping_add(b as u32));
        FlatSprite {
            width: 64,
            height: 64,
            color: Color::rgb(
                (seed & 0x7f) as u8 + 64,
                ((seed >> 8) & 0x7f) as u8 + 64,
                ((seed >> 16) & 0x7f) as u8 + 64,
            ),
        }
    }
}

impl Sprite for FlatSprite {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn draw(&self, frame: &mut FrameBuffer, x: usize, y: usize) {
        frame.fill_rect(x, y, self.width, self.height, self.color);
    }
}

/// Default host wiring the built-in transition, window and printer
/// implementations together. The demo binary uses it directly; tests use
/// it to observe cries, messages and the field handoff.
#[derive(Debug)]
pub struct DefaultHost {
    /// Frames per revealed character, the printer's text speed.
    pub frames_per_char: u32,
    /// Every message begun, in order.
    pub messages: Vec<String>,
    /// Every cry played, in order.
    pub cries: Vec<(Species, u8)>,
    /// Set when the scene hands control back to the overworld.
    pub returned_to_field: bool,
}

impl Default for DefaultHost {
    fn default() -> Self {
        DefaultHost {
            frames_per_char: 2,
            messages: Vec::new(),
            cries: Vec::new(),
            returned_to_field: false,
        }
    }
}

impl DefaultHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneHost for DefaultHost {
    fn fade_from_color(&mut self, frames: u32, color: Color) -> Box<dyn Transition> {
        Box::new(TimedFade::from_color(frames, color))
    }

    fn fade_to_color(&mut self, frames: u32, color: Color) -> Box<dyn Transition> {
        Box::new(TimedFade::to_color(frames, color))
    }

    fn open_window(&mut self, rect: RelativeRect, color: Color) -> Box<dyn MessageWindow> {
        Box::new(BasicWindow::new(rect, color))
    }

    fn begin_message(&mut self, rect: RelativeRect, text: &str) -> Box<dyn TextPrinter> {
        self.messages.push(text.to_string());
        Box::new(TickPrinter::new(text, rect, self.frames_per_char))
    }

    fn pokemon_sprite(&mut self, pkmn: &PartyPokemon) -> Box<dyn Sprite> {
        Box::new(FlatSprite::for_pokemon(pkmn))
    }

    fn play_cry(&mut self, species: Species, form: u8) {
        self.cries.push((species, form));
    }

    fn return_to_field(&mut self) {
        self.returned_to_field = true;
    }
}
