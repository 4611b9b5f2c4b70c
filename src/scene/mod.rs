// The evolution cinematic: a finite state machine over per-frame logic and
// render callbacks, plus the collaborator seams it drives.

pub mod driver;
pub mod frame;
pub mod host;
pub mod sequence;
pub mod transition;
pub mod window;


pub use driver::SceneDriver;
pub use frame::{Color, FrameBuffer, RelativeRect};
pub use host::{DefaultHost, SceneHost, Sprite};
pub use sequence::{EvolutionScene, SequenceState};
pub use transition::{TimedFade, Transition};
pub use window::{BasicWindow, MessageWindow, TextPrinter, TickPrinter};
