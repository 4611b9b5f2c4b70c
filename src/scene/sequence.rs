use crate::errors::PartyResult;
use crate::evolution::{evolved, try_spawn_shedinja};
use crate::pokemon::Party;
use crate::scene::frame::{Color, FrameBuffer, RelativeRect};
use crate::scene::host::{SceneHost, Sprite};
use crate::scene::transition::Transition;
use crate::scene::window::{MessageWindow, TextPrinter};
use log::debug;
use schema::{EvolutionCondition, EvolutionMethod};

/// Backdrop behind the creature sprite.
const BACKDROP: Color = Color::rgb(30, 30, 30);
/// The pale gray-white the screen fades into while the species swaps.
const EVOLUTION_FLASH: Color = Color::rgb(200, 200, 200);
/// Frames for the fade in from and out to the overworld.
const EDGE_FADE_FRAMES: u32 = 20;
/// Frames for each half of the white flash.
const FLASH_FADE_FRAMES: u32 = 60;
/// Message window placement, a strip along the bottom of the frame.
const MESSAGE_RECT: RelativeRect = RelativeRect::new(0.0, 0.79, 1.0, 0.16);

/// Phases of the evolution cinematic, in the order they are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    FadeIn,
    AnnounceEvolving,
    FadeToWhite,
    FadeToRevealed,
    AnnounceEvolved,
    FadeOut,
    Terminal,
}

/// The scripted evolution cinematic.
///
/// Owns one party slot and a matched condition for its whole lifetime.
/// Two per-frame entry points drive it: [`logic_tick`](Self::logic_tick)
/// advances the state machine by polling is-done signals, and
/// [`render_tick`](Self::render_tick) paints the current frame. The owning
/// loop calls logic before render, once each per frame. No phase has a
/// timeout: a collaborator that never completes stalls the sequence, which
/// the engine accepts as a collaborator contract violation rather than
/// detecting it here.
pub struct EvolutionScene {
    state: SequenceState,
    party_index: usize,
    condition: EvolutionCondition,
    old_nickname: String,
    fade: Option<Box<dyn Transition>>,
    window: Option<Box<dyn MessageWindow>>,
    printer: Option<Box<dyn TextPrinter>>,
    sprite: Box<dyn Sprite>,
}

impl EvolutionScene {
    /// Start the cinematic for the creature in `party_index`. The first
    /// phase, the fade from black, begins immediately.
    pub fn new(
        party: &Party,
        party_index: usize,
        condition: EvolutionCondition,
        host: &mut dyn SceneHost,
    ) -> PartyResult<Self> {
        let pkmn = party.get(party_index)?;
        debug!(
            "evolution scene: {:?} -> {:?}",
            pkmn.species, condition.into.species
        );
        let sprite = host.pokemon_sprite(pkmn);
        let fade = host.fade_from_color(EDGE_FADE_FRAMES, Color::BLACK);
        Ok(EvolutionScene {
            state: SequenceState::FadeIn,
            party_index,
            condition,
            old_nickname: pkmn.nickname.clone(),
            fade: Some(fade),
            window: None,
            printer: None,
            sprite,
        })
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SequenceState::Terminal
    }

    fn enter(&mut self, state: SequenceState) {
        debug!("evolution scene: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Advance a fade if one is active, reporting whether it finished this
    /// frame.
    fn tick_fade(&mut self) -> bool {
        match &mut self.fade {
            Some(fade) => {
                fade.advance();
                fade.is_done()
            }
            None => false,
        }
    }

    fn tick_printer(&mut self) -> bool {
        match &mut self.printer {
            Some(printer) => {
                printer.advance();
                printer.is_done()
            }
            None => false,
        }
    }

    fn close_printer(&mut self) {
        if let Some(printer) = &mut self.printer {
            printer.close();
        }
        self.printer = None;
    }

    /// Per-frame logic entry point.
    pub fn logic_tick(&mut self, party: &mut Party, host: &mut dyn SceneHost) {
        match self.state {
            SequenceState::FadeIn => {
                if self.tick_fade() {
                    self.fade = None;
                    self.window = Some(host.open_window(MESSAGE_RECT, Color::WHITE));
                    let msg = format!("{} is evolving!", self.old_nickname);
                    self.printer = Some(host.begin_message(MESSAGE_RECT, &msg));
                    self.enter(SequenceState::AnnounceEvolving);
                }
            }
            SequenceState::AnnounceEvolving => {
                if self.tick_printer() {
                    self.close_printer();
                    self.fade = Some(host.fade_to_color(FLASH_FADE_FRAMES, EVOLUTION_FLASH));
                    self.enter(SequenceState::FadeToWhite);
                }
            }
            SequenceState::FadeToWhite => {
                if self.tick_fade() {
                    self.fade = None;
                    self.commit_evolution(party, host);
                    self.fade = Some(host.fade_from_color(FLASH_FADE_FRAMES, EVOLUTION_FLASH));
                    self.enter(SequenceState::FadeToRevealed);
                }
            }
            SequenceState::FadeToRevealed => {
                if self.tick_fade() {
                    self.fade = None;
                    if let Ok(pkmn) = party.get(self.party_index) {
                        host.play_cry(pkmn.species, pkmn.form);
                        let msg = format!(
                            "{} evolved into {}!",
                            self.old_nickname,
                            pkmn.species.name()
                        );
                        self.printer = Some(host.begin_message(MESSAGE_RECT, &msg));
                    }
                    self.enter(SequenceState::AnnounceEvolved);
                }
            }
            SequenceState::AnnounceEvolved => {
                if self.tick_printer() {
                    self.close_printer();
                    if let Some(window) = &mut self.window {
                        window.close();
                    }
                    self.window = None;
                    self.fade = Some(host.fade_to_color(EDGE_FADE_FRAMES, Color::BLACK));
                    self.enter(SequenceState::FadeOut);
                }
            }
            SequenceState::FadeOut => {
                if self.tick_fade() {
                    self.fade = None;
                    host.return_to_field();
                    self.enter(SequenceState::Terminal);
                }
            }
            SequenceState::Terminal => {}
        }
    }

    /// The one place the creature mutates: Shedinja first (from the
    /// pre-evolution creature), then the species/form swap, then the
    /// sprite reload for the new form.
    fn commit_evolution(&mut self, party: &mut Party, host: &mut dyn SceneHost) {
        if matches!(self.condition.method, EvolutionMethod::NinjaskLevelUp { .. })
            && try_spawn_shedinja(party, self.party_index).is_none()
        {
            debug!("no room in the party for a Shedinja");
        }
        if let Ok(pkmn) = party.get_mut(self.party_index) {
            *pkmn = evolved(pkmn, &self.condition);
        }
        if let Ok(pkmn) = party.get(self.party_index) {
            self.sprite = host.pokemon_sprite(pkmn);
        }
    }

    /// Per-frame render entry point: sprite first, then the fade overlay
    /// or the message surface, so overlays composite over the sprite.
    pub fn render_tick(&mut self, frame: &mut FrameBuffer) {
        frame.clear(BACKDROP);

        let x = frame.width().saturating_sub(self.sprite.width()) / 2;
        let y = frame.height().saturating_sub(self.sprite.height()) / 2;
        self.sprite.draw(frame, x, y);

        match self.state {
            SequenceState::FadeIn
            | SequenceState::FadeToWhite
            | SequenceState::FadeToRevealed
            | SequenceState::FadeOut => {
                if let Some(fade) = &self.fade {
                    fade.render(frame);
                }
            }
            SequenceState::AnnounceEvolving | SequenceState::AnnounceEvolved => {
                if let Some(window) = &self.window {
                    window.render(frame);
                }
                if let Some(printer) = &self.printer {
                    printer.render(frame);
                }
            }
            SequenceState::Terminal => {}
        }
    }
}
