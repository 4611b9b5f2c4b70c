use crate::evolution::PendingEvolutionQueue;
use crate::pokemon::Party;
use crate::scene::frame::FrameBuffer;
use crate::scene::host::SceneHost;
use crate::scene::sequence::EvolutionScene;
use log::debug;

/// Holds the per-frame callbacks for the active evolution scene.
///
/// At most one scene is active at a time; the overworld dispatcher owns
/// the driver and forwards its logic and render ticks while a scene runs.
/// A scene registers on [`begin`](Self::begin) and deregisters itself by
/// reaching its terminal state, after which
/// [`start_next_pending`](Self::start_next_pending) can pull the next
/// queued evolution.
#[derive(Default)]
pub struct SceneDriver {
    active: Option<EvolutionScene>,
}

impl SceneDriver {
    pub fn new() -> Self {
        SceneDriver { active: None }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_scene(&self) -> Option<&EvolutionScene> {
        self.active.as_ref()
    }

    /// Register a scene as the active per-frame handler, replacing any
    /// previous one.
    pub fn begin(&mut self, scene: EvolutionScene) {
        self.active = Some(scene);
    }

    /// Forward the frame's logic tick. Drops the scene once it reaches its
    /// terminal state.
    pub fn logic_tick(&mut self, party: &mut Party, host: &mut dyn SceneHost) {
        if let Some(scene) = &mut self.active {
            scene.logic_tick(party, host);
            if scene.is_finished() {
                debug!("evolution scene finished, deregistering");
                self.active = None;
            }
        }
    }

    /// Forward the frame's render tick. Always called after the logic tick
    /// within the same frame.
    pub fn render_tick(&mut self, frame: &mut FrameBuffer) {
        if let Some(scene) = &mut self.active {
            scene.render_tick(frame);
        }
    }

    /// Start the next queued evolution if no scene is running. Entries
    /// whose party slot has vanished are skipped. Returns whether a scene
    /// was started.
    pub fn start_next_pending(
        &mut self,
        queue: &mut PendingEvolutionQueue,
        party: &Party,
        host: &mut dyn SceneHost,
    ) -> bool {
        if self.is_active() {
            return false;
        }
        while let Some(pending) = queue.next() {
            match EvolutionScene::new(party, pending.party_index, pending.condition, host) {
                Ok(scene) => {
                    self.begin(scene);
                    return true;
                }
                Err(err) => {
                    debug!("skipping pending evolution: {}", err);
                }
            }
        }
        false
    }
}
