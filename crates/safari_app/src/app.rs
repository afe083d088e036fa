//! Safari App
//!
//! [`SafariApp`] is the host-integration layer: it owns the event bus, the
//! session controller, every scene actor and its components, and drives them
//! from the host's frame loop.
//!
//! # Frame order
//!
//! 1. Drain queued host input, dispatching after each command
//! 2. Advance the session countdown and dispatch
//! 3. Evaluate animal motion
//! 4. Evaluate scenery wind
//! 5. Clamp the player rig to the boundary
//!
//! "Dispatch" delivers every queued event to the controller, every tracker,
//! the HUD and the extra subscribers, until the queue is empty. Nothing is
//! left pending across frames.
//!
//! # Failure isolation
//!
//! Spawning validates an actor's configuration before anything is inserted.
//! A bad actor returns an error and leaves the session and every other actor
//! untouched.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use safari_core::{
    ActorKey, AnimalSpec, BillboardSpec, Category, EventBus, EventListener, FrameTime, ListenerId,
    Result, SafariConfig, SafariError, SafariEvent, SceneManifest, ScenerySpec,
};
use safari_game::{DiscoveryTracker, Highlighter, ProgressHud, SessionController, StartTrigger};
use safari_motion::{BoundaryClamp, MotionDriver, PhaseOffsets, Transform, WindDriver};
use slotmap::{SecondaryMap, SlotMap};

use crate::input::{InputCommand, InputHandle};
use crate::visuals::VisualRegistry;

/// Hot data of a scene entity. Behaviour lives in the app's component maps.
#[derive(Debug, Clone)]
pub struct Actor {
    pub name: String,
    pub transform: Transform,
}

pub struct SafariApp {
    config: SafariConfig,
    bus: EventBus,
    session: SessionController,
    hud: ProgressHud,
    visuals: VisualRegistry,

    // ==== Entities & components ====
    actors: SlotMap<ActorKey, Actor>,
    trackers: SecondaryMap<ActorKey, DiscoveryTracker>,
    motions: SecondaryMap<ActorKey, MotionDriver>,
    winds: SecondaryMap<ActorKey, WindDriver>,
    triggers: SecondaryMap<ActorKey, StartTrigger>,
    highlighters: SecondaryMap<ActorKey, Highlighter>,

    rig: Transform,
    boundary: BoundaryClamp,

    rng: StdRng,
    input_tx: flume::Sender<InputCommand>,
    input_rx: flume::Receiver<InputCommand>,

    time: f32,
    frame_count: u64,
}

impl SafariApp {
    /// Validates `config` and builds an app with an idle session and no actors.
    pub fn new(config: SafariConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let (input_tx, input_rx) = flume::unbounded();

        Ok(Self {
            bus: EventBus::new(),
            session: SessionController::new(&config.game)?,
            hud: ProgressHud::new(&config.game, config.hud),
            visuals: VisualRegistry::new(),

            actors: SlotMap::with_key(),
            trackers: SecondaryMap::new(),
            motions: SecondaryMap::new(),
            winds: SecondaryMap::new(),
            triggers: SecondaryMap::new(),
            highlighters: SecondaryMap::new(),

            rig: Transform::new(),
            boundary: BoundaryClamp::from_config(&config.boundary),

            rng: StdRng::seed_from_u64(seed),
            input_tx,
            input_rx,

            time: 0.0,
            frame_count: 0,
            config,
        })
    }

    // ========================================================================
    // Spawning
    // ========================================================================

    /// Spawns a discoverable animal with freshly drawn phase offsets.
    pub fn spawn_animal(&mut self, spec: &AnimalSpec) -> Result<ActorKey> {
        let phases = PhaseOffsets::random(&mut self.rng);
        self.spawn_animal_with_phases(spec, phases)
    }

    /// Spawns a discoverable animal with injected phase offsets.
    pub fn spawn_animal_with_phases(
        &mut self,
        spec: &AnimalSpec,
        phases: PhaseOffsets,
    ) -> Result<ActorKey> {
        let category = Category::lookup(&spec.category)
            .filter(|category| self.session.categories().contains(category))
            .ok_or_else(|| SafariError::UnknownCategory(spec.category.clone()))?;
        let driver = MotionDriver::from_params(&spec.motion, self.config.motion, phases, self.time)?;

        let mut transform = Transform::new();
        driver.update(self.time, &mut transform);

        let key = self.actors.insert(Actor {
            name: spec.category.clone(),
            transform,
        });

        let mut tracker = DiscoveryTracker::new(key, category);
        if self.session.is_discovered(category) {
            tracker.on_confirmed(category, &mut self.visuals);
        }
        self.trackers.insert(key, tracker);
        self.motions.insert(key, driver);

        log::debug!("spawned {category} as {key:?}");
        Ok(key)
    }

    /// Spawns static scenery swaying in the wind.
    pub fn spawn_scenery(&mut self, spec: &ScenerySpec) -> Result<ActorKey> {
        let wind = spec.wind.unwrap_or(self.config.wind);
        wind.validate()?;

        let key = self.actors.insert(Actor {
            name: spec.name.clone(),
            transform: Transform::new(),
        });
        self.winds.insert(key, WindDriver::new(wind, self.time));
        Ok(key)
    }

    /// Spawns a billboard. Only interactive billboards react to clicks and hover.
    pub fn spawn_billboard(&mut self, spec: &BillboardSpec) -> ActorKey {
        let key = self.actors.insert(Actor {
            name: spec.name.clone(),
            transform: Transform::new(),
        });
        if spec.interactive {
            self.triggers.insert(key, StartTrigger::new(spec.action));
            self.highlighters.insert(key, Highlighter::new());
        }
        key
    }

    /// Spawns the orb that starts the safari when selected.
    pub fn spawn_orb(&mut self, name: &str) -> ActorKey {
        let key = self.actors.insert(Actor {
            name: name.to_string(),
            transform: Transform::new(),
        });
        self.triggers.insert(key, StartTrigger::orb());
        key
    }

    /// Spawns everything in `manifest`. Entries that fail are logged and
    /// skipped; returns how many entities were spawned.
    pub fn spawn_manifest(&mut self, manifest: &SceneManifest) -> usize {
        let mut spawned = 0;

        for spec in &manifest.animals {
            match self.spawn_animal(spec) {
                Ok(_) => spawned += 1,
                Err(err) => log::warn!("skipping animal `{}`: {err}", spec.category),
            }
        }
        for spec in &manifest.scenery {
            match self.spawn_scenery(spec) {
                Ok(_) => spawned += 1,
                Err(err) => log::warn!("skipping scenery `{}`: {err}", spec.name),
            }
        }
        for spec in &manifest.billboards {
            self.spawn_billboard(spec);
            spawned += 1;
        }

        log::info!("scene populated with {spawned} entities");
        spawned
    }

    /// Removes the actor and all of its components.
    pub fn despawn(&mut self, actor: ActorKey) -> bool {
        if self.actors.remove(actor).is_none() {
            return false;
        }
        self.trackers.remove(actor);
        self.motions.remove(actor);
        self.winds.remove(actor);
        self.triggers.remove(actor);
        self.highlighters.remove(actor);
        self.visuals.unload(actor);
        true
    }

    // ========================================================================
    // Host signals
    // ========================================================================

    /// The actor's model finished loading.
    ///
    /// Registers the mesh with the visual registry, re-applies any marker that
    /// was dropped while the mesh was missing, and hands sub-part rest
    /// positions to the wind driver.
    pub fn model_loaded(&mut self, actor: ActorKey, parts: &[Vec3]) -> Result<()> {
        if !self.actors.contains_key(actor) {
            return Err(SafariError::ActorNotFound(actor));
        }

        self.visuals.mark_loaded(actor);
        if let Some(tracker) = self.trackers.get(actor) {
            tracker.refresh(&mut self.visuals);
        }
        if let Some(wind) = self.winds.get_mut(actor) {
            wind.register_parts(parts);
        }
        Ok(())
    }

    /// Click/select on an entity.
    pub fn interact(&mut self, actor: ActorKey) -> Result<()> {
        if !self.actors.contains_key(actor) {
            return Err(SafariError::ActorNotFound(actor));
        }

        if let Some(tracker) = self.trackers.get(actor) {
            tracker.on_interact(&mut self.bus);
        }
        if let Some(trigger) = self.triggers.get(actor) {
            trigger.on_interact(&mut self.bus);
        }
        self.dispatch();
        Ok(())
    }

    /// Pointer or controller ray entered (`true`) or left (`false`) an entity.
    pub fn hover(&mut self, actor: ActorKey, entered: bool) -> Result<()> {
        if !self.actors.contains_key(actor) {
            return Err(SafariError::ActorNotFound(actor));
        }

        if let Some(highlighter) = self.highlighters.get_mut(actor) {
            if entered {
                highlighter.highlight(actor, &mut self.visuals);
            } else {
                highlighter.unhighlight(actor, &mut self.visuals);
            }
        }
        Ok(())
    }

    pub fn request_start(&mut self) {
        self.bus.publish(SafariEvent::SessionStartRequest);
        self.dispatch();
    }

    pub fn request_reset(&mut self) {
        self.bus.publish(SafariEvent::SessionResetRequest);
        self.dispatch();
    }

    /// A cloneable handle for queueing input from outside the frame loop.
    #[must_use]
    pub fn input_handle(&self) -> InputHandle {
        InputHandle::new(self.input_tx.clone())
    }

    // ========================================================================
    // Frame loop
    // ========================================================================

    pub fn update(&mut self, frame: FrameTime) {
        self.time = frame.now;
        self.frame_count += 1;

        self.process_input();

        self.session.tick(frame.delta, &mut self.bus);
        self.dispatch();

        for (key, driver) in &self.motions {
            if let Some(actor) = self.actors.get_mut(key) {
                driver.update(frame.now, &mut actor.transform);
            }
        }

        for wind in self.winds.values_mut() {
            wind.update(frame.now);
        }

        self.boundary.apply(&mut self.rig);
    }

    fn process_input(&mut self) {
        while let Ok(command) = self.input_rx.try_recv() {
            log::trace!("input: {command:?}");
            let result = match command {
                InputCommand::StartRequest => {
                    self.request_start();
                    Ok(())
                }
                InputCommand::ResetRequest => {
                    self.request_reset();
                    Ok(())
                }
                InputCommand::Interact(actor) => self.interact(actor),
                InputCommand::HoverEnter(actor) => self.hover(actor, true),
                InputCommand::HoverLeave(actor) => self.hover(actor, false),
                InputCommand::ModelLoaded { actor, parts } => self.model_loaded(actor, &parts),
            };
            if let Err(err) = result {
                log::warn!("input dropped: {err}");
            }
        }
    }

    fn dispatch(&mut self) {
        while let Some(event) = self.bus.pop() {
            log::trace!("dispatch {}", event.name());

            self.session.handle_event(&event, &mut self.bus);
            for tracker in self.trackers.values_mut() {
                tracker.handle_event(&event, &mut self.visuals);
            }
            self.hud.on_event(&event);
            self.bus.notify_listeners(&event);
        }
    }

    // ========================================================================
    // Subscribers
    // ========================================================================

    /// Registers a read-only observer of every event.
    pub fn subscribe(&mut self, listener: Box<dyn EventListener>) -> ListenerId {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.bus.unsubscribe(id).is_some()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[must_use]
    pub fn config(&self) -> &SafariConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &SessionController {
        &self.session
    }

    #[must_use]
    pub fn hud(&self) -> &ProgressHud {
        &self.hud
    }

    #[must_use]
    pub fn visuals(&self) -> &VisualRegistry {
        &self.visuals
    }

    #[must_use]
    pub fn actor(&self, key: ActorKey) -> Option<&Actor> {
        self.actors.get(key)
    }

    pub fn actors(&self) -> impl Iterator<Item = (ActorKey, &Actor)> {
        self.actors.iter()
    }

    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    #[must_use]
    pub fn transform(&self, key: ActorKey) -> Option<&Transform> {
        self.actors.get(key).map(|actor| &actor.transform)
    }

    #[must_use]
    pub fn tracker(&self, key: ActorKey) -> Option<&DiscoveryTracker> {
        self.trackers.get(key)
    }

    pub fn trackers(&self) -> impl Iterator<Item = &DiscoveryTracker> {
        self.trackers.values()
    }

    #[must_use]
    pub fn motion(&self, key: ActorKey) -> Option<&MotionDriver> {
        self.motions.get(key)
    }

    #[must_use]
    pub fn wind(&self, key: ActorKey) -> Option<&WindDriver> {
        self.winds.get(key)
    }

    #[must_use]
    pub fn is_highlighted(&self, key: ActorKey) -> bool {
        self.highlighters
            .get(key)
            .is_some_and(Highlighter::is_highlighted)
    }

    #[must_use]
    pub fn rig(&self) -> &Transform {
        &self.rig
    }

    /// The player rig; the host writes locomotion here, the app clamps it each frame.
    pub fn rig_mut(&mut self) -> &mut Transform {
        &mut self.rig
    }

    /// Scene time of the last frame, in seconds.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
