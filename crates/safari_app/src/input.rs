//! Host input queue.
//!
//! Host callbacks (raycaster hits, controller buttons, model-loaded
//! notifications) may fire outside the frame loop. They go through a cloneable
//! [`InputHandle`]; the app drains the queue at the start of each frame so the
//! core itself stays single-threaded.

use glam::Vec3;
use safari_core::ActorKey;

#[derive(Debug, Clone, PartialEq)]
pub enum InputCommand {
    /// `session-start-request` from UI/input.
    StartRequest,
    /// `session-reset-request` from UI/input.
    ResetRequest,
    /// Click/select on an entity.
    Interact(ActorKey),
    /// Pointer or controller ray entered an entity.
    HoverEnter(ActorKey),
    /// Pointer or controller ray left an entity.
    HoverLeave(ActorKey),
    /// The entity's model finished loading; `parts` are sub-part rest positions.
    ModelLoaded { actor: ActorKey, parts: Vec<Vec3> },
}

/// Sending side of the input queue.
#[derive(Debug, Clone)]
pub struct InputHandle {
    sender: flume::Sender<InputCommand>,
}

impl InputHandle {
    pub(crate) fn new(sender: flume::Sender<InputCommand>) -> Self {
        Self { sender }
    }

    /// Queues `command`. Returns `false` if the app is gone.
    pub fn send(&self, command: InputCommand) -> bool {
        self.sender.send(command).is_ok()
    }

    pub fn request_start(&self) -> bool {
        self.send(InputCommand::StartRequest)
    }

    pub fn request_reset(&self) -> bool {
        self.send(InputCommand::ResetRequest)
    }

    pub fn interact(&self, actor: ActorKey) -> bool {
        self.send(InputCommand::Interact(actor))
    }

    pub fn hover(&self, actor: ActorKey, entered: bool) -> bool {
        if entered {
            self.send(InputCommand::HoverEnter(actor))
        } else {
            self.send(InputCommand::HoverLeave(actor))
        }
    }

    pub fn model_loaded(&self, actor: ActorKey, parts: Vec<Vec3>) -> bool {
        self.send(InputCommand::ModelLoaded { actor, parts })
    }
}
