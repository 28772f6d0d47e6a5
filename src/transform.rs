//! Preview transform: drag-to-move and corner-resize gestures.
//!
//! The controller is a small state machine over pointer events. A gesture
//! owns the pointer from `begin_*` until [`TransformController::release`]
//! or a forced cancel; move and resize are mutually exclusive. Every exit
//! path (release, failed start, edit-mode toggle) funnels through one
//! cancellation point so starts and ends always pair up.

use crate::event::{Notice, emit_notice};

/// A pointer position in host coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    /// Create a pointer position.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn distance_to(self, other: Pointer) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Translation offset and scale of the rendered preview.
///
/// Presentation-only: never part of the styled-text data model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewTransform {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl PreviewTransform {
    /// Smallest allowed scale.
    pub const MIN_SCALE: f32 = 0.1;
    /// Largest allowed scale.
    pub const MAX_SCALE: f32 = 10.0;

    /// Identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }

    fn clamp_scale(scale: f32) -> f32 {
        scale.clamp(Self::MIN_SCALE, Self::MAX_SCALE)
    }
}

impl Default for PreviewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Which gesture currently owns the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    Move,
    Resize,
}

#[derive(Clone, Copy, Debug)]
enum Gesture {
    Idle,
    Move {
        pointer_start: Pointer,
        start_x: f32,
        start_y: f32,
    },
    Resize {
        pointer_start: Pointer,
        center: Pointer,
        initial_scale: f32,
    },
}

impl Gesture {
    fn kind(self) -> Option<GestureKind> {
        match self {
            Self::Idle => None,
            Self::Move { .. } => Some(GestureKind::Move),
            Self::Resize { .. } => Some(GestureKind::Resize),
        }
    }
}

/// Gesture state machine driving the preview transform.
#[derive(Clone, Debug)]
pub struct TransformController {
    transform: PreviewTransform,
    edit_mode: bool,
    gesture: Gesture,
}

impl Default for TransformController {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformController {
    /// Create a controller at the identity transform, edit mode off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transform: PreviewTransform::identity(),
            edit_mode: false,
            gesture: Gesture::Idle,
        }
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> PreviewTransform {
        self.transform
    }

    /// Whether layout-edit mode is active.
    #[must_use]
    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// The gesture currently owning the pointer, if any.
    #[must_use]
    pub fn active_gesture(&self) -> Option<GestureKind> {
        self.gesture.kind()
    }

    /// Toggle layout-edit mode. Turning it off force-cancels any in-flight
    /// gesture; a gesture must never outlive the mode that allowed it.
    pub fn set_edit_mode(&mut self, active: bool) {
        if self.edit_mode == active {
            return;
        }
        self.edit_mode = active;
        if !active {
            self.cancel_gesture();
        }
        emit_notice(&Notice::EditModeChanged { active });
    }

    /// Start a drag-move at `pointer`. Refused (returns `false`) outside
    /// edit mode or while another gesture owns the pointer.
    pub fn begin_move(&mut self, pointer: Pointer) -> bool {
        if !self.edit_mode || self.gesture.kind().is_some() {
            return false;
        }
        self.gesture = Gesture::Move {
            pointer_start: pointer,
            start_x: self.transform.x,
            start_y: self.transform.y,
        };
        emit_notice(&Notice::GestureStarted {
            kind: GestureKind::Move,
        });
        true
    }

    /// Start a corner-resize at `pointer`, scaling about `center`. Same
    /// refusal rules as [`Self::begin_move`].
    pub fn begin_resize(&mut self, pointer: Pointer, center: Pointer) -> bool {
        if !self.edit_mode || self.gesture.kind().is_some() {
            return false;
        }
        self.gesture = Gesture::Resize {
            pointer_start: pointer,
            center,
            initial_scale: self.transform.scale,
        };
        emit_notice(&Notice::GestureStarted {
            kind: GestureKind::Resize,
        });
        true
    }

    /// Feed a pointer-move into the active gesture. No-op when idle.
    pub fn pointer_move(&mut self, pointer: Pointer) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Move {
                pointer_start,
                start_x,
                start_y,
            } => {
                // Unconstrained translation.
                self.transform.x = start_x + (pointer.x - pointer_start.x);
                self.transform.y = start_y + (pointer.y - pointer_start.y);
            }
            Gesture::Resize {
                pointer_start,
                center,
                initial_scale,
            } => {
                let initial_dist = pointer_start.distance_to(center);
                if initial_dist == 0.0 {
                    // Degenerate start point: keep the prior scale rather
                    // than divide by zero.
                    self.transform.scale = initial_scale;
                    return;
                }
                let current_dist = pointer.distance_to(center);
                self.transform.scale =
                    PreviewTransform::clamp_scale(initial_scale * (current_dist / initial_dist));
            }
        }
    }

    /// End the active gesture (pointer released).
    pub fn release(&mut self) {
        self.cancel_gesture();
    }

    // Single exit path for every way a gesture can end.
    fn cancel_gesture(&mut self) {
        if let Some(kind) = self.gesture.kind() {
            self.gesture = Gesture::Idle;
            emit_notice(&Notice::GestureEnded { kind });
        }
    }
}
