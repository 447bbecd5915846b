mod tracker;

pub use tracker::GestureTracker;

/// Pointer protocol delivered by the host over the slider control.
/// `x` is the horizontal offset in pixels from the control's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { x: f64 },
    Move { x: f64 },
    Release,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}
