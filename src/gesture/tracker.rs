use crate::{
    gesture::{DragPhase, PointerEvent},
    surface::SliderGeometry,
};

/// Drag-session state machine for one slider control.
///
/// A bare `Move` fires continuously while the pointer merely hovers, so a
/// value is only computed while a press is held. `Leave` ends the session
/// exactly like `Release`, otherwise a pointer exiting the control's
/// bounds would leave it stuck in `Dragging`.
pub struct GestureTracker {
    phase: DragPhase,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Advance the session with one pointer event. Returns the slider-scale
    /// value the gesture lands on, if this event produces one.
    ///
    /// Geometry is passed in per event, never cached, so a resize mid-drag
    /// is reflected by the very next computation.
    pub fn track(&mut self, event: PointerEvent, geometry: SliderGeometry) -> Option<f64> {
        match event {
            // A press behaves like a move as well: tapping the slider
            // without moving still lands on a value.
            PointerEvent::Press { x } => {
                self.phase = DragPhase::Dragging;
                Self::value_at(x, geometry)
            }

            PointerEvent::Move { x } => match self.phase {
                DragPhase::Dragging => Self::value_at(x, geometry),
                DragPhase::Idle => None,
            },

            PointerEvent::Release | PointerEvent::Leave => {
                self.phase = DragPhase::Idle;
                None
            }
        }
    }

    fn value_at(x: f64, geometry: SliderGeometry) -> Option<f64> {
        // A zero-width or zero-max control has no meaningful mapping;
        // skip the event rather than propagate a garbage division.
        if geometry.width_px <= 0.0 || geometry.max_value == 0 {
            return None;
        }

        let max = geometry.max_value as f64;
        Some((x * max / geometry.width_px).clamp(0.0, max))
    }
}
