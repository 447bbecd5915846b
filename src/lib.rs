pub mod bridge;
pub mod gesture;
pub mod message;
pub mod surface;

pub use bridge::{Bridge, BridgeHandle};
pub use gesture::{DragPhase, GestureTracker, PointerEvent};
pub use message::{Command, Event};
pub use surface::{MediaSurface, RodioSurface, SliderGeometry, SliderState, SliderSurface};
