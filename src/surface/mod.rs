mod adapter;
mod backend_rodio;
mod slider;

pub use adapter::SurfaceAdapter;
pub use backend_rodio::RodioSurface;
pub use slider::SliderState;

/// Measured shape of the slider control, queried fresh for every gesture
/// event so a resize mid-drag is picked up immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    pub width_px: f64,
    pub max_value: u32,
}

/// The media element: start/stop, position, volume, rate.
///
/// `set_volume` takes the normalized 0.0–1.0 scale; scale conversion from
/// the channel's 0–100 happens before this seam. `set_current_time` and
/// `set_playback_rate` are pass-through, callers pre-validate.
pub trait MediaSurface {
    fn play(&mut self);
    fn pause(&mut self);
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, secs: f64);
    fn set_volume(&mut self, volume: f64);
    fn set_playback_rate(&mut self, rate: f64);
}

/// The slider control: a numeric display value, a declared maximum, and a
/// measurable width.
pub trait SliderSurface {
    fn value(&self) -> f64;
    fn set_value(&mut self, value: f64);
    fn max_value(&self) -> u32;
    fn width_px(&self) -> f64;
}
