use crate::{
    gesture::GestureTracker,
    message::Command,
    surface::{SliderGeometry, SurfaceAdapter},
};

const VOLUME_SCALE: f64 = 100.0;

/// Channel-side 0–100 volume to surface-side 0.0–1.0 gain. This is the one
/// place the scales meet; nothing downstream sees an unclamped value.
pub(crate) fn percent_to_gain(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value / VOLUME_SCALE).clamp(0.0, 1.0)
}

/// Dispatches each command to exactly one adapter operation, validating at
/// this boundary so the adapter itself can stay pass-through.
pub struct CommandRouter {
    adapter: SurfaceAdapter,
}

impl CommandRouter {
    pub fn new(adapter: SurfaceAdapter) -> Self {
        Self { adapter }
    }

    pub fn dispatch(&mut self, command: Command, session: &mut Option<GestureTracker>) {
        match command {
            Command::Play => self.adapter.play(),
            Command::Pause => self.adapter.pause(),

            Command::SetVolume(value) => self.adapter.set_volume(percent_to_gain(value)),

            Command::SetPlaybackRate(rate) => {
                if rate.is_finite() && rate > 0.0 {
                    self.adapter.set_playback_rate(rate);
                }
            }

            Command::Seek(secs) => {
                if secs.is_finite() && secs >= 0.0 {
                    self.adapter.set_current_time(secs);
                }
            }

            // The one command with a double effect: initial volume, then
            // the drag session that makes pointer events meaningful.
            Command::SpawnControlSurface(default_volume) => {
                self.adapter.set_volume(percent_to_gain(default_volume));
                *session = Some(GestureTracker::new());
            }
        }
    }

    pub fn geometry(&self) -> SliderGeometry {
        self.adapter.slider_geometry()
    }

    /// Land a gesture value: the slider shows the slider-scale value while
    /// the audible volume tracks its normalized equivalent in real time.
    pub fn apply_gesture_value(&mut self, value: f64) {
        self.adapter.set_slider_value(value);
        self.adapter.set_volume(percent_to_gain(value));
    }

    pub fn current_time(&self) -> f64 {
        self.adapter.current_time()
    }
}
