use crate::surface::{MediaSurface, SliderGeometry, SliderSurface};

/// Thin accessor over the single media element and the single slider
/// control. Holds its element handles as instance state rather than
/// module-wide globals, so independent players can coexist.
pub struct SurfaceAdapter {
    media: Box<dyn MediaSurface>,
    slider: Box<dyn SliderSurface>,
}

impl SurfaceAdapter {
    pub fn new(media: Box<dyn MediaSurface>, slider: Box<dyn SliderSurface>) -> Self {
        Self { media, slider }
    }

    pub fn play(&mut self) {
        self.media.play();
    }

    pub fn pause(&mut self) {
        self.media.pause();
    }

    pub fn current_time(&self) -> f64 {
        self.media.current_time()
    }

    pub fn set_current_time(&mut self, secs: f64) {
        self.media.set_current_time(secs);
    }

    /// Normalized 0.0–1.0 volume. The caller owns the scale conversion.
    pub fn set_volume(&mut self, volume: f64) {
        self.media.set_volume(volume);
    }

    pub fn set_playback_rate(&mut self, rate: f64) {
        self.media.set_playback_rate(rate);
    }

    pub fn slider_geometry(&self) -> SliderGeometry {
        SliderGeometry {
            width_px: self.slider.width_px(),
            max_value: self.slider.max_value(),
        }
    }

    pub fn set_slider_value(&mut self, value: f64) {
        self.slider.set_value(value);
    }
}
