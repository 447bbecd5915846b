use crate::surface::SliderSurface;

/// In-memory slider control for hosts without a native widget. Behaves
/// like a range input: the stored value is kept inside `[0, max]`.
pub struct SliderState {
    value: f64,
    max: u32,
    width_px: f64,
}

impl SliderState {
    pub fn new(max: u32, width_px: f64) -> Self {
        Self {
            value: 0.0,
            max,
            width_px,
        }
    }

    pub fn set_width_px(&mut self, width_px: f64) {
        self.width_px = width_px;
    }
}

impl SliderSurface for SliderState {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64) {
        self.value = value.clamp(0.0, self.max as f64);
    }

    fn max_value(&self) -> u32 {
        self.max
    }

    fn width_px(&self) -> f64 {
        self.width_px
    }
}
