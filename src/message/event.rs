use serde::{Deserialize, Serialize};

/// Derived state pushed back to the UI layer.
///
/// `VolumeChanged` carries the channel-side 0–100 scale, mirroring the
/// inbound convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "endpoint", content = "value")]
pub enum Event {
    #[serde(rename = "currentVolumeReceiver")]
    VolumeChanged(f64),
    #[serde(rename = "currentTimeReceiver")]
    CurrentTimeChanged(f64),
}
