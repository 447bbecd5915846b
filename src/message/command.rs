use serde::{Deserialize, Serialize};

/// One-shot instruction from the UI layer to the playback surface.
///
/// Volume-bearing variants carry the channel-side 0–100 scale; the router
/// converts to the surface's 0.0–1.0 scale at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "endpoint", content = "value", rename_all = "camelCase")]
pub enum Command {
    Play,
    Pause,
    #[serde(rename = "changeVolume")]
    SetVolume(f64),
    #[serde(rename = "changePlaybackRate")]
    SetPlaybackRate(f64),
    Seek(f64),
    #[serde(rename = "spawnAudioNode")]
    SpawnControlSurface(f64),
}
