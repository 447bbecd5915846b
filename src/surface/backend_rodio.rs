use crate::surface::MediaSurface;
use anyhow::Result;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::{fs::File, io::BufReader, path::Path, time::Duration};

/// Production media element backed by a rodio sink.
pub struct RodioSurface {
    sink: Sink,
    _stream: OutputStream,
}

impl RodioSurface {
    pub fn new() -> Result<Self> {
        let stream = OutputStreamBuilder::open_default_stream()?;
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self {
            sink,
            _stream: stream,
        })
    }

    /// Decode a file into the sink, replacing whatever is queued. The sink
    /// is left paused; playback starts on the next `play()`.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let file = File::open(path)?;
        let source = Decoder::new(BufReader::new(file))?;

        self.sink.clear();
        self.sink.append(source);

        Ok(())
    }
}

impl MediaSurface for RodioSurface {
    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn current_time(&self) -> f64 {
        self.sink.get_pos().as_secs_f64()
    }

    fn set_current_time(&mut self, secs: f64) {
        // Some decoders cannot seek; a failed seek leaves playback where
        // it was, which matches the bridge's silent-degrade policy.
        let _ = self.sink.try_seek(Duration::from_secs_f64(secs));
    }

    fn set_volume(&mut self, volume: f64) {
        self.sink.set_volume(volume as f32);
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.sink.set_speed(rate as f32);
    }
}
