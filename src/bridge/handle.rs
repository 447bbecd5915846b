use crate::message::{Command, Event};
use anyhow::Result;
use crossbeam_channel::{Receiver, Sender};

/// The UI layer's end of the channel: one sender method per command, plus
/// event polling. Lives wherever the UI lives; the `Bridge` stays with the
/// host's dispatch loop.
pub struct BridgeHandle {
    commands: Sender<Command>,
    events: Receiver<Event>,
}

impl BridgeHandle {
    pub(crate) fn new(commands: Sender<Command>, events: Receiver<Event>) -> Self {
        Self { commands, events }
    }

    pub fn play(&self) -> Result<()> {
        self.commands.send(Command::Play)?;
        Ok(())
    }

    pub fn pause(&self) -> Result<()> {
        self.commands.send(Command::Pause)?;
        Ok(())
    }

    /// `value` is on the channel's 0–100 scale.
    pub fn set_volume(&self, value: f64) -> Result<()> {
        self.commands.send(Command::SetVolume(value))?;
        Ok(())
    }

    pub fn set_playback_rate(&self, rate: f64) -> Result<()> {
        self.commands.send(Command::SetPlaybackRate(rate))?;
        Ok(())
    }

    pub fn seek(&self, secs: f64) -> Result<()> {
        self.commands.send(Command::Seek(secs))?;
        Ok(())
    }

    pub fn spawn_control_surface(&self, default_volume: f64) -> Result<()> {
        self.commands.send(Command::SpawnControlSurface(default_volume))?;
        Ok(())
    }

    /// Raw endpoint for messages deserialized off an external channel.
    pub fn send(&self, command: Command) -> Result<()> {
        self.commands.send(command)?;
        Ok(())
    }

    pub fn poll_events(&self) -> Vec<Event> {
        std::iter::from_fn(|| self.events.try_recv().ok()).collect()
    }
}
