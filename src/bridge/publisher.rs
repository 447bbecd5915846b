use crate::message::Event;
use crossbeam_channel::Sender;

/// Stateless relay onto the outbound channel. One input, one event; no
/// buffering or debouncing, so the UI sees the gesture's full cadence.
pub struct EventPublisher {
    events: Sender<Event>,
}

impl EventPublisher {
    pub(crate) fn new(events: Sender<Event>) -> Self {
        Self { events }
    }

    pub fn volume_changed(&self, value: f64) {
        let _ = self.events.send(Event::VolumeChanged(value));
    }

    pub fn current_time_changed(&self, secs: f64) {
        let _ = self.events.send(Event::CurrentTimeChanged(secs));
    }
}
