use crate::{
    bridge::{BridgeHandle, CommandRouter, EventPublisher},
    gesture::{DragPhase, GestureTracker, PointerEvent},
    message::Command,
    surface::{MediaSurface, SliderSurface, SurfaceAdapter},
};
use crossbeam_channel::Receiver;

/// Composition root: one channel pair, one router, one drag session slot.
///
/// The host owns the bridge and pumps it from its dispatch loop; the
/// matching [`BridgeHandle`] goes to the UI layer. Everything runs
/// synchronously inside the caller's thread, one message at a time.
pub struct Bridge {
    commands: Receiver<Command>,
    router: CommandRouter,
    publisher: EventPublisher,
    session: Option<GestureTracker>,
}

impl Bridge {
    pub fn new(
        media: Box<dyn MediaSurface>,
        slider: Box<dyn SliderSurface>,
    ) -> (Self, BridgeHandle) {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded();
        let (evt_tx, evt_rx) = crossbeam_channel::unbounded();

        let bridge = Bridge {
            commands: cmd_rx,
            router: CommandRouter::new(SurfaceAdapter::new(media, slider)),
            publisher: EventPublisher::new(evt_tx),
            session: None,
        };

        (bridge, BridgeHandle::new(cmd_tx, evt_rx))
    }

    /// Drain pending commands in arrival order, each to completion.
    pub fn process_commands(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            self.dispatch(command);
        }
    }

    /// Direct entry for hosts that deliver messages one at a time.
    pub fn dispatch(&mut self, command: Command) {
        self.router.dispatch(command, &mut self.session);
    }

    /// Feed one pointer event from the slider control. Dropped silently
    /// until `SpawnControlSurface` has created the drag session.
    pub fn pointer_event(&mut self, event: PointerEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let geometry = self.router.geometry();
        if let Some(value) = session.track(event, geometry) {
            self.router.apply_gesture_value(value);
            self.publisher.volume_changed(value);
        }
    }

    /// Emit the surface's current position. Called on the host's tick;
    /// the bridge itself never schedules anything.
    pub fn publish_current_time(&mut self) {
        self.publisher
            .current_time_changed(self.router.current_time());
    }

    pub fn drag_phase(&self) -> DragPhase {
        match &self.session {
            Some(session) => session.phase(),
            None => DragPhase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Event;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Default)]
    struct MediaProbe {
        volume: f64,
        rate: f64,
        position: f64,
        playing: bool,
        play_calls: usize,
        pause_calls: usize,
    }

    #[derive(Clone, Default)]
    struct SharedMedia(Rc<RefCell<MediaProbe>>);

    impl MediaSurface for SharedMedia {
        fn play(&mut self) {
            let mut probe = self.0.borrow_mut();
            probe.playing = true;
            probe.play_calls += 1;
        }

        fn pause(&mut self) {
            let mut probe = self.0.borrow_mut();
            probe.playing = false;
            probe.pause_calls += 1;
        }

        fn current_time(&self) -> f64 {
            self.0.borrow().position
        }

        fn set_current_time(&mut self, secs: f64) {
            self.0.borrow_mut().position = secs;
        }

        fn set_volume(&mut self, volume: f64) {
            self.0.borrow_mut().volume = volume;
        }

        fn set_playback_rate(&mut self, rate: f64) {
            self.0.borrow_mut().rate = rate;
        }
    }

    struct SliderProbe {
        value: f64,
        max: u32,
        width_px: f64,
    }

    #[derive(Clone)]
    struct SharedSlider(Rc<RefCell<SliderProbe>>);

    impl SharedSlider {
        fn new(max: u32, width_px: f64) -> Self {
            Self(Rc::new(RefCell::new(SliderProbe {
                value: 0.0,
                max,
                width_px,
            })))
        }
    }

    impl SliderSurface for SharedSlider {
        fn value(&self) -> f64 {
            self.0.borrow().value
        }

        fn set_value(&mut self, value: f64) {
            self.0.borrow_mut().value = value;
        }

        fn max_value(&self) -> u32 {
            self.0.borrow().max
        }

        fn width_px(&self) -> f64 {
            self.0.borrow().width_px
        }
    }

    fn wired() -> (Bridge, BridgeHandle, SharedMedia, SharedSlider) {
        let media = SharedMedia::default();
        let slider = SharedSlider::new(100, 200.0);
        let (bridge, handle) = Bridge::new(Box::new(media.clone()), Box::new(slider.clone()));
        (bridge, handle, media, slider)
    }

    #[test]
    fn set_volume_scales_to_the_surface() {
        let (mut bridge, handle, media, _) = wired();

        for value in [0.0, 25.0, 30.0, 100.0] {
            handle.set_volume(value).unwrap();
            bridge.process_commands();
            assert!((media.0.borrow().volume - value / 100.0).abs() < 1e-9);
        }

        // Out-of-range input clamps at the boundary, never pass-through.
        bridge.dispatch(Command::SetVolume(250.0));
        assert_eq!(media.0.borrow().volume, 1.0);

        bridge.dispatch(Command::SetVolume(-20.0));
        assert_eq!(media.0.borrow().volume, 0.0);
    }

    #[test]
    fn drag_scenario_press_move_release() {
        let (mut bridge, handle, media, slider) = wired();

        bridge.dispatch(Command::SpawnControlSurface(50.0));

        bridge.pointer_event(PointerEvent::Press { x: 0.0 });
        bridge.pointer_event(PointerEvent::Move { x: 100.0 });
        bridge.pointer_event(PointerEvent::Release);

        assert_eq!(
            handle.poll_events(),
            vec![Event::VolumeChanged(0.0), Event::VolumeChanged(50.0)]
        );
        assert_eq!(media.0.borrow().volume, 0.5);
        assert_eq!(slider.value(), 50.0);
        assert_eq!(bridge.drag_phase(), DragPhase::Idle);
    }

    #[test]
    fn spawn_sets_default_volume_and_arms_the_gesture_path() {
        let (mut bridge, handle, media, _) = wired();

        // Before spawn: pointer events change nothing and emit nothing.
        bridge.pointer_event(PointerEvent::Press { x: 100.0 });
        bridge.pointer_event(PointerEvent::Move { x: 100.0 });
        assert!(handle.poll_events().is_empty());
        assert_eq!(media.0.borrow().volume, 0.0);
        assert_eq!(bridge.drag_phase(), DragPhase::Idle);

        handle.spawn_control_surface(30.0).unwrap();
        bridge.process_commands();
        assert!((media.0.borrow().volume - 0.30).abs() < 1e-9);

        bridge.pointer_event(PointerEvent::Press { x: 100.0 });
        assert_eq!(handle.poll_events(), vec![Event::VolumeChanged(50.0)]);
    }

    #[test]
    fn hover_moves_without_a_press_touch_nothing() {
        let (mut bridge, handle, media, slider) = wired();
        bridge.dispatch(Command::SpawnControlSurface(30.0));
        let volume_after_spawn = media.0.borrow().volume;

        bridge.pointer_event(PointerEvent::Move { x: 150.0 });
        bridge.pointer_event(PointerEvent::Move { x: 20.0 });

        assert!(handle.poll_events().is_empty());
        assert_eq!(media.0.borrow().volume, volume_after_spawn);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn leave_mid_drag_ends_the_session_like_release() {
        let (mut bridge, handle, _, _) = wired();
        bridge.dispatch(Command::SpawnControlSurface(30.0));

        bridge.pointer_event(PointerEvent::Press { x: 40.0 });
        assert_eq!(bridge.drag_phase(), DragPhase::Dragging);
        assert_eq!(handle.poll_events(), vec![Event::VolumeChanged(20.0)]);

        bridge.pointer_event(PointerEvent::Leave);
        assert_eq!(bridge.drag_phase(), DragPhase::Idle);

        // The session is over; a trailing move emits nothing.
        bridge.pointer_event(PointerEvent::Move { x: 180.0 });
        assert!(handle.poll_events().is_empty());
    }

    #[test]
    fn play_and_pause_are_idempotent() {
        let (mut bridge, handle, media, _) = wired();

        handle.play().unwrap();
        handle.play().unwrap();
        bridge.process_commands();
        assert!(media.0.borrow().playing);
        assert_eq!(media.0.borrow().play_calls, 2);

        handle.pause().unwrap();
        handle.pause().unwrap();
        bridge.process_commands();
        assert!(!media.0.borrow().playing);
        assert_eq!(media.0.borrow().pause_calls, 2);
    }

    #[test]
    fn invalid_seek_and_rate_inputs_are_dropped() {
        let (mut bridge, _, media, _) = wired();

        bridge.dispatch(Command::Seek(42.0));
        assert_eq!(media.0.borrow().position, 42.0);

        bridge.dispatch(Command::Seek(-5.0));
        bridge.dispatch(Command::Seek(f64::NAN));
        assert_eq!(media.0.borrow().position, 42.0);

        bridge.dispatch(Command::SetPlaybackRate(1.25));
        assert_eq!(media.0.borrow().rate, 1.25);

        bridge.dispatch(Command::SetPlaybackRate(0.0));
        bridge.dispatch(Command::SetPlaybackRate(-1.0));
        bridge.dispatch(Command::SetPlaybackRate(f64::INFINITY));
        assert_eq!(media.0.borrow().rate, 1.25);
    }

    #[test]
    fn commands_are_processed_in_arrival_order() {
        let (mut bridge, handle, media, _) = wired();

        handle.set_volume(10.0).unwrap();
        handle.set_volume(80.0).unwrap();
        handle.set_volume(45.0).unwrap();
        bridge.process_commands();

        assert_eq!(media.0.borrow().volume, 0.45);
    }

    #[test]
    fn current_time_is_published_on_request() {
        let (mut bridge, handle, media, _) = wired();

        media.0.borrow_mut().position = 12.5;
        bridge.publish_current_time();

        assert_eq!(handle.poll_events(), vec![Event::CurrentTimeChanged(12.5)]);
    }

    #[test]
    fn stale_geometry_emits_no_event() {
        let (mut bridge, handle, media, slider) = wired();
        bridge.dispatch(Command::SpawnControlSurface(30.0));
        slider.0.borrow_mut().width_px = 0.0;

        bridge.pointer_event(PointerEvent::Press { x: 50.0 });
        bridge.pointer_event(PointerEvent::Move { x: 50.0 });

        assert!(handle.poll_events().is_empty());
        assert!((media.0.borrow().volume - 0.30).abs() < 1e-9);
    }
}
