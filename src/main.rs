use anyhow::Result;
use std::io::{self, BufRead};
use tremolo::{Bridge, PointerEvent, RodioSurface, SliderState};

/// Line-oriented stand-in for the UI host: maps stdin onto channel
/// commands and pointer events, pumping the bridge after each line.
fn main() -> Result<()> {
    let mut media = RodioSurface::new()?;
    if let Some(path) = std::env::args().nth(1) {
        media.load(path)?;
    }

    let slider = SliderState::new(100, 200.0);
    let (mut bridge, handle) = Bridge::new(Box::new(media), Box::new(slider));
    handle.spawn_control_surface(30.0)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();

        match (parts.next(), parts.next()) {
            (Some("play"), _) => handle.play()?,
            (Some("pause"), _) => handle.pause()?,
            (Some("vol"), Some(v)) => handle.set_volume(v.parse()?)?,
            (Some("rate"), Some(v)) => handle.set_playback_rate(v.parse()?)?,
            (Some("seek"), Some(v)) => handle.seek(v.parse()?)?,
            (Some("press"), Some(x)) => bridge.pointer_event(PointerEvent::Press { x: x.parse()? }),
            (Some("move"), Some(x)) => bridge.pointer_event(PointerEvent::Move { x: x.parse()? }),
            (Some("release"), _) => bridge.pointer_event(PointerEvent::Release),
            (Some("leave"), _) => bridge.pointer_event(PointerEvent::Leave),
            (Some("time"), _) => bridge.publish_current_time(),
            (Some("quit"), _) => break,
            _ => continue,
        }

        bridge.process_commands();
        for event in handle.poll_events() {
            println!("{event:?}");
        }
    }

    Ok(())
}
