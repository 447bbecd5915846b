mod command;
mod event;

pub use command::Command;
pub use event::Event;
