mod core;
mod handle;
mod publisher;
mod router;

pub use self::core::Bridge;
pub use handle::BridgeHandle;
pub use publisher::EventPublisher;
pub use router::CommandRouter;
