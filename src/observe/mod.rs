pub mod event;
pub mod observer;

pub use event::Event;
pub use observer::{Observer, NoopObserver, TracingObserver};
