//! Game events and observers.
//!
//! The engine reports what happens through `Observer::on_event`. Observers
//! are for reporting only: spectating a game, recording it, or nothing at
//! all.

mod event;
mod observer;
mod spectator;

pub use event::GameEvent;
pub use observer::{EventLog, NullObserver, Observer};
pub use spectator::Spectator;
