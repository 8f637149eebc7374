mod controller;
mod event;

pub use controller::AppController;
pub use event::{fetch_sequence, Event, SessionId};
