mod controller;
mod driver;
mod session;

pub use controller::{SessionController, NOTHING_TO_STOP};
pub use driver::{TickDriver, TICK_PERIOD};
pub use session::{Phase, Session, SessionConfig, TickSignal, IDLE_LABEL};
