mod api;
mod capi;
mod engine;
mod err;
mod log;
mod msgs;
mod render;
mod rhythm;
mod sinks;

extern crate rosc;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

pub use crate::api::{simulate, Machine, Simulation, Sink};
pub use crate::capi::{tala_free, tala_simulate};
pub use crate::engine::{Engine, DEFAULT_STEPS};
pub use crate::err::{Error, RuntimeErr, SysErr};
pub use crate::log::{ConsoleLogger, FileLogger, LogBackend, LogMessage, Logger};
pub use crate::msgs::{Beat, Command};
pub use crate::render::{frame, Cell, Frame, Rgb, MARKER_COLOR, PULSE_COLOR, REST_COLOR};
pub use crate::rhythm::{distribute, rotate};
pub use crate::sinks::Backend;
