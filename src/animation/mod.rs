//! Iteration control: the tick driver and the loop that paces it

pub mod animator;
pub mod driver;
pub mod input;

pub use animator::{Animator, Pacer, RunSummary, StopHandle, ThreadPacer};
pub use driver::{Driver, DriverState, FrameLimit, IterationState, StopReason, Tick};
pub use input::{EventSource, KeyPacer, RawMode, TerminalEvents};
