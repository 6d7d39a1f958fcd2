pub mod constants;
pub mod controller;
pub mod effects;
pub mod links;
pub mod look;
pub mod motion;
pub mod page;
pub mod scheduler;
pub mod tuning;

pub use constants::*;
pub use controller::{CursorFx, Stage};
pub use effects::{MarkerKind, MarkerSpec};
pub use look::CursorLook;
pub use page::PageSurface;
pub use scheduler::{Scheduler, Task};
pub use tuning::Tuning;
