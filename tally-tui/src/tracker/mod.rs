mod color;
mod interval;
mod registry;
mod timer;

pub use color::{StandardColor, TaskColor};
pub use registry::TaskRegistry;
