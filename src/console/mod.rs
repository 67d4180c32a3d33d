//! Console front end: stdin prompts and stdout rendering.

mod prompt;
mod render;

pub use prompt::ConsolePrompter;
pub use render::{ConsoleRenderer, cube_diagram, grid_table};
