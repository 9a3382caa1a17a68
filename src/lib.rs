pub mod camera;
pub mod cli;
pub mod diagnostics;
pub mod frame;
pub mod input;
pub mod math;
pub mod renderer;
pub mod texture;
pub mod types;
