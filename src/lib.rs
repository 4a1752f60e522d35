//! Conway's Game of Life on a bounded grid, driven by a fixed-period
//! evolve/present loop.

pub mod config;
pub mod enc;
pub mod error;
pub mod pos;
pub mod render_loop;
pub mod shell;
pub mod world;

pub use config::Config;
pub use enc::{PatternDecoder, RunLengthEncoded};
pub use error::{Error, Result};
pub use pos::Pos2;
pub use render_loop::{Canvas, LoopState, NoSurface, RenderLoop, SurfaceProvider, Tick};
pub use shell::Shell;
pub use world::World;
