pub mod animator;
pub mod config;
pub mod constants;
pub mod nav;
pub mod particle;
pub mod reveal;
pub mod scroll;
pub mod surface;
pub mod theme;

pub use animator::*;
pub use config::*;
pub use nav::*;
pub use particle::*;
pub use reveal::*;
pub use scroll::*;
pub use surface::*;
pub use theme::*;
