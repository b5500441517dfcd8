pub mod combat;
pub mod movement;
pub mod render;
pub mod spells;
pub mod turns;

pub use combat::*;
pub use movement::*;
pub use render::*;
pub use spells::*;
pub use turns::*;
