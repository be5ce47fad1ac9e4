pub mod components;
pub mod config;
pub mod fsm;
pub mod geometry;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use geometry::*;
pub use render::*;
pub use resources::*;
pub use session::*;
