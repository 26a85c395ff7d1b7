mod component;
mod document;
mod error;
mod frame;
mod render;
pub mod scale;
mod state;
mod types;

pub use component::RiskGraph;
pub use scale::VisualScale;
pub use types::{GraphScene, RenderMode};
