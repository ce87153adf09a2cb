pub mod animation;
pub mod constants;
pub mod derivative;
pub mod error;
pub mod function;
pub mod integral;
pub mod sampler;
pub mod scene;
pub mod style;
pub mod svg;
pub mod viewport;

pub use animation::*;
pub use derivative::{Secant, SecantReadout};
pub use error::{ControlError, ControlResult};
pub use integral::{AreaReadout, RiemannRect, RiemannSum};
pub use sampler::CurveSampler;
pub use scene::{render, Readout, Scene, Shape};
pub use style::{ButtonStyle, ControlStyles};
pub use viewport::ViewportConfig;
