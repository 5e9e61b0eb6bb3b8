//! Request handlers.

pub mod full;
pub mod health;
pub mod transcript;
pub mod video;

pub use full::*;
pub use health::*;
pub use transcript::*;
pub use video::*;
