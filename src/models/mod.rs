pub mod draft;
pub mod project;

pub use draft::*;
pub use project::*;
