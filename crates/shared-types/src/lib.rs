pub mod error;

// Form state, independent of any UI framework
pub mod layers;
pub mod numeric_field;
pub mod sidebar;
pub mod training;

pub use error::*;
pub use layers::*;
pub use numeric_field::*;
pub use sidebar::*;
pub use training::*;
