// Form inputs
pub mod number_input;
pub mod number_input_field;

// Training sidebar
pub mod layer_list;
pub mod sidebar;

// Re-exports for convenience
pub use layer_list::*;
pub use number_input::*;
pub use number_input_field::*;
pub use sidebar::*;
