// Standalone components (no primitives)
pub mod button;
pub mod card;
pub mod checklist;
pub mod input;

// Primitive wrappers
pub mod label;
pub mod toast;

// Re-exports for convenience
pub use button::*;
pub use card::*;
pub use checklist::*;
pub use input::*;
pub use label::*;
pub use toast::*;
