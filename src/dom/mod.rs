// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod builder;
pub mod element;
pub mod events;
pub mod incremental;

pub use builder::*;
pub use element::*;
pub use events::*;
