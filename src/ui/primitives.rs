//! Primitives module - low-level Widget and canvas implementations
//!
//! Primitives know nothing about `crate::app`; components wire them to
//! messages.

pub mod arrow_gauge;
pub mod detail_badge;
pub mod drag_surface;
pub mod recipe_wheel;

pub use detail_badge::DetailBadge;
pub use drag_surface::drag_surface;
pub use recipe_wheel::RecipeWheel;
