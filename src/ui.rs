//! UI module for the recipe deck
//! Cards alternate between a dark and a light scheme
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Primitives** (`primitives`): Widget and canvas implementations
//! - **Components** (`components`): Card sections with Message handling
//! - **Pages** (`pages`): Full-window views composed from components

pub mod animation;
pub mod components;
pub mod icons;
pub mod pages;
pub mod primitives;
pub mod theme;
