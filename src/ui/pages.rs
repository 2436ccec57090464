//! Pages module
//! Full-page views for the recipe deck

pub mod deck;
pub mod detail;
pub mod status;
