//! Small helpers shared by services and domain models.

pub mod answer;
pub mod parse;
