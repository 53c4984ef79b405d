//! UI module - layout, reusable painting helpers and animations

pub mod animation;
pub mod components;
pub mod layout;
