//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome, the about panel, and the timeline
//! grid. Only `timeline` owns state; the rest render what they are given.

pub mod about_section;
pub mod footer;
pub mod header;
pub mod loading_spinner;
pub mod timeline;
pub mod timeline_card;
