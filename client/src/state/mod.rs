//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `page` models the shell's single fetch and `playback` the timeline's
//! single-active-track player. Both are plain values held in signals so the
//! transitions stay testable without a browser.

pub mod page;
pub mod playback;
