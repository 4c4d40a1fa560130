//! paperfig — static PNG figure generation for the paper's typeset document.
//!
//! Two terminal producers share this library: the `paperfig` driver renders
//! the four analysis figures, `handshake_diagram` renders the sequence
//! diagram. Nothing here persists beyond a run; every module fabricates or
//! lays out data and hands it to plotters.

pub mod config;
pub mod dist;
pub mod figures;
pub mod graph;
pub mod seq;
pub mod stats;
