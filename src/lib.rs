//! Static page generator for informal hockey betting pools.
//!
//! Consumes an upstream-produced `data.json` and renders self-contained HTML
//! pages: a plain goal tracker, a time-windowed bet tracker, and a playoff
//! pool with pass-through standings tables.

pub mod config;
pub mod loader;
pub mod logging;
pub mod model;
pub mod render;
pub mod site;
pub mod view;
