//! UI module - contains UI rendering components
//!
//! Painter helpers shared by the app views live here.

pub mod components;
