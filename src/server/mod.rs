//! Gateway daemon listener.

pub mod listener;
