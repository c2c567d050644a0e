//! Line editor support for interactive sessions.

pub mod helper;
