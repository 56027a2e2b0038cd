//! Tool configuration: JSON config files and the flag-style command line.
pub mod blend;
