//! Tomato Timer - a Pomodoro work/relax countdown for the terminal
//!
//! The `timer` module holds the state machine and the seams it talks
//! through; everything else wires it to a ratatui screen, a config file and
//! a log file.

pub mod app;
pub mod config;
pub mod logging;
pub mod timer;
pub mod ui;
