//! Terminal front end for the tic-tac-toe engine
//!
//! This module renders the board, status line and move list, and turns
//! typed commands into engine operations.

pub mod commands;
pub mod config;
pub mod output;
pub mod session;
