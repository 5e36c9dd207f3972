//! Command handlers.
//!
//! Handlers take a [`CliContext`](crate::CliContext), delegate the work to
//! the download crate and format the result for the terminal.

pub mod run;
