//! Command handlers

pub mod category;
pub mod config;
pub mod io;
pub mod quote;
pub mod status;
pub mod sync;
