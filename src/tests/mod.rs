//! integrated tests
pub mod toolkit;

mod replay;
