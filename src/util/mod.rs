//! Internal helpers that are not part of the public API.
pub mod debug;
pub mod resolve;
pub mod sys;
