//! Core, DOM-free primitives and helpers for the Web UI.
pub mod preferences;
pub mod routes;
pub mod storage;
pub mod theme;
