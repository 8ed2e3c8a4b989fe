//! Database entities module

pub mod domain;
