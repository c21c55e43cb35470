//! Data model split into separate files.
//! This module re-exports the individual model modules so callers can use
//! `crate::models::Event` etc. directly.

pub mod event;

pub use self::event::*;
