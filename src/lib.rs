//! Core service layer for the event administration dashboard.
//!
//! The crate talks to the events REST backend and hands the UI layer
//! plain data: a typed fetch/create gateway ([`EventService`]), a pure
//! transform from backend records to the normalized [`Event`] model with
//! its derived lifecycle status, a create-form validator, and an embedded
//! mock data set for offline fallback. Rendering, routing and
//! notifications are the caller's problem; everything here either
//! returns data or fails with one of the [`AppError`] kinds.

pub mod config;
pub mod error;
pub mod i18n;
pub mod mock;
pub mod models;
pub mod services;
pub mod transform;
pub mod validation;

pub use config::{ApiConfig, AssetConfig, Config, ConfigError};
pub use error::{AppError, AppResult};
pub use models::{AssetRef, Event, EventDraft, EventFilter, EventStatus, RawEvent};
pub use services::EventService;
pub use transform::{transform, transform_at};
pub use validation::{validate, ValidationReport};
