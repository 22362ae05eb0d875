//! Marginalia Server Library
//!
//! The server binary lives in main.rs; this crate root exposes the modules
//! needed by integration tests and by embedders of the viewer engine.
//!
//! # Modules
//!
//! - `annotations`: domain model (kinds, regions, palettes)
//! - `db`: SQLite persistence for the annotation store
//! - `routes`: REST surface of the store
//! - `viewer`: client-side session engine (selection gesture, overlay
//!   display list, creation menu, page navigation, store client)

pub mod annotations;
pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;
pub mod viewer;
