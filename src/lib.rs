//! Momento Mori client core: a daily reminder of finite time.
//!
//! Momento turns a birth date and a life expectancy into mortality statistics
//! (days lived and remaining, life percentage, expected date) and keeps a
//! floating widget counting down to that date second by second. Goals and
//! reflections live on the same backend and are managed from the CLI.
//!
//! # Architecture
//!
//! - **Backend**: a remote JSON API behind the [`api::Backend`] trait
//! - **Session**: SQLite key-value store holding the onboarding flags
//! - **Widget**: a gesture state machine plus a refresh runner built from two
//!   tokio tasks (slow backend poll, fast local tick)
//!
//! # Modules
//!
//! - [`mortality`]: pure statistics calculator
//! - [`widget`]: floating countdown/quote widget
//! - [`api`]: HTTP client for the backend
//! - [`model`]: profile, goal, reflection and quote records
//! - [`session`]: session context and onboarding gate
//! - [`onboarding`]: onboarding form and flow
//! - [`config`]: configuration from TOML files and environment variables
//! - [`db`]: SQLite initialization, schema and health checks

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod mortality;
pub mod onboarding;
pub mod session;
pub mod widget;
