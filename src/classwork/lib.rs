//! # Classwork Architecture
//!
//! Classwork is a small library of object-design exercises with a CLI client on
//! top: decorated room pricing, product catalogue filtering, and a persisted
//! student roster.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, sets up logging, prints, exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade, names → typed values                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One function per operation, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (rooms/, products/, students/) + Storage (store/)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Logging goes through `tracing`; installing a subscriber is the binary's job.
//!
//! ## Module Overview
//!
//! - [`rooms`]: the `Room` capability, base room classes, amenity decorators
//! - [`products`]: products, collections and filters
//! - [`students`]: student records and the ordered roster
//! - [`store`]: roster storage abstraction and implementations
//! - [`commands`]: business operations returning `CmdResult`
//! - [`api`]: the facade used by clients
//! - [`config`]: configuration file handling
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod products;
pub mod rooms;
pub mod store;
pub mod students;
