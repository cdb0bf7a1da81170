//! # resurtech-site
//!
//! Headless widgets for the Resurtech outreach site, a nonprofit that
//! refurbishes donated laptops.
//!
//! The interactive parts of the site run here as plain state machines driven
//! by a single-threaded tokio event loop: a looping testimonial carousel, impact
//! counters that count up the first time they are seen, and the outreach
//! forms with their required-field checks and confirmation toasts.
//!
//! ## Core Systems
//!
//! - **[`widgets`]**: Carousel (clone-and-jump looping slider) and Counter
//! - **[`widget`]**: Widget trait, lifecycle tracking, widget ids
//! - **[`event`]**: Widget events, commands, local event queue
//! - **[`task`]**: Cancellable timers and frame loops owned by widgets
//! - **[`app`]**: Widget host and event loop
//! - **[`forms`]**: Outreach forms, validation, notifications
//! - **[`config`]**: TOML site configuration
//! - **[`content`]**: Testimonials and impact statistics
//! - **[`home`]**: Home page assembly
//! - **[`geometry`]**: Carousel track geometry
//! - **[`testing`]**: Headless Pilot and snapshot helpers

// Foundation
pub mod error;
pub mod geometry;

// Content and configuration
pub mod config;
pub mod content;

// Widget system
pub mod widget;
pub mod widgets;

// Events and scheduling
pub mod event;
pub mod task;

// Application
pub mod app;
pub mod home;

// Forms
pub mod forms;

// Testing
pub mod testing;

pub use error::{Error, Result};
