//! # studio
//!
//! Leptos + WASM frontend for the PageForge visual page builder.
//!
//! This crate contains the builder page, its components (palette, canvas
//! host, outline, inspector, toolbar, status bar), and the application state
//! contexts. It integrates with the `builder` crate, which owns all document
//! and gesture logic: components map DOM events onto
//! `builder::engine::EditorCore` operations and re-derive their views from
//! the resulting state.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
