//! A dictionary lookup widget served to the browser.
//!
//! A search goes through [`app::App::submit`], which fetches the entry with the
//! `dictionary` crate, renders it into a [`view`] tree and stores it in the
//! [`document::Document`] that [`page`] turns into HTML.

pub mod app;
pub mod audio;
pub mod config;
pub mod document;
pub mod logging;
pub mod lookup;
pub mod page;
pub mod render;
pub mod state;
pub mod view;
pub mod web;
