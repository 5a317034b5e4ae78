//! pilcrow: editor macros as a library and a CLI.
//!
//! A personal command pack for text editors: comment banners, selection case
//! conversion, line sorting, console.log snippets, directory index
//! generation, and an import-section rewriter for JavaScript buffers. Every
//! command is a single synchronous transform over the active buffer,
//! reached through the [`host::Editor`] trait so a real editor integration,
//! the CLI's file-backed buffer, and tests all host the same code.
#![allow(clippy::multiple_crate_versions)]

pub mod case;
pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod imports;
