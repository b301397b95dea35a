// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Procedural fullerene cages (C60, C70, C84) and the interactive state of
//! a ball-and-stick viewer for them.
//!
//! Atom positions come from parametric sampling of a sphere (or, for C70, a
//! Y-stretched ellipsoid); bonds connect every pair closer than a per-kind
//! distance threshold. The viewer side keeps rotation, spin, zoom and draw
//! mode as plain data and produces `bytemuck`-castable frame descriptions
//! for whatever presentation layer hosts it.
//!
//! # Key entry points
//!
//! - [`molecule::generate`] / [`molecule::Fullerene`] - cage geometry
//! - [`engine::ViewerEngine`] - command execution and per-frame update
//! - [`input::InputProcessor`] - raw events to [`engine::ViewerCommand`]s
//! - [`renderer::PreparedFrame`] - uniforms and instances for one draw
//! - [`options::Options`] - TOML-backed configuration

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod molecule;
pub mod options;
pub mod renderer;
pub mod util;
