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

//! Procedural molecule geometry and view cycling for an educational
//! globe + molecule exhibit.
//!
//! Molecules are immutable atom/bond graphs. The DNA double helix is
//! generated from a handful of helix parameters; water, glucose, and a
//! simplified heme group are static tables. Everything is addressable by id
//! through a [`molecules::MoleculeRegistry`].
//!
//! # Key entry points
//!
//! - [`molecules::registry`] - the default molecule set, built on first use
//! - [`molecules::build_dna_helix`] - the procedural helix generator
//! - [`geometry::compute_bond_transform`] - cylinder placement for a bond
//! - [`scene::MoleculeScene`] - GPU-ready sphere/cylinder instances
//! - [`cycle::AutoCycle`] - unattended globe/molecule view cycling
//! - [`options::Options`] - runtime configuration (helix, geometry, display,
//!   colors, cycle timing) with TOML presets
//!
//! Rendering itself is out of scope: the crate produces instance data and
//! globe points, and talks to a globe renderer only through
//! [`globe::GlobeSurface`].

pub mod chem;
pub mod cycle;
pub mod error;
pub mod geometry;
pub mod globe;
pub mod molecules;
pub mod options;
pub mod scene;
