//! # tcs_catalog
//!
//! Build observing catalogs for a telescope control system (TCS) from a list
//! of target names or an uploaded parameter table.
//!
//! For every target the position and proper motion are resolved by name
//! ([`simbad`]), converted to TCS notation and units ([`conversion`]), merged
//! with the telescope setup fields ([`setup`]) and written as one row of a
//! tab-delimited `.cat` file ([`catalog`]).
//!
//! ```rust,no_run
//! use tcs_catalog::{
//!     catalog::{assembler::{CatalogAssembler, UnresolvedPolicy}, writer::serialize},
//!     env_state::{ResolverConfig, TcsCatEnv},
//!     setup::SetupInput,
//!     simbad::SimbadResolver,
//! };
//!
//! # fn run() -> Result<(), tcs_catalog::tcs_errors::TcsCatError> {
//! let resolver = SimbadResolver::new(TcsCatEnv::new(ResolverConfig::default()));
//! let outcome = CatalogAssembler::new(&resolver).from_names(
//!     "alf Sco, HD 218434",
//!     &SetupInput::default(),
//!     UnresolvedPolicy::Isolate,
//! )?;
//! print!("{}", serialize(&outcome.catalog)?);
//! # Ok(())
//! # }
//! ```
pub mod catalog;
pub mod constants;
pub mod conversion;
pub mod env_state;
pub mod names;
pub mod setup;
pub mod simbad;
pub mod tcs_errors;
