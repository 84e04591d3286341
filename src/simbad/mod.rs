//! # Name resolution
//!
//! The catalog assembler never talks to the network directly: it asks a
//! [`NameResolver`] for the position and proper motion of each target. The
//! production implementation is [`SimbadResolver`], backed by the SIMBAD
//! script interface (see [`simbad_request`]); tests plug in their own
//! in-memory resolvers.
//!
//! A failed resolution is always an `Err` for that one name. Whether the
//! failure aborts the whole catalog or is only reported is decided by the
//! assembler, not by the resolver.

pub mod simbad_request;

use crate::{constants::MilliArcSec, env_state::TcsCatEnv, tcs_errors::TcsCatError};

/// First match returned by the name-resolution service for a name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTarget {
    /// Right ascension, space-delimited sexagesimal
    pub ra: String,
    /// Declination, space-delimited sexagesimal
    pub dec: String,
    /// Proper motion in RA, mas/yr
    pub pm_ra: MilliArcSec,
    /// Proper motion in Dec, mas/yr
    pub pm_dec: MilliArcSec,
}

/// Resolve a sanitized target name into a sky position and proper motion.
pub trait NameResolver {
    /// Arguments
    /// ---------
    /// * `name`: a sanitized target name (see [`crate::names::sanitize_name`])
    ///
    /// Return
    /// ------
    /// * the first match, or [`TcsCatError::NameNotFound`] when the service
    ///   knows no such object
    fn resolve(&self, name: &str) -> Result<ResolvedTarget, TcsCatError>;
}

/// [`NameResolver`] querying SIMBAD, one blocking request per name.
#[derive(Debug, Clone, Default)]
pub struct SimbadResolver {
    env_state: TcsCatEnv,
}

impl SimbadResolver {
    pub fn new(env_state: TcsCatEnv) -> Self {
        SimbadResolver { env_state }
    }
}

impl NameResolver for SimbadResolver {
    fn resolve(&self, name: &str) -> Result<ResolvedTarget, TcsCatError> {
        let response = simbad_request::request_object(name, &self.env_state)?;
        simbad_request::deserialize_object(name, &response)
    }
}
