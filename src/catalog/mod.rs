//! # TCS catalogs
//!
//! A [`Catalog`] is an ordered arena of [`Target`]s sharing the fixed column
//! schema of [`CATALOG_COLUMNS`](crate::constants::CATALOG_COLUMNS). The
//! ordinal `num` of a target is never stored: it is its 1-based position in
//! the arena, so numbering is contiguous whatever the input mode.
//!
//! Modules
//! -----------------
//! * [`input_table`](crate::catalog::input_table) – Uploaded csv tables.
//! * [`assembler`](crate::catalog::assembler) – Builds a catalog from a name list or a table.
//! * [`writer`](crate::catalog::writer) – Tab-delimited serialization, `.cat` files and parsing back.
//!
//! Output schema
//! -----------------
//! ```text
//! num  Name  RA  Dec  Equinox  pmra  pmdec  rotang  rot_mode
//! RA_probe1  Dec_probe1  equinox  RA_probe2  Dec_probe2  "equinox "  epoch
//! ```
use std::fmt;

use crate::{
    constants::CATALOG_COLUMNS,
    conversion::NormalizedPosition,
    names::catalog_label,
    setup::SetupRow,
};

pub mod assembler;
pub mod input_table;
pub mod writer;

/// Proper motion cell of a catalog row.
#[derive(Debug, Clone, PartialEq)]
pub enum ProperMotion {
    /// Converted from a resolved value, in TCS units
    Computed(f64),
    /// Copied verbatim from an uploaded table or a parsed catalog
    Supplied(String),
}

impl fmt::Display for ProperMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProperMotion::Computed(value) => write!(f, "{value}"),
            ProperMotion::Supplied(text) => f.write_str(text),
        }
    }
}

/// One row of a TCS catalog, without its ordinal.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    /// Catalog label, see [`catalog_label`]
    pub name: String,
    /// Right ascension, colon-delimited sexagesimal
    pub ra: String,
    /// Declination, colon-delimited sexagesimal
    pub dec: String,
    /// Proper motion in RA, seconds of time per year
    pub pm_ra: ProperMotion,
    /// Proper motion in Dec, arcseconds per year
    pub pm_dec: ProperMotion,
    pub setup: SetupRow,
}

impl Target {
    /// Build a target from a resolved and normalized position.
    pub fn from_position(name: &str, position: NormalizedPosition, setup: SetupRow) -> Self {
        Target {
            name: catalog_label(name),
            ra: position.ra,
            dec: position.dec,
            pm_ra: ProperMotion::Computed(position.pm_ra),
            pm_dec: ProperMotion::Computed(position.pm_dec),
            setup,
        }
    }

    /// Cells of this target, in column order, with `num` as ordinal.
    pub fn record(&self, num: usize) -> Vec<String> {
        let setup = &self.setup;
        vec![
            num.to_string(),
            self.name.clone(),
            self.ra.clone(),
            self.dec.clone(),
            setup.equinox.clone(),
            self.pm_ra.to_string(),
            self.pm_dec.to_string(),
            setup.rotang.clone(),
            setup.rot_mode.clone(),
            setup.ra_probe1.clone(),
            setup.dec_probe1.clone(),
            setup.equinox_probe1.clone(),
            setup.ra_probe2.clone(),
            setup.dec_probe2.clone(),
            setup.equinox_probe2.clone(),
            setup.epoch.clone(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    targets: Vec<Target>,
}

impl Catalog {
    pub fn new(targets: Vec<Target>) -> Self {
        Catalog { targets }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn push(&mut self, target: Target) {
        self.targets.push(target);
    }

    /// Target with ordinal `num` (1-based).
    pub fn get(&self, num: usize) -> Option<&Target> {
        num.checked_sub(1).and_then(|idx| self.targets.get(idx))
    }

    /// Targets with their ordinal, in output order.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Target)> {
        self.targets.iter().enumerate().map(|(idx, t)| (idx + 1, t))
    }

    /// Header followed by one record per target.
    pub fn records(&self) -> Vec<Vec<String>> {
        std::iter::once(CATALOG_COLUMNS.iter().map(|c| c.to_string()).collect())
            .chain(self.numbered().map(|(num, target)| target.record(num)))
            .collect()
    }
}
