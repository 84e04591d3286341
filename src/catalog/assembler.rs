//! # Catalog assembly
//!
//! [`CatalogAssembler`] turns observer input into a [`Catalog`]. Three input
//! modes share the same resolver, normalizer and output schema:
//!
//! | Mode | Input | Positions | Setup fields |
//! |------|-------|-----------|--------------|
//! | [`InputMode::FullTable`] | csv with an `RA` column | copied verbatim | copied verbatim |
//! | [`InputMode::PartialTable`] | csv without `RA` | resolved per row | copied verbatim |
//! | [`InputMode::ManualEntry`] | comma-separated names | resolved per name | broadcast from [`SetupInput`] |
//!
//! Names that cannot be resolved are handled by an [`UnresolvedPolicy`]:
//! with [`UnresolvedPolicy::Isolate`] they are reported in
//! [`CatalogOutcome::unresolved`] and left out of the catalog, with
//! [`UnresolvedPolicy::Abort`] the first one ends the invocation.
//!
//! Setup fields are checked before the first resolver call, so a bad list
//! length never costs a network round-trip.
use log::{info, warn};

use crate::{
    conversion::normalize,
    names::{catalog_label, sanitize_name, split_name_list},
    setup::{broadcast_all, SetupInput, SetupRow},
    simbad::NameResolver,
    tcs_errors::TcsCatError,
};

use super::{input_table::InputTable, Catalog, ProperMotion, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    FullTable,
    PartialTable,
    ManualEntry,
}

impl InputMode {
    /// Policy applied when none is requested: manual entry skips unknown
    /// names, table uploads stop on the first one.
    pub fn default_policy(&self) -> UnresolvedPolicy {
        match self {
            InputMode::ManualEntry => UnresolvedPolicy::Isolate,
            InputMode::FullTable | InputMode::PartialTable => UnresolvedPolicy::Abort,
        }
    }
}

/// What to do with a name the resolver cannot find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedPolicy {
    /// Report the name and go on with the next one
    Isolate,
    /// Stop and return the resolver error
    Abort,
}

/// A name left out of the catalog, with the reason.
#[derive(Debug)]
pub struct Unresolved {
    pub name: String,
    pub error: TcsCatError,
}

#[derive(Debug)]
pub struct CatalogOutcome {
    pub mode: InputMode,
    pub catalog: Catalog,
    pub unresolved: Vec<Unresolved>,
}

impl CatalogOutcome {
    fn new(mode: InputMode) -> Self {
        CatalogOutcome {
            mode,
            catalog: Catalog::default(),
            unresolved: Vec::new(),
        }
    }

    /// True when every input name made it into the catalog.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    fn finish(self) -> Result<Self, TcsCatError> {
        if self.catalog.is_empty() {
            return Err(if self.unresolved.is_empty() {
                TcsCatError::EmptyNameList
            } else {
                TcsCatError::NoTargetResolved
            });
        }
        info!(
            "Catalog assembled with {} targets ({} unresolved)",
            self.catalog.len(),
            self.unresolved.len()
        );
        Ok(self)
    }
}

pub struct CatalogAssembler<'a, R: NameResolver + ?Sized> {
    resolver: &'a R,
}

impl<'a, R: NameResolver + ?Sized> CatalogAssembler<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        CatalogAssembler { resolver }
    }

    /// Build a catalog from a comma-separated list of names (manual entry).
    ///
    /// Arguments
    /// -----------------
    /// * `names`: names as typed or read from a text file
    /// * `setup`: raw text of every setup field, broadcast over the names
    /// * `policy`: handling of names the resolver cannot find
    ///
    /// Return
    /// ----------
    /// * the [`CatalogOutcome`], or an error if the list is empty, a setup
    ///   field does not broadcast, or a name fails under [`UnresolvedPolicy::Abort`]
    pub fn from_names(
        &self,
        names: &str,
        setup: &SetupInput,
        policy: UnresolvedPolicy,
    ) -> Result<CatalogOutcome, TcsCatError> {
        let names = split_name_list(names);
        if names.is_empty() {
            return Err(TcsCatError::EmptyNameList);
        }

        let setups = broadcast_all(setup, names.len())?;

        let mut outcome = CatalogOutcome::new(InputMode::ManualEntry);
        for (name, setup) in names.iter().zip(setups) {
            self.resolve_into(name, setup, policy, &mut outcome)?;
        }
        outcome.finish()
    }

    /// Build a catalog from an uploaded table, choosing the full or partial
    /// mode from the presence of an `RA` column.
    ///
    /// `policy` only matters in partial mode; `None` picks the mode's default.
    pub fn from_table(
        &self,
        table: &InputTable,
        policy: Option<UnresolvedPolicy>,
    ) -> Result<CatalogOutcome, TcsCatError> {
        if table.is_empty() {
            return Err(TcsCatError::EmptyNameList);
        }

        if table.is_full() {
            full_table(table)
        } else {
            let policy = policy.unwrap_or(InputMode::PartialTable.default_policy());
            self.partial_table(table, policy)
        }
    }

    fn partial_table(
        &self,
        table: &InputTable,
        policy: UnresolvedPolicy,
    ) -> Result<CatalogOutcome, TcsCatError> {
        let rows = table.setup_rows()?;

        let mut outcome = CatalogOutcome::new(InputMode::PartialTable);
        for (idx, row) in rows.iter().enumerate() {
            let Some(name) = row_name(idx, &row.name) else {
                continue;
            };
            self.resolve_into(&name, row.setup(), policy, &mut outcome)?;
        }
        outcome.finish()
    }

    fn resolve_into(
        &self,
        name: &str,
        setup: SetupRow,
        policy: UnresolvedPolicy,
        outcome: &mut CatalogOutcome,
    ) -> Result<(), TcsCatError> {
        match self.resolver.resolve(name) {
            Ok(resolved) => {
                let position = normalize(
                    &resolved.ra,
                    &resolved.dec,
                    resolved.pm_ra,
                    resolved.pm_dec,
                );
                outcome
                    .catalog
                    .push(Target::from_position(name, position, setup));
                Ok(())
            }
            Err(error) => match policy {
                UnresolvedPolicy::Abort => Err(error),
                UnresolvedPolicy::Isolate => {
                    warn!("Could not find {name}: {error}");
                    outcome.unresolved.push(Unresolved {
                        name: name.to_string(),
                        error,
                    });
                    Ok(())
                }
            },
        }
    }
}

/// Sanitized name of a table row, `None` (with a warning) when blank.
fn row_name(idx: usize, raw: &str) -> Option<String> {
    let name = sanitize_name(raw);
    if name.is_empty() {
        warn!("Skipping row {} of the uploaded table: no name", idx + 1);
        return None;
    }
    Some(name)
}

/// Copy a fully populated table into a catalog, renumbering its rows.
fn full_table(table: &InputTable) -> Result<CatalogOutcome, TcsCatError> {
    let positions = table.position_rows()?;
    let rows = table.setup_rows()?;

    let mut outcome = CatalogOutcome::new(InputMode::FullTable);
    for (idx, (row, position)) in rows.iter().zip(positions).enumerate() {
        let Some(name) = row_name(idx, &row.name) else {
            continue;
        };
        outcome.catalog.push(Target {
            name: catalog_label(&name),
            ra: position.ra,
            dec: position.dec,
            pm_ra: ProperMotion::Supplied(position.pm_ra),
            pm_dec: ProperMotion::Supplied(position.pm_dec),
            setup: row.setup(),
        });
    }
    outcome.finish()
}
