//! # Telescope setup parameters
//!
//! Every target of a catalog carries ten setup fields besides its position:
//! the equinox of its coordinates, rotator angle and mode, two guide-probe
//! positions with their equinoxes, and the epoch.
//!
//! In manual entry each field is typed once, either as a single value applying
//! to every target or as a comma-separated list with one value per target.
//! [`broadcast`] expands one such text into exactly one value per target and
//! [`broadcast_all`] does it for a whole [`SetupInput`].
//!
//! Values are trimmed. Date-like fields (equinoxes and epoch) additionally
//! lose any interior space, so `"2000, 20 15"` gives `["2000", "2015"]`.
use std::collections::HashMap;

use itertools::Itertools;

use crate::{
    constants::{
        DEFAULT_EPOCH, DEFAULT_EQUINOX, DEFAULT_PROBE_COORD, DEFAULT_ROTANG, DEFAULT_ROT_MODE,
    },
    tcs_errors::TcsCatError,
};

/// Separator of the values of a per-target list
const LIST_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetupField {
    Equinox,
    Rotang,
    RotMode,
    RaProbe1,
    DecProbe1,
    EquinoxProbe1,
    RaProbe2,
    DecProbe2,
    EquinoxProbe2,
    Epoch,
}

impl SetupField {
    /// All setup fields, in catalog column order.
    pub const ALL: [SetupField; 10] = [
        SetupField::Equinox,
        SetupField::Rotang,
        SetupField::RotMode,
        SetupField::RaProbe1,
        SetupField::DecProbe1,
        SetupField::EquinoxProbe1,
        SetupField::RaProbe2,
        SetupField::DecProbe2,
        SetupField::EquinoxProbe2,
        SetupField::Epoch,
    ];

    /// Header of the catalog column holding this field.
    pub fn column(&self) -> &'static str {
        match self {
            SetupField::Equinox => "Equinox",
            SetupField::Rotang => "rotang",
            SetupField::RotMode => "rot_mode",
            SetupField::RaProbe1 => "RA_probe1",
            SetupField::DecProbe1 => "Dec_probe1",
            SetupField::EquinoxProbe1 => "equinox",
            SetupField::RaProbe2 => "RA_probe2",
            SetupField::DecProbe2 => "Dec_probe2",
            SetupField::EquinoxProbe2 => "equinox ",
            SetupField::Epoch => "epoch",
        }
    }

    /// Position of the column in [`CATALOG_COLUMNS`](crate::constants::CATALOG_COLUMNS).
    pub fn catalog_index(&self) -> usize {
        match self {
            SetupField::Equinox => 4,
            SetupField::Rotang => 7,
            SetupField::RotMode => 8,
            SetupField::RaProbe1 => 9,
            SetupField::DecProbe1 => 10,
            SetupField::EquinoxProbe1 => 11,
            SetupField::RaProbe2 => 12,
            SetupField::DecProbe2 => 13,
            SetupField::EquinoxProbe2 => 14,
            SetupField::Epoch => 15,
        }
    }

    /// Human-readable name, used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            SetupField::Equinox => "RA/Dec equinox",
            SetupField::Rotang => "rotator angle",
            SetupField::RotMode => "rotator mode",
            SetupField::RaProbe1 => "RA probe 1",
            SetupField::DecProbe1 => "Dec probe 1",
            SetupField::EquinoxProbe1 => "RA/Dec probe 1 equinox",
            SetupField::RaProbe2 => "RA probe 2",
            SetupField::DecProbe2 => "Dec probe 2",
            SetupField::EquinoxProbe2 => "RA/Dec probe 2 equinox",
            SetupField::Epoch => "epoch",
        }
    }

    fn is_date_like(&self) -> bool {
        matches!(
            self,
            SetupField::Equinox
                | SetupField::EquinoxProbe1
                | SetupField::EquinoxProbe2
                | SetupField::Epoch
        )
    }

    fn clean(&self, value: &str) -> String {
        if self.is_date_like() {
            value.split_whitespace().collect()
        } else {
            value.trim().to_string()
        }
    }
}

/// Setup values of one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupRow {
    pub equinox: String,
    pub rotang: String,
    pub rot_mode: String,
    pub ra_probe1: String,
    pub dec_probe1: String,
    pub equinox_probe1: String,
    pub ra_probe2: String,
    pub dec_probe2: String,
    pub equinox_probe2: String,
    pub epoch: String,
}

impl SetupRow {
    /// Build a row by asking `value` for every field.
    pub fn from_fn<F>(mut value: F) -> Self
    where
        F: FnMut(SetupField) -> String,
    {
        SetupRow {
            equinox: value(SetupField::Equinox),
            rotang: value(SetupField::Rotang),
            rot_mode: value(SetupField::RotMode),
            ra_probe1: value(SetupField::RaProbe1),
            dec_probe1: value(SetupField::DecProbe1),
            equinox_probe1: value(SetupField::EquinoxProbe1),
            ra_probe2: value(SetupField::RaProbe2),
            dec_probe2: value(SetupField::DecProbe2),
            equinox_probe2: value(SetupField::EquinoxProbe2),
            epoch: value(SetupField::Epoch),
        }
    }

    pub fn get(&self, field: SetupField) -> &str {
        match field {
            SetupField::Equinox => &self.equinox,
            SetupField::Rotang => &self.rotang,
            SetupField::RotMode => &self.rot_mode,
            SetupField::RaProbe1 => &self.ra_probe1,
            SetupField::DecProbe1 => &self.dec_probe1,
            SetupField::EquinoxProbe1 => &self.equinox_probe1,
            SetupField::RaProbe2 => &self.ra_probe2,
            SetupField::DecProbe2 => &self.dec_probe2,
            SetupField::EquinoxProbe2 => &self.equinox_probe2,
            SetupField::Epoch => &self.epoch,
        }
    }
}

/// Raw text of every setup field, as entered by the observer.
///
/// [`Default`] gives the values pre-filled in the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupInput {
    pub equinox: String,
    pub rotang: String,
    pub rot_mode: String,
    pub ra_probe1: String,
    pub dec_probe1: String,
    pub equinox_probe1: String,
    pub ra_probe2: String,
    pub dec_probe2: String,
    pub equinox_probe2: String,
    pub epoch: String,
}

impl Default for SetupInput {
    fn default() -> Self {
        SetupInput {
            equinox: DEFAULT_EQUINOX.to_string(),
            rotang: DEFAULT_ROTANG.to_string(),
            rot_mode: DEFAULT_ROT_MODE.to_string(),
            ra_probe1: DEFAULT_PROBE_COORD.to_string(),
            dec_probe1: DEFAULT_PROBE_COORD.to_string(),
            equinox_probe1: DEFAULT_EQUINOX.to_string(),
            ra_probe2: DEFAULT_PROBE_COORD.to_string(),
            dec_probe2: DEFAULT_PROBE_COORD.to_string(),
            equinox_probe2: DEFAULT_EQUINOX.to_string(),
            epoch: DEFAULT_EPOCH.to_string(),
        }
    }
}

impl SetupInput {
    pub fn raw(&self, field: SetupField) -> &str {
        match field {
            SetupField::Equinox => &self.equinox,
            SetupField::Rotang => &self.rotang,
            SetupField::RotMode => &self.rot_mode,
            SetupField::RaProbe1 => &self.ra_probe1,
            SetupField::DecProbe1 => &self.dec_probe1,
            SetupField::EquinoxProbe1 => &self.equinox_probe1,
            SetupField::RaProbe2 => &self.ra_probe2,
            SetupField::DecProbe2 => &self.dec_probe2,
            SetupField::EquinoxProbe2 => &self.equinox_probe2,
            SetupField::Epoch => &self.epoch,
        }
    }
}

/// Expand the raw text of one setup field to one value per target.
///
/// Arguments
/// ---------
/// * `field`: the field the text was entered for
/// * `raw`: a single value, or a comma-separated list
/// * `target_count`: number of targets of the catalog
///
/// Return
/// ------
/// * `target_count` values: the single value repeated, or the list in order
/// * [`TcsCatError::BroadcastLength`] if a list does not have exactly
///   `target_count` values
pub fn broadcast(
    field: SetupField,
    raw: &str,
    target_count: usize,
) -> Result<Vec<String>, TcsCatError> {
    let values = raw.split(LIST_SEPARATOR).collect_vec();

    match values.as_slice() {
        [single] => Ok(vec![field.clean(single); target_count]),
        list if list.len() == target_count => {
            Ok(list.iter().map(|value| field.clean(value)).collect())
        }
        list => Err(TcsCatError::BroadcastLength {
            field: field.label().to_string(),
            expected: target_count,
            found: list.len(),
        }),
    }
}

/// Broadcast every field of `input` and assemble one [`SetupRow`] per target.
///
/// All fields are checked before returning: a single bad field gives its own
/// error, several give [`TcsCatError::SetupErrors`] listing each of them.
pub fn broadcast_all(input: &SetupInput, target_count: usize) -> Result<Vec<SetupRow>, TcsCatError> {
    let (columns, mut errors): (HashMap<_, _>, Vec<_>) = SetupField::ALL
        .iter()
        .map(|&field| broadcast(field, input.raw(field), target_count).map(|v| (field, v)))
        .partition_result();

    match errors.len() {
        0 => {}
        1 => return Err(errors.remove(0)),
        _ => return Err(TcsCatError::SetupErrors(errors)),
    }

    Ok((0..target_count)
        .map(|idx| SetupRow::from_fn(|field| columns[&field][idx].clone()))
        .collect())
}

#[cfg(test)]
mod setup_test {
    use super::*;

    #[test]
    fn test_broadcast_single_value() {
        assert_eq!(
            broadcast(SetupField::Rotang, "0", 3).unwrap(),
            vec!["0", "0", "0"]
        );
        assert_eq!(
            broadcast(SetupField::RotMode, " GRV ", 2).unwrap(),
            vec!["GRV", "GRV"]
        );
        assert!(broadcast(SetupField::Epoch, "2000", 0).unwrap().is_empty());
    }

    #[test]
    fn test_broadcast_list() {
        assert_eq!(
            broadcast(SetupField::Rotang, "5,10", 2).unwrap(),
            vec!["5", "10"]
        );
        assert_eq!(
            broadcast(SetupField::RaProbe1, "00:00:00, 12:30:00", 2).unwrap(),
            vec!["00:00:00", "12:30:00"]
        );
        assert_eq!(
            broadcast(SetupField::EquinoxProbe2, "2000, 20 15", 2).unwrap(),
            vec!["2000", "2015"]
        );
    }

    #[test]
    fn test_broadcast_length_mismatch() {
        assert_eq!(
            broadcast(SetupField::Rotang, "5,10,15", 2),
            Err(TcsCatError::BroadcastLength {
                field: "rotator angle".into(),
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            broadcast(SetupField::Epoch, "2000,2010", 3),
            Err(TcsCatError::BroadcastLength {
                field: "epoch".into(),
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_broadcast_all_defaults() {
        let rows = broadcast_all(&SetupInput::default(), 2).unwrap();
        assert_eq!(rows.len(), 2);
        for row in rows {
            assert_eq!(row.equinox, "2000");
            assert_eq!(row.rotang, "0");
            assert_eq!(row.rot_mode, "GRV");
            assert_eq!(row.ra_probe1, "00:00:00");
            assert_eq!(row.dec_probe2, "00:00:00");
            assert_eq!(row.equinox_probe2, "2000");
            assert_eq!(row.epoch, "2000");
        }
    }

    #[test]
    fn test_broadcast_all_mixed() {
        let input = SetupInput {
            rotang: "5,10,15,20".into(),
            rot_mode: "GRV,GRV,EQU,GRV".into(),
            ..SetupInput::default()
        };
        let rows = broadcast_all(&input, 4).unwrap();
        assert_eq!(
            rows.iter().map(|r| r.rotang.as_str()).collect_vec(),
            vec!["5", "10", "15", "20"]
        );
        assert_eq!(rows[2].get(SetupField::RotMode), "EQU");
        assert_eq!(rows[3].get(SetupField::Epoch), "2000");
    }

    #[test]
    fn test_broadcast_all_reports_every_field() {
        let input = SetupInput {
            rotang: "5,10,15".into(),
            ..SetupInput::default()
        };
        assert_eq!(
            broadcast_all(&input, 2),
            Err(TcsCatError::BroadcastLength {
                field: "rotator angle".into(),
                expected: 2,
                found: 3
            })
        );

        let input = SetupInput {
            rotang: "5,10,15".into(),
            epoch: "2000,2001,2002".into(),
            ..SetupInput::default()
        };
        let Err(TcsCatError::SetupErrors(errors)) = broadcast_all(&input, 2) else {
            panic!("expected several setup errors");
        };
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_columns_follow_catalog_order() {
        let columns = SetupField::ALL.iter().map(|f| f.column()).collect_vec();
        assert_eq!(&crate::constants::CATALOG_COLUMNS[4..5], &columns[..1]);
        assert_eq!(&crate::constants::CATALOG_COLUMNS[7..], &columns[1..]);
        for field in SetupField::ALL {
            assert_eq!(
                crate::constants::CATALOG_COLUMNS[field.catalog_index()],
                field.column()
            );
        }
    }
}
