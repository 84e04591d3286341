//! Uploaded csv tables.
//!
//! Two shapes are accepted, both with a mandatory `Name` column:
//!
//! * **partial**: names plus the setup columns (`rotang`, `rot_mode`,
//!   `RA_probe1`, ...); positions are resolved per row.
//! * **full**: every catalog column, including `RA`; nothing is resolved.
//!
//! Rows are deserialized by header into [`SetupColumns`] and
//! [`PositionColumns`]. Headers are matched exactly, `"equinox"` and
//! `"equinox "` being two different columns; unknown columns (such as an
//! uploaded `num`) are ignored.
use std::{fs::File, io::Read};

use camino::Utf8Path;
use csv::StringRecord;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    constants::{COL_DEC, COL_NAME, COL_PM_DEC, COL_PM_RA, COL_RA, DEFAULT_EQUINOX},
    setup::{SetupField, SetupRow},
    tcs_errors::TcsCatError,
};

/// Name and setup cells of one uploaded row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetupColumns {
    #[serde(rename = "Name")]
    pub name: String,
    /// Optional column, an empty cell counts as absent
    #[serde(rename = "Equinox", default)]
    pub equinox: Option<String>,
    pub rotang: String,
    pub rot_mode: String,
    #[serde(rename = "RA_probe1")]
    pub ra_probe1: String,
    #[serde(rename = "Dec_probe1")]
    pub dec_probe1: String,
    #[serde(rename = "equinox")]
    pub equinox_probe1: String,
    #[serde(rename = "RA_probe2")]
    pub ra_probe2: String,
    #[serde(rename = "Dec_probe2")]
    pub dec_probe2: String,
    #[serde(rename = "equinox ")]
    pub equinox_probe2: String,
    pub epoch: String,
}

impl SetupColumns {
    /// Setup values of the row, copied verbatim; a missing `Equinox` gives the default.
    pub fn setup(&self) -> SetupRow {
        SetupRow {
            equinox: self
                .equinox
                .clone()
                .unwrap_or_else(|| DEFAULT_EQUINOX.to_string()),
            rotang: self.rotang.clone(),
            rot_mode: self.rot_mode.clone(),
            ra_probe1: self.ra_probe1.clone(),
            dec_probe1: self.dec_probe1.clone(),
            equinox_probe1: self.equinox_probe1.clone(),
            ra_probe2: self.ra_probe2.clone(),
            dec_probe2: self.dec_probe2.clone(),
            equinox_probe2: self.equinox_probe2.clone(),
            epoch: self.epoch.clone(),
        }
    }
}

/// Position cells of one row of a fully populated upload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PositionColumns {
    #[serde(rename = "RA")]
    pub ra: String,
    #[serde(rename = "Dec")]
    pub dec: String,
    #[serde(rename = "pmra")]
    pub pm_ra: String,
    #[serde(rename = "pmdec")]
    pub pm_dec: String,
}

/// Columns every uploaded table must have besides `Name`.
fn required_setup_columns() -> impl Iterator<Item = &'static str> {
    SetupField::ALL
        .into_iter()
        .filter(|field| *field != SetupField::Equinox)
        .map(|field| field.column())
}

#[derive(Debug, Clone)]
pub struct InputTable {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl InputTable {
    /// Read a comma-separated table with a header line.
    ///
    /// Return
    /// ------
    /// * the table, or [`TcsCatError::MissingColumn`] if it has no `Name` column,
    ///   or [`TcsCatError::CsvError`] if it cannot be read
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TcsCatError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let rows = csv_reader
            .records()
            .collect::<Result<Vec<StringRecord>, csv::Error>>()?;

        let table = InputTable { headers, rows };
        table.require_columns([COL_NAME])?;
        Ok(table)
    }

    pub fn from_path(path: &Utf8Path) -> Result<Self, TcsCatError> {
        InputTable::from_reader(File::open(path)?)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }

    /// A table with an `RA` column is taken as fully populated.
    pub fn is_full(&self) -> bool {
        self.has_column(COL_RA)
    }

    /// Check that every header of `columns` is present.
    ///
    /// Return
    /// ------
    /// * [`TcsCatError::MissingColumn`] naming the first absent column
    pub fn require_columns<'c, I>(&self, columns: I) -> Result<(), TcsCatError>
    where
        I: IntoIterator<Item = &'c str>,
    {
        match columns.into_iter().find(|column| !self.has_column(column)) {
            Some(missing) => Err(TcsCatError::MissingColumn(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Deserialize every row by header.
    pub fn deserialize_rows<T: DeserializeOwned>(&self) -> Result<Vec<T>, TcsCatError> {
        self.rows
            .iter()
            .map(|record| record.deserialize(Some(&self.headers)).map_err(TcsCatError::from))
            .collect()
    }

    /// Name and setup cells of every row (partial and full tables).
    pub fn setup_rows(&self) -> Result<Vec<SetupColumns>, TcsCatError> {
        self.require_columns(required_setup_columns())?;
        self.deserialize_rows()
    }

    /// Position cells of every row (full tables).
    pub fn position_rows(&self) -> Result<Vec<PositionColumns>, TcsCatError> {
        self.require_columns([COL_RA, COL_DEC, COL_PM_RA, COL_PM_DEC])?;
        self.deserialize_rows()
    }
}

#[cfg(test)]
mod input_table_test {
    use super::*;

    const PARTIAL: &str =
        "Name,rotang,rot_mode,RA_probe1,Dec_probe1,equinox,RA_probe2,Dec_probe2,equinox ,epoch\n\
         alf Sco,0,GRV,00:00:00,00:00:00,2000,00:00:00,00:00:00,2000,2000\n\
         HD 218434,90,EQU,01:00:00,-02:00:00,2000,00:00:00,00:00:00,2015,2024.5\n";

    #[test]
    fn test_read_partial_table() {
        let table = InputTable::from_reader(PARTIAL.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.is_full());

        let rows = table.setup_rows().unwrap();
        assert_eq!(rows[1].name, "HD 218434");
        assert_eq!(rows[1].equinox, None);
        assert_eq!(
            rows[1].setup(),
            SetupRow {
                equinox: "2000".into(),
                rotang: "90".into(),
                rot_mode: "EQU".into(),
                ra_probe1: "01:00:00".into(),
                dec_probe1: "-02:00:00".into(),
                equinox_probe1: "2000".into(),
                ra_probe2: "00:00:00".into(),
                dec_probe2: "00:00:00".into(),
                equinox_probe2: "2015".into(),
                epoch: "2024.5".into(),
            }
        );
        assert_eq!(
            table.position_rows().unwrap_err(),
            TcsCatError::MissingColumn("RA".into())
        );
    }

    #[test]
    fn test_equinox_column_is_read() {
        let data = "Name,Equinox,rotang,rot_mode,RA_probe1,Dec_probe1,equinox,RA_probe2,Dec_probe2,equinox ,epoch\n\
                    alf Sco,1950,0,GRV,00:00:00,00:00:00,2000,00:00:00,00:00:00,2000,2000\n\
                    HD 218434,,0,GRV,00:00:00,00:00:00,2000,00:00:00,00:00:00,2000,2000\n";
        let rows = InputTable::from_reader(data.as_bytes())
            .unwrap()
            .setup_rows()
            .unwrap();
        assert_eq!(rows[0].setup().equinox, "1950");
        assert_eq!(rows[1].setup().equinox, "2000");
    }

    #[test]
    fn test_missing_setup_column() {
        let table = InputTable::from_reader("Name,rotang\nalf Sco,0\n".as_bytes()).unwrap();
        assert_eq!(
            table.setup_rows().unwrap_err(),
            TcsCatError::MissingColumn("rot_mode".into())
        );
    }

    #[test]
    fn test_missing_name_column() {
        let data = "Target,rotang\nalf Sco,0\n";
        assert_eq!(
            InputTable::from_reader(data.as_bytes()).unwrap_err(),
            TcsCatError::MissingColumn("Name".into())
        );
    }

    #[test]
    fn test_ragged_table_is_an_error() {
        let data = "Name,rotang\nalf Sco,0,12\n";
        assert!(matches!(
            InputTable::from_reader(data.as_bytes()),
            Err(TcsCatError::CsvError(_))
        ));
    }

    #[test]
    fn test_full_table() {
        let data = "num,Name,RA,Dec,pmra,pmdec\n7,alf Sco,16:29:24.4,-26:25:55,-0.0008,-0.0233\n";
        let table = InputTable::from_reader(data.as_bytes()).unwrap();
        assert!(table.is_full());
        assert_eq!(
            table.position_rows().unwrap(),
            vec![PositionColumns {
                ra: "16:29:24.4".into(),
                dec: "-26:25:55".into(),
                pm_ra: "-0.0008".into(),
                pm_dec: "-0.0233".into(),
            }]
        );
    }
}
