//! Tab-delimited rendering of a [`Catalog`], the `.cat` file format read by
//! the telescope control system.
//!
//! One header line, then one line per target, columns in the order of
//! [`CATALOG_COLUMNS`]. No index column is added beyond `num`.
use std::{fs, io};

use camino::{Utf8Path, Utf8PathBuf};
use csv::{StringRecord, Terminator};
use log::info;

use crate::{
    constants::{CATALOG_COLUMNS, CATALOG_EXTENSION},
    setup::{SetupField, SetupRow},
    tcs_errors::TcsCatError,
};

use super::{Catalog, ProperMotion, Target};

const DELIMITER: u8 = b'\t';

/// Render `catalog` as tab-delimited text.
pub fn serialize(catalog: &Catalog) -> Result<String, TcsCatError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in catalog.records() {
        writer.write_record(&record)?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    String::from_utf8(bytes)
        .map_err(|err| TcsCatError::IoError(io::Error::new(io::ErrorKind::InvalidData, err)))
}

fn target_from_record(record: &StringRecord) -> Target {
    let cell = |idx: usize| record.get(idx).unwrap_or_default().to_string();
    Target {
        name: cell(1),
        ra: cell(2),
        dec: cell(3),
        pm_ra: ProperMotion::Supplied(cell(5)),
        pm_dec: ProperMotion::Supplied(cell(6)),
        setup: SetupRow::from_fn(|field: SetupField| cell(field.catalog_index())),
    }
}

/// Parse tab-delimited catalog text back into a [`Catalog`].
///
/// The header must list exactly the catalog columns, in order. Proper
/// motions are kept as written. The `num` column is not read back: targets
/// are renumbered by position.
pub fn parse(text: &str) -> Result<Catalog, TcsCatError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if let Some(missing) = CATALOG_COLUMNS
        .iter()
        .enumerate()
        .find(|(idx, column)| headers.get(*idx) != Some(**column))
        .map(|(_, column)| column)
    {
        return Err(TcsCatError::MissingColumn(missing.to_string()));
    }

    let mut catalog = Catalog::default();
    for record in reader.records() {
        catalog.push(target_from_record(&record?));
    }
    Ok(catalog)
}

impl Catalog {
    /// See [`serialize`].
    pub fn to_tsv(&self) -> Result<String, TcsCatError> {
        serialize(self)
    }

    /// See [`parse`].
    pub fn from_tsv(text: &str) -> Result<Self, TcsCatError> {
        parse(text)
    }
}

/// File name of a catalog: `name` with the `.cat` extension appended.
///
/// Return
/// ------
/// * the file name, or [`TcsCatError::EmptyFilename`] if `name` is blank
pub fn catalog_filename(name: &str) -> Result<String, TcsCatError> {
    let name = name.trim();
    if name.is_empty() || name == format!(".{CATALOG_EXTENSION}") {
        return Err(TcsCatError::EmptyFilename);
    }
    if Utf8Path::new(name).extension() == Some(CATALOG_EXTENSION) {
        Ok(name.to_string())
    } else {
        Ok(format!("{name}.{CATALOG_EXTENSION}"))
    }
}

/// Serialize `catalog` and write it as `<dir>/<name>.cat`.
///
/// Arguments
/// ---------
/// * `catalog`: the assembled catalog
/// * `dir`: destination directory, must exist
/// * `name`: file name entered by the observer
///
/// Return
/// ------
/// * the path of the written file
pub fn write_catalog(
    catalog: &Catalog,
    dir: &Utf8Path,
    name: &str,
) -> Result<Utf8PathBuf, TcsCatError> {
    let path = dir.join(catalog_filename(name)?);
    fs::write(&path, serialize(catalog)?)?;
    info!("Catalog of {} targets written to {path}", catalog.len());
    Ok(path)
}

#[cfg(test)]
mod writer_test {
    use crate::catalog::catalog_test::sample_catalog;

    use super::*;

    #[test]
    fn test_serialize() {
        let text = serialize(&sample_catalog()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "num\tName\tRA\tDec\tEquinox\tpmra\tpmdec\trotang\trot_mode\tRA_probe1\tDec_probe1\tequinox\tRA_probe2\tDec_probe2\tequinox \tepoch"
        );
        assert_eq!(
            lines[2],
            "2\tHD218434\t23:07:28.7157\t+18:38:42.045\t2000\t0\t1\t0\tGRV\t00:00:00\t00:00:00\t2000\t00:00:00\t00:00:00\t2000\t2000"
        );
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_parse_back() {
        let catalog = sample_catalog();
        let parsed = parse(&serialize(&catalog).unwrap()).unwrap();
        assert_eq!(parsed.records(), catalog.records());
    }

    #[test]
    fn test_parse_wrong_header() {
        let text = "num\tName\tRA\tDec\tpmra\n1\tx\t0\t0\t0\n";
        assert_eq!(
            parse(text).unwrap_err(),
            TcsCatError::MissingColumn("Equinox".into())
        );
    }

    #[test]
    fn test_catalog_filename() {
        assert_eq!(catalog_filename("night1").unwrap(), "night1.cat");
        assert_eq!(catalog_filename(" night1.cat ").unwrap(), "night1.cat");
        assert_eq!(catalog_filename("run.2024").unwrap(), "run.2024.cat");
        assert_eq!(catalog_filename("  "), Err(TcsCatError::EmptyFilename));
        assert_eq!(catalog_filename(".cat"), Err(TcsCatError::EmptyFilename));
    }

    #[test]
    fn test_write_catalog() {
        let dir = std::env::temp_dir().join(format!("tcs_catalog_writer_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let dir = Utf8PathBuf::from_path_buf(dir).unwrap();

        let path = write_catalog(&sample_catalog(), &dir, "night1").unwrap();
        assert_eq!(path, dir.join("night1.cat"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(Catalog::from_tsv(&written).unwrap().len(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }
}
