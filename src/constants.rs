//! # Constants and type definitions for tcs_catalog
//!
//! Unit conversion factors, unit type aliases, the default values of the
//! telescope setup fields and the header of every column of a TCS catalog.
//!
//! The column headers are the single source of truth for the output schema:
//! the serializer, the table reader and the round-trip parser all index into
//! [`CATALOG_COLUMNS`].

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Milliarcseconds in one arcsecond
pub const MAS_PER_ARCSEC: f64 = 1000.0;

/// Milliarcseconds in one degree
pub const MAS_PER_DEG: f64 = MAS_PER_ARCSEC * 3600.0;

/// Degrees → hours (15° per hour of right ascension)
pub const DEG_TO_HOUR: f64 = 1.0 / 15.0;

/// Seconds in one hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds in one minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in milliarcseconds
pub type MilliArcSec = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Time in seconds
pub type Second = f64;

// -------------------------------------------------------------------------------------------------
// Setup defaults
// -------------------------------------------------------------------------------------------------

pub const DEFAULT_EQUINOX: &str = "2000";
pub const DEFAULT_ROTANG: &str = "0";
pub const DEFAULT_ROT_MODE: &str = "GRV";
pub const DEFAULT_PROBE_COORD: &str = "00:00:00";
pub const DEFAULT_EPOCH: &str = "2000";

/// Extension appended to every catalog file name
pub const CATALOG_EXTENSION: &str = "cat";

// -------------------------------------------------------------------------------------------------
// Output schema
// -------------------------------------------------------------------------------------------------

/// Header of the ordinal column
pub const COL_NUM: &str = "num";
/// Header of the name column, also the only mandatory column of an uploaded table
pub const COL_NAME: &str = "Name";
/// Header whose presence marks an uploaded table as fully populated
pub const COL_RA: &str = "RA";
pub const COL_DEC: &str = "Dec";
pub const COL_PM_RA: &str = "pmra";
pub const COL_PM_DEC: &str = "pmdec";

/// Columns of a TCS catalog, in output order.
///
/// `"equinox"` (probe 1) and `"equinox "` (probe 2, trailing space) are two
/// distinct columns.
pub const CATALOG_COLUMNS: [&str; 16] = [
    COL_NUM,
    COL_NAME,
    COL_RA,
    COL_DEC,
    "Equinox",
    COL_PM_RA,
    COL_PM_DEC,
    "rotang",
    "rot_mode",
    "RA_probe1",
    "Dec_probe1",
    "equinox",
    "RA_probe2",
    "Dec_probe2",
    "equinox ",
    "epoch",
];
