//! Conversion of resolved positions and proper motions into the units and
//! notation expected by the telescope control system.
//!
//! * Right ascension and declination come back from the name resolver as
//!   space-delimited sexagesimal strings; the TCS wants colons.
//! * Proper motion in RA is given in mas/yr and written in **time seconds per
//!   year**. The value is read as an angle, decomposed into hours, minutes and
//!   seconds of time, and the three parts are flattened back into seconds.
//! * Proper motion in Dec is given in mas/yr and written in **arcseconds per year**.

use crate::constants::{
    ArcSec, MilliArcSec, Second, DEG_TO_HOUR, MAS_PER_ARCSEC, MAS_PER_DEG, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};

/// Hours, minutes and seconds of time of an angle.
///
/// All three components carry the sign of the angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Hms {
    /// Total number of seconds of time represented by the decomposition.
    pub fn total_seconds(&self) -> Second {
        self.hours * SECONDS_PER_HOUR + self.minutes * SECONDS_PER_MINUTE + self.seconds
    }
}

/// Decompose an angle into hours, minutes and seconds of time.
///
/// Arguments
/// ---------
/// * `degrees`: the angle in degrees
///
/// Return
/// ------
/// * the [`Hms`] decomposition, each component signed like `degrees`
pub fn angle_to_hms(degrees: f64) -> Hms {
    let sign = if degrees < 0.0 { -1.0 } else { 1.0 };
    let hours = degrees.abs() * DEG_TO_HOUR;

    let h = hours.trunc();
    let minutes = (hours - h) * 60.0;
    let m = minutes.trunc();
    let s = (minutes - m) * 60.0;

    Hms {
        hours: sign * h,
        minutes: sign * m,
        seconds: sign * s,
    }
}

/// Replace every space of a sexagesimal string with a colon.
pub fn colon_delimited(sexagesimal: &str) -> String {
    sexagesimal.replace(' ', ":")
}

/// Proper motion in RA, mas/yr → time seconds/yr.
pub fn pm_ra_to_seconds(pm_ra: MilliArcSec) -> Second {
    angle_to_hms(pm_ra / MAS_PER_DEG).total_seconds()
}

/// Proper motion in Dec, mas/yr → arcsec/yr.
pub fn pm_dec_to_arcsec(pm_dec: MilliArcSec) -> ArcSec {
    pm_dec / MAS_PER_ARCSEC
}

/// Position and proper motion of a target, in TCS notation and units.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPosition {
    /// Right ascension, `HH:MM:SS.SS`
    pub ra: String,
    /// Declination, `±DD:MM:SS.S`
    pub dec: String,
    /// Proper motion in RA, seconds of time per year
    pub pm_ra: Second,
    /// Proper motion in Dec, arcseconds per year
    pub pm_dec: ArcSec,
}

/// Convert a resolved position into TCS notation and units.
///
/// Arguments
/// ---------
/// * `ra`: right ascension, space-delimited sexagesimal
/// * `dec`: declination, space-delimited sexagesimal
/// * `pm_ra`: proper motion in RA, mas/yr
/// * `pm_dec`: proper motion in Dec, mas/yr
///
/// Return
/// ------
/// * the [`NormalizedPosition`]
pub fn normalize(ra: &str, dec: &str, pm_ra: MilliArcSec, pm_dec: MilliArcSec) -> NormalizedPosition {
    NormalizedPosition {
        ra: colon_delimited(ra),
        dec: colon_delimited(dec),
        pm_ra: pm_ra_to_seconds(pm_ra),
        pm_dec: pm_dec_to_arcsec(pm_dec),
    }
}
