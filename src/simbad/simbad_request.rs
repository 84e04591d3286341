use std::sync::LazyLock;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};
use regex::Regex;
use serde::Deserialize;

use crate::{constants::MilliArcSec, env_state::TcsCatEnv, tcs_errors::TcsCatError};

use super::ResolvedTarget;

/// Separator between the fields of one formatted SIMBAD answer line
const FIELD_SEPARATOR: u8 = b'|';

/// Value printed by SIMBAD for an unknown quantity
const SIMBAD_UNKNOWN: &str = "~";

// matches the error section of a SIMBAD script answer
static ERROR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^::error:*\s*$").expect("valid error regex"));

// captures everything after the data section header
static DATA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^::data:*\s*$(.*)").expect("valid data regex"));

/// Build the SIMBAD script querying one object.
///
/// The answer is a single line `RA|Dec|pmRA|pmDec`, coordinates in
/// space-delimited sexagesimal, proper motions in mas/yr.
fn object_script(name: &str) -> String {
    format!(
        "output console=off script=off\n\
         format object \"%COO(A){sep}%COO(D){sep}%PM(A){sep}%PM(D)\"\n\
         query id {name}\n",
        sep = FIELD_SEPARATOR as char
    )
}

/// Request the SIMBAD script interface for one object.
///
/// Argument
/// --------
/// * `name`: sanitized target name
/// * `env_state`: environment holding the HTTP client and the endpoint
///
/// Return
/// ------
/// * the raw SIMBAD answer
pub(crate) fn request_object(name: &str, env_state: &TcsCatEnv) -> Result<String, TcsCatError> {
    debug!("Querying SIMBAD for {name}");
    env_state.get_with_query(&[("script", &object_script(name))])
}

/// One formatted answer line, fields in the order of [`object_script`].
#[derive(Debug, Deserialize)]
struct SimbadLine {
    ra: String,
    dec: String,
    pm_ra: String,
    pm_dec: String,
}

/// Split one answer line on [`FIELD_SEPARATOR`].
fn read_line(name: &str, line: &str) -> Result<SimbadLine, TcsCatError> {
    let malformed =
        |reason: String| TcsCatError::ResolverResponse(format!("{reason} for {name}, got {line:?}"));

    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_SEPARATOR)
        .has_headers(false)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    let has_record = reader
        .read_record(&mut record)
        .map_err(|err| malformed(err.to_string()))?;
    if !has_record || record.len() != 4 {
        return Err(malformed("expected 4 fields".to_string()));
    }
    record
        .deserialize(None)
        .map_err(|err| malformed(err.to_string()))
}

fn parse_proper_motion(name: &str, field: &str) -> Result<MilliArcSec, TcsCatError> {
    if field.is_empty() || field == SIMBAD_UNKNOWN {
        warn!("No proper motion known for {name}, writing 0");
        return Ok(0.0);
    }
    field.parse().map_err(|_| {
        TcsCatError::ResolverResponse(format!("invalid proper motion {field:?} for {name}"))
    })
}

/// Parse the SIMBAD answer to an object query.
///
/// Argument
/// --------
/// * `name`: the name the query was made with, used in errors
/// * `response`: the raw SIMBAD answer
///
/// Return
/// ------
/// * the [`ResolvedTarget`] of the first answer line
/// * [`TcsCatError::NameNotFound`] if SIMBAD reported an error or returned no data
/// * [`TcsCatError::ResolverResponse`] if the answer line is malformed
pub(crate) fn deserialize_object(name: &str, response: &str) -> Result<ResolvedTarget, TcsCatError> {
    if ERROR_REGEX.is_match(response) {
        return Err(TcsCatError::NameNotFound(name.to_string()));
    }

    let data = DATA_REGEX
        .captures(response)
        .and_then(|captures| captures.get(1))
        .map_or(response, |m| m.as_str());

    let Some(line) = data.lines().map(str::trim).find(|line| !line.is_empty()) else {
        return Err(TcsCatError::NameNotFound(name.to_string()));
    };

    let SimbadLine {
        ra,
        dec,
        pm_ra,
        pm_dec,
    } = read_line(name, line)?;

    if ra.is_empty() || ra == SIMBAD_UNKNOWN || dec.is_empty() || dec == SIMBAD_UNKNOWN {
        return Err(TcsCatError::ResolverResponse(format!(
            "no coordinates known for {name}"
        )));
    }

    Ok(ResolvedTarget {
        pm_ra: parse_proper_motion(name, &pm_ra)?,
        pm_dec: parse_proper_motion(name, &pm_dec)?,
        ra,
        dec,
    })
}
