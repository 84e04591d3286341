use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TcsCatError {
    #[error("Could not find {0}")]
    NameNotFound(String),

    #[error("Unexpected name resolver response: {0}")]
    ResolverResponse(String),

    #[error("HTTP ureq error: {0}")]
    HttpError(#[from] ureq::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unable to read or write csv data: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing column in uploaded table: {0:?}")]
    MissingColumn(String),

    #[error("No target names were supplied")]
    EmptyNameList,

    #[error("None of the supplied target names could be resolved")]
    NoTargetResolved,

    #[error("No filename was supplied for the catalog")]
    EmptyFilename,

    #[error(
        "Enter {field} as one value or a list as long as the number of names \
         (got {found} values for {expected} names)"
    )]
    BroadcastLength {
        field: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid setup parameters: {}", .0.iter().join("; "))]
    SetupErrors(Vec<TcsCatError>),
}

impl PartialEq for TcsCatError {
    fn eq(&self, other: &Self) -> bool {
        use TcsCatError::*;
        match (self, other) {
            (NameNotFound(a), NameNotFound(b)) => a == b,
            (ResolverResponse(a), ResolverResponse(b)) => a == b,

            // not comparable, same variant is enough
            (HttpError(_), HttpError(_)) => true,
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            (MissingColumn(a), MissingColumn(b)) => a == b,
            (
                BroadcastLength {
                    field: f1,
                    expected: e1,
                    found: n1,
                },
                BroadcastLength {
                    field: f2,
                    expected: e2,
                    found: n2,
                },
            ) => f1 == f2 && e1 == e2 && n1 == n2,
            (SetupErrors(a), SetupErrors(b)) => a == b,

            (EmptyNameList, EmptyNameList) => true,
            (NoTargetResolved, NoTargetResolved) => true,
            (EmptyFilename, EmptyFilename) => true,

            _ => false,
        }
    }
}
