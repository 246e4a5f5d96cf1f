use std::num::ParseIntError;

use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyseError {
    #[error("file \"{path}\" not found")]
    InputNotFound { path: Utf8PathBuf },
    #[error("invalid size \"{value}\"")]
    ArgumentFormat {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("size of {mib} MiB does not fit in a byte count")]
    SizeOverflow { mib: i64 },
    #[error("reading \"{path}\"")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing \"{path}\"")]
    DocumentParse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("benchmark \"{name}\": stride out of range")]
    StrideOutOfRange {
        name: String,
        #[source]
        source: ParseIntError,
    },
    #[error("benchmark \"{name}\": missing or non-numeric cpu_time")]
    MissingCpuTime { name: String },
    #[error("benchmark \"{name}\": division by zero (cpu_time is 0)")]
    ArithmeticFault { name: String },
    #[error("writing output")]
    Output(#[source] std::io::Error),
}
