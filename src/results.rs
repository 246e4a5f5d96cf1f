//! google-benchmark JSON result documents.
//!
//! Only the fields needed for the stride analysis are deserialized, everything
//! else in the document (`context`, `time_unit`, counters, ...) is ignored.

use camino::Utf8Path;

use crate::error::AnalyseError;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ResultDocument {
    pub benchmarks: Vec<BenchmarkRecord>,
}

/// `cpu_time` is kept as raw JSON: aggregates like `_BigO` don't carry it,
/// and it is only looked at once the name matched.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub name: String,
    #[serde(default)]
    pub cpu_time: Option<serde_json::Value>,
}

impl BenchmarkRecord {
    /// CPU time of the record, trusted to be in nanoseconds.
    pub fn cpu_time(&self) -> Result<f64, AnalyseError> {
        self.cpu_time
            .as_ref()
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| AnalyseError::MissingCpuTime {
                name: self.name.clone(),
            })
    }
}

impl ResultDocument {
    /// Reads and parses the whole file in one go.
    ///
    /// The existence check happens before anything is read, so a missing file
    /// is reported as such and never as a parse error.
    pub fn from_file(path: &Utf8Path) -> Result<ResultDocument, AnalyseError> {
        if !path.is_file() {
            return Err(AnalyseError::InputNotFound {
                path: path.to_owned(),
            });
        }

        let data = std::fs::read_to_string(path).map_err(|source| AnalyseError::Read {
            path: path.to_owned(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| AnalyseError::DocumentParse {
            path: path.to_owned(),
            source,
        })
    }
}
