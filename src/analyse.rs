use std::io::Write;

use camino::Utf8PathBuf;
use clap::ArgMatches;

use crate::error::AnalyseError;
use crate::results::ResultDocument;
use crate::stride::StrideFilter;

pub const DEFAULT_SIZE_MIB: i64 = 256;
const MIB: i64 = 1024 * 1024;

/// Number of bytes the benchmark copied per run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DatasetSize(i64);

impl DatasetSize {
    pub fn from_mib(mib: i64) -> Result<DatasetSize, AnalyseError> {
        mib.checked_mul(MIB)
            .map(DatasetSize)
            .ok_or(AnalyseError::SizeOverflow { mib })
    }

    pub fn parse(value: &str) -> Result<DatasetSize, AnalyseError> {
        let mib = value
            .parse::<i64>()
            .map_err(|source| AnalyseError::ArgumentFormat {
                value: value.to_string(),
                source,
            })?;
        DatasetSize::from_mib(mib)
    }

    pub fn bytes(&self) -> i64 {
        self.0
    }

    /// `bytes * stride / cpu_time`. Neither the size nor the time are
    /// sanity checked, a negative time yields a negative speed.
    ///
    /// Printed with the `f64` `Display` impl, so a whole number shows up
    /// without fraction (`4294967296`, not `4294967296.0`).
    pub fn speed(&self, stride: u64, cpu_time: f64) -> f64 {
        (self.0 as i128 * stride as i128) as f64 / cpu_time
    }
}

impl Default for DatasetSize {
    fn default() -> Self {
        DatasetSize(DEFAULT_SIZE_MIB * MIB)
    }
}

#[derive(Debug, Clone)]
pub struct Invocation {
    pub file: Utf8PathBuf,
    pub size: DatasetSize,
    pub family: String,
    pub verbose: u8,
}

impl Invocation {
    /// The size is validated before the file is looked at.
    pub fn from_matches(matches: &ArgMatches) -> Result<Invocation, AnalyseError> {
        let size = match matches.get_one::<String>("size") {
            Some(value) => DatasetSize::parse(value)?,
            None => DatasetSize::default(),
        };

        Ok(Invocation {
            file: matches.get_one::<Utf8PathBuf>("file").unwrap().clone(),
            size,
            family: matches.get_one::<String>("family").unwrap().clone(),
            verbose: matches.get_count("verbose"),
        })
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<Summary, AnalyseError> {
        if self.verbose > 0 {
            eprintln!(
                "stride-analyse: reading {} (dataset size {} bytes)",
                self.file,
                self.size.bytes()
            );
        }

        let document = ResultDocument::from_file(&self.file)?;
        let filter = StrideFilter::new(&self.family);
        let summary = analyse(&document, &filter, self.size, self.verbose, out)?;

        if self.verbose > 0 {
            eprintln!(
                "stride-analyse: {} of {} records matched {}",
                summary.matched, summary.records, self.family
            );
        }

        Ok(summary)
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Summary {
    pub records: usize,
    pub matched: usize,
}

/// Writes one `<stride> <speed>` line per matching record, in document order.
///
/// Lines are written as records are processed, so output produced before an
/// error stays on `out`.
pub fn analyse<W: Write>(
    document: &ResultDocument,
    filter: &StrideFilter,
    size: DatasetSize,
    verbose: u8,
    out: &mut W,
) -> Result<Summary, AnalyseError> {
    let mut summary = Summary::default();

    for record in &document.benchmarks {
        summary.records += 1;

        let Some(stride) = filter.stride(&record.name)? else {
            if verbose > 1 {
                eprintln!("stride-analyse: skipping \"{}\"", record.name);
            }
            continue;
        };

        let cpu_time = record.cpu_time()?;
        if cpu_time == 0.0 {
            return Err(AnalyseError::ArithmeticFault {
                name: record.name.clone(),
            });
        }

        let speed = size.speed(stride, cpu_time);
        writeln!(out, "{stride} {speed}").map_err(AnalyseError::Output)?;
        summary.matched += 1;
    }

    Ok(summary)
}
