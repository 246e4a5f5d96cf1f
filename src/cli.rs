use camino::Utf8PathBuf;

use clap::{crate_version, Arg, ArgAction, Command, ValueHint};

pub const DEFAULT_FAMILY: &str = "BM_CopyStride";

pub fn clap() -> clap::Command {
    fn verbose() -> Arg {
        Arg::new("verbose")
            .help("be verbose (-vv also lists skipped records)")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
    }

    Command::new("stride-analyse")
        .version(crate_version!())
        .about("Print stride/throughput pairs from a google-benchmark JSON result file")
        .arg(
            Arg::new("file")
                .help("benchmark result file (JSON)")
                .value_name("FILE")
                .required(true)
                .value_parser(clap::value_parser!(Utf8PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            // kept as a string so a malformed size is reported like any other input error
            Arg::new("size")
                .help("dataset size in MiB used for the throughput (default: 256)")
                .value_name("SIZE_MIB")
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new("family")
                .help("benchmark family to select")
                .short('f')
                .long("family")
                .num_args(1)
                .value_name("NAME")
                .default_value(DEFAULT_FAMILY),
        )
        .arg(verbose())
}
