extern crate anyhow;
extern crate clap;

#[macro_use]
extern crate serde_derive;

use anyhow::Result;

mod analyse;
mod cli;
mod error;
mod results;
mod stride;

use analyse::Invocation;

fn main() {
    let result = try_main();
    match result {
        Err(e) => {
            eprintln!("stride-analyse: error: {e:#}");
            std::process::exit(1);
        }
        Ok(code) => std::process::exit(code),
    };
}

fn try_main() -> Result<i32> {
    // usage errors make clap print the usage and exit(2)
    let matches = cli::clap().get_matches();

    let invocation = Invocation::from_matches(&matches)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    invocation.run(&mut out)?;

    Ok(0)
}
