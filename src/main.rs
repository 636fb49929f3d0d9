mod document;
mod emitter;
mod error;
mod ip;
mod naming;
mod record;
mod translit;
mod walker;

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use crate::walker::Walker;

/// Fixed input document, relative to the working directory.
const INPUT_FNAME: &str = "КартаСети.xmind";
/// Fixed output file, overwritten on every run.
const RESULT_FNAME: &str = "objects.cfg";

#[derive(Parser)]
#[command(
    name = "hostmap",
    about = "Convert an XMind network map into Nagios host definitions"
)]
struct Cli {}

fn main() -> ExitCode {
    // No options or positionals; clap only provides --help and --version.
    let _cli = Cli::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Load the map, emit the root hub, walk the tree into `objects.cfg`.
///
/// The policy on emission failure is to abort the whole run; the output
/// file keeps whatever was written before the abort. The sink is dropped
/// on both the normal and the error path.
///
/// # Errors
///
/// Returns `Error::InputNotFound` if the fixed input file is missing, and
/// document loading or emission errors otherwise.
fn run() -> Result<(), error::Error> {
    let input = Path::new(INPUT_FNAME);
    if !input.is_file() {
        return Err(error::Error::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let root = document::load(input)?;

    let sink = File::create(RESULT_FNAME)?;
    let mut walker = Walker::new(sink);
    let root_name = walker.emit_root(&root)?;
    walker.walk(&root.children, &root_name)
}
