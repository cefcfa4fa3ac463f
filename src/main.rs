use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use log::debug;
use tree::fs::RealFileSystem;
use tree::{Invocation, Options};

fn init_logging() -> Result<()> {
    stderrlog::new()
        .module(module_path!())
        .verbosity(1)
        .init()?;
    Ok(())
}

async fn run(options: &Options, directory: &Path) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = tree::display(&RealFileSystem, options, directory, &mut out).await;
    // keep whatever was printed before a traversal failure
    out.flush()?;
    let tally = result?;

    debug!("{} directories, {} files", tally.dirs, tally.files);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("tree: {err}");
        return ExitCode::from(1);
    }

    let (options, directory) = match tree::parse_args(std::env::args_os()) {
        Ok(Invocation::Help(usage)) => {
            print!("{usage}");
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::List { options, directory }) => (options, directory),
        Err(err) => {
            eprintln!("tree: {err}");
            return ExitCode::from(1);
        }
    };

    match run(&options, &directory).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tree: {err}");
            ExitCode::from(1)
        }
    }
}
