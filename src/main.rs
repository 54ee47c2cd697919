mod error;
mod report;
mod scanner;
mod toucher;
mod types;

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory whose direct-child files get their timestamps set to now
    folder: Option<PathBuf>,

    /// Print a summary table of the touched files after the run
    #[arg(long, short = 's')]
    summary: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let folder = match args.folder {
        Some(path) => path,
        None => match prompt_for_folder() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Error: could not read folder path: {e}");
                std::process::exit(1);
            }
        },
    };

    match toucher::touch_all(&folder) {
        Ok(outcome) => {
            println!("Done!");
            if args.summary {
                report::print_summary(&outcome);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn prompt_for_folder() -> std::io::Result<PathBuf> {
    print!("Enter the folder path: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}
