mod input;

use clap::Parser;
use input::{InputFormat, read_form};
use linsys_rs::{DEFAULT_SIZE, DEFAULT_TOLERANCE, ErrorKind, GaussJordan, LinsysError, SystemForm};
use linsys_core::LinsysCoreError;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "linsys-cli",
    about = "Solve a square linear system A x = b with Gauss-Jordan elimination"
)]
struct Cli {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Input format
    #[arg(long, value_enum, default_value_t = InputFormat::Grid)]
    format: InputFormat,

    /// Cell delimiter for the grid format
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Expected number of equations; also the size used by --template
    #[arg(long)]
    size: Option<usize>,

    /// Pivots with a smaller magnitude mark the system as singular
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Reject matrices with an exactly zero determinant before eliminating
    #[arg(long)]
    determinant_check: bool,

    /// Print a blank JSON form and exit
    #[arg(long)]
    template: bool,
}

fn main() {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.template {
        match template(&cli) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(&e),
        }
        return;
    }

    match run(&cli) {
        Ok(rendered) => {
            println!("{rendered}");
            log::info!("System solved successfully");
        }
        Err(e) => fail(&e),
    }
}

fn template(cli: &Cli) -> Result<String, LinsysError> {
    SystemForm::blank(cli.size.unwrap_or(DEFAULT_SIZE)).to_json()
}

fn run(cli: &Cli) -> Result<String, LinsysError> {
    if !cli.delimiter.is_ascii() {
        return Err(LinsysError::Format(format!(
            "Delimiter {:?} must be a single ASCII character",
            cli.delimiter
        )));
    }
    let delimiter = cli.delimiter as u8;

    let form = match &cli.input {
        Some(path) => {
            log::debug!("Reading {:?} input from {}", cli.format, path.display());
            read_form(BufReader::new(File::open(path)?), cli.format, delimiter)?
        }
        None => read_form(io::stdin().lock(), cli.format, delimiter)?,
    };

    if let Some(expected) = cli.size {
        if form.size() != expected {
            return Err(LinsysCoreError::DimensionMismatch(format!(
                "Expected {} equations, found {}",
                expected,
                form.size()
            ))
            .into());
        }
    }

    let algorithm = GaussJordan::with_params(cli.tolerance, cli.determinant_check);
    let solution = form.compile()?.evaluate(&algorithm)?;
    Ok(solution.render())
}

fn fail(err: &LinsysError) -> ! {
    log::error!("Solve failed: {:?}", err);
    eprintln!("{}", err.user_message());
    process::exit(exit_code(err.kind()));
}

fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DimensionMismatch => 2,
        ErrorKind::SingularMatrix => 3,
        ErrorKind::Parse | ErrorKind::Input | ErrorKind::Internal => 1,
    }
}
