use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sym2eps",
    version,
    about = "Convert a gEDA/gschem symbol to Encapsulated PostScript"
)]
struct Cli {
    /// Symbol file to read (standard input if omitted).
    input: Option<PathBuf>,
    /// EPS file to write (standard output if omitted).
    output: Option<PathBuf>,
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(report) = symeps::convert_file(cli.input.as_deref(), cli.output.as_deref()) {
        eprintln!("{report:?}");
        std::process::exit(1);
    }
}
