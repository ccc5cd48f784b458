use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Runs the available pdf_sampler demos from the command line.
///
/// Fonts must be present under `assets/fonts` relative to the `pdf_sampler`
/// crate or provided via the `PDF_SAMPLER_FONTS_DIR` environment variable
/// before running the commands below.
#[derive(Parser)]
#[command(author, version, about = "Convenience CLI for pdf_sampler demos")]
struct Cli {
    /// Directory the generated documents are written to.
    #[arg(long, default_value = "target/pdf-samples", global = true)]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the paragraph styles sample to `paragraphs.pdf`.
    #[command(name = "paragraphs")]
    Paragraphs,

    /// Render an EAN-8 barcode document to `barcode.pdf`.
    #[command(name = "barcode")]
    Barcode,

    /// Render a QR code document to `qrcode.pdf`.
    #[command(name = "qrcode")]
    Qrcode,

    /// Reopen `qrcode.pdf` and print its first page's MediaBox.
    #[command(name = "read")]
    Read,

    /// Render an AES-256 encrypted QR document and read it back.
    #[command(name = "encrypted")]
    Encrypted,

    /// Run every sample in order.
    #[command(name = "run-all", aliases = ["run_all", "all"])]
    RunAll,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = run(&cli);
    if let Err(err) = result {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), pdf_sampler::Error> {
    match cli.command {
        Commands::Paragraphs => pdf_sampler::samples::paragraphs::run(&cli.out_dir),
        Commands::Barcode => pdf_sampler::samples::ean_barcode::run(&cli.out_dir),
        Commands::Qrcode => pdf_sampler::samples::qr_code::run(&cli.out_dir),
        Commands::Read => pdf_sampler::samples::readback::run(&cli.out_dir),
        Commands::Encrypted => pdf_sampler::samples::encrypted::run(&cli.out_dir),
        Commands::RunAll => pdf_sampler::samples::run_all::run(&cli.out_dir),
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
