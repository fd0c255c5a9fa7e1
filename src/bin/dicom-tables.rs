// ABOUTME: CLI binary for the DICOM standard table extractor.
// ABOUTME: Extracts table records from a chapter of the rendered standard and emits pretty JSON.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use dicom_tables::{io as table_io, AnchorTableId, Extractor};

#[derive(Parser, Debug)]
#[command(name = "dicom-tables")]
#[command(about = "Extract table data from the HTML rendering of the DICOM standard")]
struct Args {
    /// Path to the rendered standard (e.g. part03.html)
    #[arg()]
    standard: PathBuf,

    /// Chapter identifier to extract tables from (e.g. chapter_A)
    #[arg(short = 'c', long = "chapter")]
    chapter: String,

    /// Extract only the table with this identifier (e.g. table_A.2-1)
    #[arg(short = 't', long = "table")]
    table: Option<String>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Override the base URL for long-form (single-file) references
    #[arg(long = "base-long-url")]
    base_long_url: Option<String>,

    /// Override the base URL for short-form (chapter-partitioned) references
    #[arg(long = "base-short-url")]
    base_short_url: Option<String>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,
}

fn build_extractor(args: &Args) -> Extractor {
    let mut builder = Extractor::builder();
    if let Some(url) = &args.base_long_url {
        builder = builder.base_long_url(url.clone());
    }
    if let Some(url) = &args.base_short_url {
        builder = builder.base_short_url(url.clone());
    }
    builder.build()
}

fn main() -> ExitCode {
    let args = Args::parse();
    let extractor = build_extractor(&args);

    let start = Instant::now();

    let standard = match table_io::parse_html_file(&args.standard) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("error reading {:?}: {}", args.standard, e);
            return ExitCode::from(1);
        }
    };

    let mut output = Vec::new();
    let result = match &args.table {
        Some(table_id) => extractor
            .table_record_by_id(&standard, &args.chapter, table_id, &AnchorTableId)
            .and_then(|record| table_io::write_pretty_json(&mut output, &record)),
        None => extractor
            .chapter_table_records(&standard, &args.chapter, &AnchorTableId)
            .and_then(|records| table_io::write_pretty_json(&mut output, &records)),
    };

    if let Err(e) = result {
        eprintln!("error extracting from {}: {}", args.chapter, e);
        return ExitCode::from(1);
    }

    let elapsed = start.elapsed();

    if let Some(output_path) = &args.output {
        if let Err(e) = fs::write(output_path, &output) {
            eprintln!("error writing to {:?}: {}", output_path, e);
            return ExitCode::from(1);
        }
    } else {
        let mut stdout = io::stdout();
        if stdout.write_all(&output).and_then(|_| writeln!(stdout)).is_err() {
            return ExitCode::from(1);
        }
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    ExitCode::SUCCESS
}
