//! CLI tool for extracting classified text elements from PDF files.

use anyhow::{bail, Context, Result};
use clap::Parser;
use elements_core::json::{elements_from_reader, elements_to_json};
use elements_core::{
    format_elements, ConsoleWriter, DocumentElement, Error as ElementsError, FileWriter,
    InputFormat, RawElement, ReportSink, Tee,
};
use elements_pdf::PdfPartitioner;
use std::path::{Path, PathBuf};

/// Extract text elements from PDF files as "<type> | <text>" lines.
#[derive(Parser, Debug)]
#[command(name = "pdf-elements")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file(s): PDF documents or JSON element lists
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output file (only valid with a single input)
    #[arg(short, long, conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Output directory; writes <stem>.txt (or .json) per input
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,

    /// Print output to stdout (default when no output file or directory is given)
    #[arg(short, long)]
    print: bool,

    /// Emit elements as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Emit PageBreak elements between pages
    #[arg(long)]
    page_breaks: bool,

    /// Maximum number of words for a fragment to be classified as a title
    #[arg(short = 't', long, default_value = "12")]
    max_title_words: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn prints(&self) -> bool {
        self.print || (self.output.is_none() && self.output_dir.is_none())
    }
}

/// Elements loaded from one input.
enum Loaded {
    /// Produced by the PDF partitioner.
    Partitioned(Vec<DocumentElement>),
    /// Read from a JSON element list; fields may be absent.
    Records(Vec<RawElement>),
}

impl Loaded {
    fn len(&self) -> usize {
        match self {
            Loaded::Partitioned(elements) => elements.len(),
            Loaded::Records(records) => records.len(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if args.output.is_some() && args.input.len() > 1 {
        bail!("--output takes a single input; use --output-dir for several files");
    }

    let partitioner = PdfPartitioner::new()
        .with_page_breaks(args.page_breaks)
        .with_max_title_words(args.max_title_words);

    let mut failures = 0usize;

    for input_path in &args.input {
        log::info!("Processing: {}", input_path.display());

        let result = process_file(input_path, &args, &partitioner)
            .and_then(|output| emit(input_path, &args, &output));

        if let Err(e) = result {
            eprintln!("Error processing {}: {:#}", input_path.display(), e);
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} of {} input(s) failed", failures, args.input.len());
    }

    Ok(())
}

/// Load, format, and return the output for a single input.
fn process_file(
    input_path: &Path,
    args: &Args,
    partitioner: &PdfPartitioner,
) -> Result<String> {
    let loaded = load_elements(input_path, partitioner)?;
    log::info!("  Found {} elements", loaded.len());

    if args.json {
        let elements = match loaded {
            Loaded::Partitioned(elements) => elements,
            Loaded::Records(records) => records
                .into_iter()
                .enumerate()
                .map(|(index, record)| record.into_document_element(index))
                .collect::<elements_core::Result<Vec<_>>>()?,
        };
        return Ok(elements_to_json(&elements)?);
    }

    let report = match &loaded {
        Loaded::Partitioned(elements) => format_elements(elements)?,
        Loaded::Records(records) => format_elements(records)?,
    };

    Ok(report)
}

/// Read an input file and turn it into elements, detecting its format.
fn load_elements(input_path: &Path, partitioner: &PdfPartitioner) -> Result<Loaded> {
    let bytes = std::fs::read(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;

    let format = InputFormat::from_magic(&bytes)
        .or_else(|| {
            input_path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(InputFormat::from_extension)
        })
        .ok_or_else(|| ElementsError::UnsupportedFormat(input_path.display().to_string()))?;

    let filename = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    let loaded = match format {
        InputFormat::Pdf => {
            log::debug!("Partitioning as PDF");
            Loaded::Partitioned(partitioner.partition_bytes(&bytes, filename)?)
        }
        InputFormat::Json => {
            log::debug!("Reading JSON element list");
            Loaded::Records(elements_from_reader(bytes.as_slice())?)
        }
    };

    Ok(loaded)
}

/// Send the output to the console and/or a file, as requested.
fn emit(input_path: &Path, args: &Args, output: &str) -> Result<()> {
    let mut console = ConsoleWriter::stdout();
    let mut file = output_path(input_path, args).map(FileWriter::new);

    {
        let mut tee = Tee::new();
        if args.prints() {
            tee = tee.with(&mut console);
        }
        if let Some(writer) = file.as_mut() {
            tee = tee.with(writer);
        }
        tee.write_report(output)?;
    }

    if let Some(writer) = &file {
        log::info!("Written to: {}", writer.path().display());
    }

    Ok(())
}

/// Determine the output file for an input, if one was requested.
fn output_path(input_path: &Path, args: &Args) -> Option<PathBuf> {
    if let Some(path) = &args.output {
        return Some(path.clone());
    }

    let dir = args.output_dir.as_ref()?;
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let extension = if args.json { "json" } else { "txt" };

    Some(dir.join(format!("{}.{}", stem, extension)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["pdf-elements"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_prints_by_default() {
        assert!(parse(&["doc.pdf"]).prints());
        assert!(!parse(&["doc.pdf", "-o", "out.txt"]).prints());
        assert!(parse(&["doc.pdf", "-o", "out.txt", "--print"]).prints());
    }

    #[test]
    fn test_output_conflicts_with_output_dir() {
        let result = Args::try_parse_from(["pdf-elements", "a.pdf", "-o", "x.txt", "-d", "out"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_path_explicit() {
        let args = parse(&["doc.pdf", "--output", "reports/doc-report.txt"]);
        assert_eq!(
            output_path(Path::new("doc.pdf"), &args),
            Some(PathBuf::from("reports/doc-report.txt"))
        );
    }

    #[test]
    fn test_output_path_in_dir() {
        let args = parse(&["in/doc.pdf", "-d", "out"]);
        assert_eq!(
            output_path(Path::new("in/doc.pdf"), &args),
            Some(Path::new("out").join("doc.txt"))
        );

        let args = parse(&["in/doc.pdf", "-d", "out", "--json"]);
        assert_eq!(
            output_path(Path::new("in/doc.pdf"), &args),
            Some(Path::new("out").join("doc.json"))
        );
    }

    #[test]
    fn test_no_output_path_when_printing() {
        let args = parse(&["doc.pdf"]);
        assert_eq!(output_path(Path::new("doc.pdf"), &args), None);
    }

    #[test]
    fn test_process_json_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("elements.json");
        std::fs::write(
            &path,
            r#"[{"type": "Title", "text": "Report"}, {"type": "NarrativeText", "text": "Hello world"}]"#,
        )
        .unwrap();

        let args = parse(&["elements.json"]);
        let output = process_file(&path, &args, &PdfPartitioner::new()).unwrap();
        assert_eq!(output, "Title | Report\nNarrativeText | Hello world");
    }

    #[test]
    fn test_process_json_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("elements.json");
        std::fs::write(&path, r#"[{"type": "Title"}]"#).unwrap();

        let args = parse(&["elements.json", "--json"]);
        let err = process_file(&path, &args, &PdfPartitioner::new()).unwrap_err();
        assert!(err.to_string().contains("missing required field `text`"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "plain text").unwrap();

        let err = load_elements(&path, &PdfPartitioner::new()).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<ElementsError>(),
            Some(ElementsError::UnsupportedFormat(_))
        ));
    }
}
