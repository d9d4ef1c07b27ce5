use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rulekeeper_docs::{
    Catalog, DETAILED_GUIDE_FILE, Error, QUICK_REFERENCE_FILE, write_detailed_guide,
    write_quick_reference,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DocumentKind {
    /// Tabular quick reference
    Quick,
    /// Detailed policy guide
    Guide,
}

#[derive(Parser)]
#[command(name = "rulekeeper-docs")]
#[command(version, about = "Render the RuleKeeper policy catalog into PDF reference documents")]
struct Args {
    /// Directory the PDFs are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON catalog to render instead of the built-in one
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Only produce one of the documents
    #[arg(long, value_enum)]
    only: Option<DocumentKind>,
}

fn generate(kind: DocumentKind, catalog: &Catalog, out_dir: &Path) -> Result<PathBuf, Error> {
    let (file, write): (&str, fn(&Catalog, &Path) -> Result<(), Error>) = match kind {
        DocumentKind::Quick => (QUICK_REFERENCE_FILE, write_quick_reference),
        DocumentKind::Guide => (DETAILED_GUIDE_FILE, write_detailed_guide),
    };
    let path = out_dir.join(file);
    write(catalog, &path)?;
    Ok(path)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => match Catalog::from_json_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Catalog::builtin(),
    };
    log::info!(
        "Catalog: {} categories, {} rules",
        catalog.categories.len(),
        catalog.rule_count()
    );

    let kinds: &[DocumentKind] = match args.only {
        Some(DocumentKind::Quick) => &[DocumentKind::Quick],
        Some(DocumentKind::Guide) => &[DocumentKind::Guide],
        None => &[DocumentKind::Quick, DocumentKind::Guide],
    };

    let mut failed = false;
    for &kind in kinds {
        match generate(kind, &catalog, &args.out_dir) {
            Ok(path) => println!("Generated {}", path.display()),
            Err(e) => {
                eprintln!("Error: {kind:?}: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
