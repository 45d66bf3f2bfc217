use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
    }

    match args[1].as_str() {
        "convert-all" => {
            if args.len() != 4 {
                usage();
            }
            let ok = convert_all(Utf8Path::new(&args[2]), Utf8Path::new(&args[3]));
            if !ok {
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn usage() -> ! {
    eprintln!("Usage: cargo xtask <command>");
    eprintln!("Commands:");
    eprintln!("  convert-all <in-dir> <out-dir>    Convert every .sym file to <stem>.eps");
    std::process::exit(1);
}

/// Convert every `*.sym` in `input_dir`, writing `<stem>.eps` files into
/// `output_dir`. Returns false if any symbol failed.
fn convert_all(input_dir: &Utf8Path, output_dir: &Utf8Path) -> bool {
    let entries = match input_dir.read_dir_utf8() {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Failed to read {}: {}", input_dir, e);
            return false;
        }
    };

    let mut symbols: Vec<Utf8PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.extension() == Some("sym"))
        .collect();
    symbols.sort();

    if let Err(e) = fs::create_dir_all(output_dir) {
        eprintln!("Failed to create {}: {}", output_dir, e);
        return false;
    }

    let failures: Vec<Utf8PathBuf> = symbols
        .par_iter()
        .filter_map(|symbol| {
            let Some(stem) = symbol.file_stem() else {
                return Some(symbol.clone());
            };
            let target = output_dir.join(format!("{stem}.eps"));
            match symeps::convert_file(Some(symbol.as_std_path()), Some(target.as_std_path())) {
                Ok(()) => {
                    eprintln!("{} -> {}", symbol, target);
                    None
                }
                Err(report) => {
                    eprintln!("{}: {:?}", symbol, report);
                    Some(symbol.clone())
                }
            }
        })
        .collect();

    eprintln!(
        "Converted {}/{} symbols",
        symbols.len() - failures.len(),
        symbols.len()
    );
    for failure in &failures {
        eprintln!("  failed: {}", failure);
    }
    failures.is_empty()
}
