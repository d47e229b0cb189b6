use navscan::FIXTURE_PATH;
use navscan::extractor::extract_labels_from_file;
use navscan::scanner::scan_dir;
use std::env;
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    let arg = env::args().nth(1);
    let path = Path::new(arg.as_deref().unwrap_or(FIXTURE_PATH));

    if path.is_dir() {
        let pages = scan_dir(path)?;
        for page in &pages {
            println!("{}: {}", page.file_path, page.labels.join(", "));
        }
        println!("--- {} page(s) with navigation ---", pages.len());
    } else {
        let labels = extract_labels_from_file(path)?;
        for label in &labels {
            println!("{label}");
        }
    }

    Ok(())
}
