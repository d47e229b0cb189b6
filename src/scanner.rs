use crate::extractor::{self, Result};
use crate::models::NavPage;
use std::path::Path;
use walkdir::WalkDir;

/// Walks `root` and extracts navigation labels from every `.html` file.
///
/// Files whose navigation structure is missing or unreadable are reported
/// on stderr and skipped; the remaining pages are returned in traversal
/// order.
pub fn scan_dir(root: &Path) -> Result<Vec<NavPage>> {
    let mut pages: Vec<NavPage> = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();

        if path.is_file() && path.extension().map_or(false, |ext| ext == "html") {
            let relative_path = path.strip_prefix(root)?.to_string_lossy().to_string();

            match extractor::extract_labels_from_file(path) {
                Ok(labels) => pages.push(NavPage {
                    file_path: relative_path,
                    labels,
                }),
                Err(e) => {
                    eprintln!("⚠ Skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const NAV_HTML: &str = r#"<html><body>
<div id="navigation"><ul>
<li class="nav_items">Docs</li>
<li class="nav_items">News</li>
</ul></div>
</body></html>"#;

    #[test]
    fn test_scan_dir_collects_labels() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("index.html"), NAV_HTML).unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("sub").join("about.html"), NAV_HTML).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "not html").unwrap();

        let pages = scan_dir(temp_dir.path())?;
        assert_eq!(pages.len(), 2);
        for page in &pages {
            assert_eq!(page.labels, ["Docs", "News"]);
        }
        Ok(())
    }

    #[test]
    fn test_scan_dir_skips_pages_without_navigation() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("index.html"), NAV_HTML).unwrap();
        fs::write(
            temp_dir.path().join("plain.html"),
            "<html><body><p>No navigation.</p></body></html>",
        )
        .unwrap();

        let pages = scan_dir(temp_dir.path())?;
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].file_path, "index.html");
        Ok(())
    }

    #[test]
    fn test_scan_dir_empty_directory() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let pages = scan_dir(temp_dir.path())?;
        assert!(pages.is_empty());
        Ok(())
    }
}
