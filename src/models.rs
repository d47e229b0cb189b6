/// One scanned page together with its extracted navigation labels.
#[derive(Debug)]
pub struct NavPage {
    /// Path of the file relative to the scan root.
    pub file_path: String,
    /// Label texts in document order, trimmed, empty ones dropped.
    pub labels: Vec<String>,
}
