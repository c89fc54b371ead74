//! Freeze Module
//! Writes every route's response to a static site directory, so the pages
//! can be hosted without a running server.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::routes::{dispatch, FROZEN_ROUTES};
use super::WebError;

/// Dispatch every frozen route in process and write the bodies under
/// `out_dir`. Returns the written file paths in route order.
pub fn freeze_site(out_dir: &Path) -> Result<Vec<PathBuf>, WebError> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(FROZEN_ROUTES.len());
    for (route, file_name) in FROZEN_ROUTES {
        let page = dispatch(route)?;
        let path = out_dir.join(file_name);
        fs::write(&path, page.body.as_bytes())?;
        info!(route, file = %path.display(), "frozen");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_file_per_route() {
        let dir = tempfile::tempdir().unwrap();
        let written = freeze_site(dir.path()).unwrap();
        assert_eq!(written.len(), FROZEN_ROUTES.len());

        for (path, (_, file_name)) in written.iter().zip(FROZEN_ROUTES) {
            assert_eq!(path.file_name().unwrap().to_str().unwrap(), file_name);
            assert!(path.exists());
        }

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains("data:image/png;base64,"));
        assert!(index.contains("echarts.init"));
    }

    #[test]
    fn reuses_an_existing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        freeze_site(dir.path()).unwrap();
        // Second run overwrites in place.
        freeze_site(dir.path()).unwrap();
    }
}
