// crates/gazetteer-core/src/loader/common_io.rs
use crate::error::{GazetteerError, Result};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset, buffered, gunzipping `*.gz` files when `compact` is on.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            GazetteerError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        }
        _ => GazetteerError::Io(e),
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip(path) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Writes `bytes` to a temp file in the target directory, then renames it
/// over `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source: std::io::Error| GazetteerError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    // NamedTempFile is created 0600.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
