// crates/gazetteer-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use crate::error::{GazetteerError, Result};
use crate::traits::Progress;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// GeoNames postal codes, GeoJSON export from Opendatasoft.
pub const DATASET_URL: &str = "https://data.opendatasoft.com/api/explore/v2.1/catalog/datasets/geonames-postal-code@public/exports/geojson?lang=en&timezone=Europe%2FBerlin";

/// Read size for the streamed download.
pub const CHUNK_SIZE: usize = 1024;

const PROGRESS_LABEL: &str = "Downloading Geonames Postal Code dataset";

/// Streams `url` into `dest` and returns the number of bytes written.
///
/// Any status outside 2xx fails with [`GazetteerError::Download`] before
/// `dest` is touched. If the body ends short of the advertised
/// `Content-Length` (or the connection drops) the partial file is removed.
pub fn fetch_dataset(url: &str, dest: &Path, progress: &mut dyn Progress) -> Result<u64> {
    debug!(url, dest = %dest.display(), "requesting dataset");

    // The export is large; no overall deadline.
    let client = reqwest::blocking::Client::builder()
        .timeout(None::<Duration>)
        .build()?;
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(GazetteerError::Download {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    // A zero length is treated the same as a missing header.
    let expected = response.content_length().filter(|&n| n > 0);
    debug!(?expected, "response accepted");

    stream_to_file(response, dest, expected, progress)
}

/// Copies `reader` into `dest` in [`CHUNK_SIZE`] blocks, verifying the byte
/// count against `expected` when known.
pub fn stream_to_file<R: Read>(
    mut reader: R,
    dest: &Path,
    expected: Option<u64>,
    progress: &mut dyn Progress,
) -> Result<u64> {
    progress.start(PROGRESS_LABEL, expected);
    let copied = File::create(dest).and_then(|file| {
        let mut writer = BufWriter::new(file);
        let n = copy_chunks(&mut reader, &mut writer, progress)?;
        writer.flush()?;
        Ok(n)
    });
    progress.finish();

    let received = match copied {
        Ok(n) => n,
        Err(e) => {
            discard(dest);
            return Err(e.into());
        }
    };

    if let Some(expected) = expected {
        if received != expected {
            discard(dest);
            return Err(GazetteerError::Truncated { expected, received });
        }
    }

    Ok(received)
}

fn copy_chunks<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    progress: &mut dyn Progress,
) -> io::Result<u64> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n])?;
        total += n as u64;
        progress.advance(n as u64);
    }
    Ok(total)
}

fn discard(dest: &Path) {
    warn!(dest = %dest.display(), "removing incomplete download");
    if let Err(e) = fs::remove_file(dest) {
        if e.kind() != io::ErrorKind::NotFound {
            warn!(dest = %dest.display(), error = %e, "could not remove incomplete download");
        }
    }
}
