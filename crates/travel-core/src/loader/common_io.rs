// crates/travel-core/src/loader/common_io.rs
use crate::error::{Result, TravelError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and wraps it in a gzip decoder when the path
/// ends in `.gz` (with the `compact` feature).
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        TravelError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip_path(path) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

#[cfg_attr(not(feature = "compact"), allow(dead_code))]
fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_gzip_extension() {
        assert!(is_gzip_path(Path::new("data/travel.json.gz")));
        assert!(is_gzip_path(Path::new("TRAVEL.JSON.GZ")));
        assert!(!is_gzip_path(Path::new("travel.json")));
    }

    #[cfg(all(feature = "compact", feature = "json"))]
    #[test]
    fn reads_gzipped_dataset() {
        use crate::model::Dataset;
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("travel.json.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all(br#"{"beaches": [{"name": "Bondi", "imageUrl": "b.jpg", "description": "Sand"}]}"#)
            .unwrap();
        enc.finish().unwrap();

        let db = Dataset::load_from_path(&path).unwrap();
        assert_eq!(db.beaches()[0].name(), "Bondi");
    }
}
