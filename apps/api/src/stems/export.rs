//! CSV export of validated stems for offline review.

use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::models::stem::StemRecord;

/// Resolves `filename` inside `dir`, refusing anything that could escape it.
pub fn output_path(dir: &Path, filename: &str) -> Result<PathBuf, AppError> {
    let name = filename.trim();
    if name.is_empty() {
        return Err(AppError::Validation("output_filename cannot be empty".to_string()));
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(AppError::Validation(format!(
            "output_filename '{name}' must be a plain file name"
        )));
    }
    Ok(dir.join(name))
}

/// Writes one row per record with a header line. Creates the parent directory.
pub fn write_csv(path: &Path, records: &[StemRecord]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::Export(format!("create {}: {e}", parent.display())))?;
    }

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("open {}: {e}", path.display())))?;

    if records.is_empty() {
        writer
            .write_record([
                "facet",
                "anchor",
                "stem_text",
                "cosine_similarity",
                "drift_flag",
                "length_flag",
            ])
            .map_err(|e| AppError::Export(e.to_string()))?;
    }
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::Export(format!("flush {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(stem: &str, similarity: f64) -> StemRecord {
        StemRecord {
            facet: "Ethics".to_string(),
            anchor: "I act according to my values.".to_string(),
            stem_text: stem.to_string(),
            cosine_similarity: similarity,
            drift_flag: similarity < 0.75,
            length_flag: false,
        }
    }

    #[test]
    fn test_output_path_joins_plain_name() {
        let path = output_path(Path::new("data"), "validated_stems.csv").unwrap();
        assert_eq!(path, Path::new("data").join("validated_stems.csv"));
    }

    #[test]
    fn test_output_path_rejects_traversal() {
        assert!(output_path(Path::new("data"), "../etc/passwd").is_err());
        assert!(output_path(Path::new("data"), "nested/file.csv").is_err());
        assert!(output_path(Path::new("data"), "  ").is_err());
    }

    #[test]
    fn test_write_csv_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("stems.csv");
        let records = vec![
            record("I follow my values, even when it is hard.", 0.81),
            record("I do what is right.", 0.62),
        ];

        write_csv(&path, &records).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "facet,anchor,stem_text,cosine_similarity,drift_flag,length_flag"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("\"I follow my values, even when it is hard.\""));
        assert!(lines[2].ends_with("0.62,true,false"));
    }

    #[test]
    fn test_write_csv_empty_batch_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_csv(&path, &[]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents.trim_end(),
            "facet,anchor,stem_text,cosine_similarity,drift_flag,length_flag"
        );
    }
}
