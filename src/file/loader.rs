//! Document loading from files, readers and stdin.
//!
//! Gzip-compressed input is decompressed transparently. The format is taken
//! from the caller when given, otherwise from the file extension (ignoring a
//! trailing `.gz`), and defaults to YAML.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::document::{parse_json, parse_yaml_documents, Format, Value};

/// Loads every document from a file.
///
/// A JSON file always yields exactly one document; a YAML file yields one
/// document per `---` section.
///
/// # Examples
///
/// ```no_run
/// use yamlpick::file::loader::load_file;
///
/// let documents = load_file("config.yaml", None).unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read
/// - The file is gzipped but corrupted
/// - The contents are not valid in the detected format
pub fn load_file<P: AsRef<Path>>(path: P, format: Option<Format>) -> Result<Vec<Value>> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    let format = format.unwrap_or_else(|| determine_format(path_ref));
    debug!("loading {} as {:?}", path_ref.display(), format);
    parse_content(&content, format)
}

/// Loads every document from an arbitrary reader, such as stdin.
///
/// Input starting with the gzip magic bytes is decompressed first.
pub fn load_from_reader<R: Read>(mut reader: R, format: Format) -> Result<Vec<Value>> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .context("Failed to read input")?;

    // Check for gzip magic bytes (0x1f 0x8b)
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")?
    };

    parse_content(&content, format)
}

/// Loads every document from standard input.
pub fn load_from_stdin(format: Format) -> Result<Vec<Value>> {
    load_from_reader(std::io::stdin().lock(), format)
}

/// Parses text in the given format into its documents.
pub fn parse_content(content: &str, format: Format) -> Result<Vec<Value>> {
    match format {
        Format::Json => Ok(vec![parse_json(content)?]),
        Format::Yaml => parse_yaml_documents(content),
    }
}

/// Determines the document format from a file name.
///
/// Handles a `.gz` suffix:
/// - `data.json` → JSON
/// - `data.json.gz` → JSON
/// - `data.yml.gz` → YAML
/// - anything else → YAML
pub fn determine_format<P: AsRef<Path>>(path: P) -> Format {
    let path_str = path.as_ref().to_string_lossy();

    let base = if let Some(stripped) = path_str.strip_suffix(".gz") {
        stripped
    } else {
        &path_str
    };

    if base.ends_with(".json") {
        Format::Json
    } else {
        Format::Yaml
    }
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_format() {
        assert_eq!(determine_format("data.json"), Format::Json);
        assert_eq!(determine_format("data.json.gz"), Format::Json);
        assert_eq!(determine_format("data.yml.gz"), Format::Yaml);
        assert_eq!(determine_format("data.yaml"), Format::Yaml);
        assert_eq!(determine_format("Gemfile.lock"), Format::Yaml);
    }

    #[test]
    fn test_parse_content_multi_document() {
        let docs = parse_content("a: 1\n---\na: 2\n", Format::Yaml).unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn test_load_from_reader_plain() {
        let docs = load_from_reader(&b"{\"a\": 1}"[..], Format::Json).unwrap();
        assert_eq!(docs.len(), 1);
        assert!(docs[0].is_mapping());
    }

    #[test]
    fn test_load_from_reader_rejects_invalid_utf8() {
        assert!(load_from_reader(&[0xff, 0xfe, 0x00][..], Format::Yaml).is_err());
    }
}
