//! Small I/O helpers shared by the commands: interactive line input,
//! text file reading and parent directory creation.

use std::io::BufRead;
use std::path::Path;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, or `None` on EOF or a read error.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use farkell_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  y \n");
/// assert_eq!(read_stdin_line(&mut input), Some("y".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Read a UTF-8 text file, dropping a leading byte order mark.
pub fn read_text(path: &Path) -> Result<String, String> {
    let mut content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Ensure parent directory exists for given path, creating if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
        }
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stdin_line_with_whitespace() {
        let mut cursor = Cursor::new(b"  1 5 6  \n");
        assert_eq!(read_stdin_line(&mut cursor), Some("1 5 6".to_string()));
    }

    #[test]
    fn test_read_stdin_line_empty_after_trim() {
        let mut cursor = Cursor::new(b"   \n");
        assert_eq!(read_stdin_line(&mut cursor), Some("".to_string()));
    }

    #[test]
    fn test_read_stdin_line_eof() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(read_stdin_line(&mut cursor), None);
    }

    #[test]
    fn test_strip_utf8_bom() {
        let mut s = "\u{feff}hello".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "hello");

        let mut s = "hello".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "hello");
    }

    #[test]
    fn test_read_text_reports_missing_file() {
        let err = read_text(Path::new("no/such/farkell.toml")).unwrap_err();
        assert!(err.contains("no/such/farkell.toml"));
    }

    #[test]
    fn test_ensure_parent_dir_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("subdir").join("file.jsonl");

        assert!(ensure_parent_dir(&nested_path).is_ok());
        assert!(temp_dir.path().join("subdir").exists());
        assert!(ensure_parent_dir(Path::new("file.txt")).is_ok());
    }
}
