//! Small I/O helpers shared by the commands.
//!
//! - Reading one line of interactive input
//! - Reading JSONL text files

use std::io::BufRead;
use std::path::Path;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, or `None` on EOF or read error.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use eights_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  8H \n");
/// assert_eq!(read_stdin_line(&mut input), Some("8H".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Reads a whole text file, dropping a leading UTF-8 BOM.
pub fn read_text(path: &Path) -> Result<String, String> {
    let mut content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    strip_utf8_bom(&mut content);
    Ok(content)
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
    fn test_read_stdin_line_valid_input() {
        let mut cursor = Cursor::new(b"draw\n");
        assert_eq!(read_stdin_line(&mut cursor), Some("draw".to_string()));
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
        let mut s = "\u{feff}{}".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "{}");
        let mut plain = "hello".to_string();
        strip_utf8_bom(&mut plain);
        assert_eq!(plain, "hello");
    }

    #[test]
    fn test_read_text_missing_file() {
        let err = read_text(Path::new("definitely/not/here.jsonl")).unwrap_err();
        assert!(err.contains("Failed to read"));
    }
}
