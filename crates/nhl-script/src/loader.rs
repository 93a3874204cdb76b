use std::io::ErrorKind;
use std::path::Path;

use nhl_core::StackSizeTable;

use crate::error::StackTableError;

/// Parse a stack-size table: one `<stack size> <item id>` pair per line,
/// blank lines and `#` comment lines skipped.
pub fn parse_stack_sizes(text: &str) -> Result<StackSizeTable, StackTableError> {
    let mut table = StackSizeTable::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let malformed = || StackTableError::MalformedLine {
            line: index + 1,
            content: line.to_string(),
        };

        let mut fields = line.split_whitespace();
        let (Some(stack_size), Some(item_id), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed());
        };
        let stack_size: u32 = stack_size.parse().map_err(|_| malformed())?;
        let item_id: u16 = item_id.parse().map_err(|_| malformed())?;
        table.insert(item_id, stack_size);
    }
    Ok(table)
}

/// Load a stack-size table from disk. A missing file yields an empty table.
pub fn load_stack_sizes(path: &Path) -> Result<StackSizeTable, StackTableError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("Stack size file not found: {}", path.display());
            return Ok(StackSizeTable::new());
        }
        Err(e) => return Err(e.into()),
    };

    let table = parse_stack_sizes(&text)?;
    log::info!(
        "Loaded {} stack sizes from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries_and_comments() {
        let text = "# stack item\n30 2000\n\n  10 2001  \n# 99 5\n1 7\n";
        let table = parse_stack_sizes(text).expect("should parse");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(2000), Some(30));
        assert_eq!(table.get(2001), Some(10));
        assert_eq!(table.get(7), Some(1));
        assert_eq!(table.get(5), None);
    }

    #[test]
    fn test_malformed_lines_rejected() {
        for text in ["30", "30 2000 extra", "x 2000", "30 70000", "30 -1"] {
            let result = parse_stack_sizes(text);
            assert!(
                matches!(result, Err(StackTableError::MalformedLine { line: 1, .. })),
                "{text:?} should be rejected"
            );
        }

        let result = parse_stack_sizes("30 1\n\nbad\n");
        match result {
            Err(StackTableError::MalformedLine { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "bad");
            }
            other => panic!("expected MalformedLine, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_empty_table() {
        let path = std::env::temp_dir().join("nhl-script-no-such-stacksize.txt");
        let table = load_stack_sizes(&path).expect("missing file is tolerated");
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("nhl-stacksize-{}.txt", std::process::id()));
        std::fs::write(&path, "99 4000\n").expect("write temp file");
        let table = load_stack_sizes(&path).expect("should load");
        std::fs::remove_file(&path).ok();
        assert_eq!(table.get(4000), Some(99));
    }
}
