//! Renders a layout table as the source text of a `match` expression.

use std::io::Write;

use tracing::{debug, debug_span};

use crate::error::EmitError;
use crate::layout::KeyPair;

pub const HEADER: &str = "match qwerty_press {";
pub const FALLBACK: &str = "    _ => qwerty_press";
pub const CLOSING: &str = "}";

/// Write one arm per entry, in table order, between the header and the
/// fallback arm.
pub fn render_match<W: Write>(w: &mut W, table: &[KeyPair]) -> Result<(), EmitError> {
    let _span = debug_span!("render_match", entries = table.len()).entered();

    writeln!(w, "{HEADER}")?;
    for pair in table {
        let (from, to) = pair.codes();
        writeln!(w, "    {from} => {to},")?;
    }
    writeln!(w, "{FALLBACK}")?;
    writeln!(w, "{CLOSING}")?;
    w.flush()?;

    debug!(lines = table.len() + 3);
    Ok(())
}

/// [`render_match`] into an owned string.
pub fn match_block(table: &[KeyPair]) -> String {
    let mut buf = Vec::with_capacity(32 + table.len() * 16);
    render_match(&mut buf, table).expect("writing to a Vec must succeed");
    String::from_utf8(buf).expect("match block must be UTF-8")
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::layout::DVORAK_TABLE;

    #[test]
    fn block_shape() {
        let out = match_block(&DVORAK_TABLE);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), DVORAK_TABLE.len() + 3);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[lines.len() - 2], FALLBACK);
        assert_eq!(lines[lines.len() - 1], CLOSING);
        assert!(out.ends_with("}\n"));
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn every_entry_has_an_arm() {
        let out = match_block(&DVORAK_TABLE);
        let lines: Vec<&str> = out.lines().collect();
        for (i, pair) in DVORAK_TABLE.iter().enumerate() {
            let (from, to) = pair.codes();
            assert_eq!(lines[i + 1], format!("    {from} => {to},"), "{pair:?}");
        }
    }

    #[test]
    fn known_arms() {
        let out = match_block(&DVORAK_TABLE);
        assert!(out.contains("    113 => 39,\n"));
        assert!(out.contains("    97 => 97,\n"));
        assert!(out.contains("    47 => 122,\n"));
        assert!(out.starts_with("match qwerty_press {\n    113 => 39,\n"));
    }

    #[test]
    fn deterministic() {
        assert_eq!(match_block(&DVORAK_TABLE), match_block(&DVORAK_TABLE));
    }

    #[test]
    fn empty_table_is_fallback_only() {
        assert_eq!(
            match_block(&[]),
            "match qwerty_press {\n    _ => qwerty_press\n}\n"
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_surfaces() {
        let err = render_match(&mut BrokenPipe, &DVORAK_TABLE).unwrap_err();
        let EmitError::Write(io_err) = err;
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }
}
