//! Helpers for writing command results.

use std::fmt;
use std::io::Write;

use eyre::{Context, Result};

pub(crate) fn write_parsed(
    writer: &mut dyn Write,
    header: &str,
    rendered: &str,
    structured: &dyn fmt::Debug,
) -> Result<()> {
    writeln!(writer, "{header}: {rendered}")
        .and_then(|()| writeln!(writer, "{structured:?}"))
        .wrap_err_with(|| format!("failed to write parsed {header} value"))
}

pub(crate) fn write_absent(writer: &mut dyn Write, header: &str) -> Result<()> {
    writeln!(writer, "{header}: (no value)")
        .wrap_err_with(|| format!("failed to write absent {header} value"))
}

pub(crate) fn write_selection(writer: &mut dyn Write, selected: Option<&str>) -> Result<()> {
    let line = selected.unwrap_or("406 Not Acceptable");
    writeln!(writer, "{line}").wrap_err("failed to write negotiation result")
}

pub(crate) fn write_precondition(writer: &mut dyn Write, holds: bool) -> Result<()> {
    let line = if holds {
        "precondition holds"
    } else {
        "412 Precondition Failed"
    };
    writeln!(writer, "{line}").wrap_err("failed to write precondition result")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(write: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        if let Err(err) = write(&mut buffer) {
            panic!("writing to a Vec should not fail: {err}");
        }
        String::from_utf8_lossy(&buffer).into_owned()
    }

    #[test]
    fn selection_or_not_acceptable() {
        assert_eq!(written(|w| write_selection(w, Some("gzip"))), "gzip\n");
        assert_eq!(written(|w| write_selection(w, None)), "406 Not Acceptable\n");
    }

    #[test]
    fn parsed_value_prints_both_forms() {
        let out = written(|w| write_parsed(w, "Accept", "*/*", &vec![1_u8]));
        assert_eq!(out, "Accept: */*\n[1]\n");
    }

    #[test]
    fn absent_and_precondition_lines() {
        assert_eq!(written(|w| write_absent(w, "If-Match")), "If-Match: (no value)\n");
        assert_eq!(written(|w| write_precondition(w, false)), "412 Precondition Failed\n");
    }
}
