//! Write a small configuration document to stdout.
//!
//! Run with: cargo run --example basic_write

use std::io::{self, BufWriter, Write};

use xmlstream::{Mode, XmlWriter};

fn main() -> xmlstream::Result<()> {
    let stdout = io::stdout();
    let mut writer = XmlWriter::new(BufWriter::new(stdout.lock()));

    writer.start_document("1.0", "UTF-8", true)?;
    writer.start_element("config", Mode::Normal)?;
    writer.write_element("name", "demo")?;
    writer.write_element("retries", 3)?;
    writer.write_element("timeout", 2.5)?;
    writer.write_element("verbose", false)?;
    writer.end_element(Mode::Normal)?;
    writer.end_document()?;

    writer.into_inner().flush()?;
    Ok(())
}
