//! Attributed elements in terse and normal mode.
//!
//! Run with: cargo run --example attributes

use std::io::{self, BufWriter, Write};

use xmlstream::{Mode, XmlWriter};

fn main() -> xmlstream::Result<()> {
    let stdout = io::stdout();
    let mut writer = XmlWriter::new(BufWriter::new(stdout.lock()));

    writer.start_document("1.0", "UTF-8", true)?;
    writer.start_element("inventory", Mode::Normal)?;

    // Terse: the whole element stays on one line
    writer.start_element_attrs("item")?;
    writer.write_attribute("id", 7)?;
    writer.write_attribute("in_stock", true)?;
    writer.end_attrs(Mode::Terse)?;
    writer.end_element(Mode::Terse)?;

    // Normal: attributes on the open tag, children indented below
    writer.start_element_attrs("item")?;
    writer.write_attribute("id", 8)?;
    writer.end_attrs(Mode::Normal)?;
    writer.write_element("price", 19.99)?;
    writer.end_element(Mode::Normal)?;

    writer.end_element(Mode::Normal)?;
    writer.end_document()?;

    writer.into_inner().flush()?;
    Ok(())
}
