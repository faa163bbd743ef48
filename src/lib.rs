//! # xmlstream
//!
//! A minimal streaming XML writer: well-formed nesting and attribute
//! placement enforced by construction.
//!
//! ## Features
//!
//! - **Streaming Write**: every call is serialized straight into the sink,
//!   with no document tree and no internal buffering
//! - **Well-formed by Construction**: the open-element stack and the
//!   attribute window are tracked per call, and malformed call sequences are
//!   rejected before any bytes are emitted
//! - **Any Sink**: writes to anything implementing `std::io::Write`
//! - **Typed Values**: element text and attribute values accept strings,
//!   integers, floats and booleans with a fixed textual form for each
//! - **Observable Contract Violations**: misuse surfaces as [`XmlError`]
//!   values, not process aborts, so callers and tests can assert on them
//!
//! Output-only by design: there is no parser, no DOM, no namespace handling
//! and no entity escaping. Callers pre-escape `<`, `>`, `&` and `"` where
//! their content needs it.
//!
//! ## Quick Start
//!
//! ```rust
//! use xmlstream::{Mode, XmlWriter};
//!
//! # fn main() -> xmlstream::Result<()> {
//! let mut out = Vec::new();
//! let mut writer = XmlWriter::new(&mut out);
//!
//! writer.start_document("1.0", "UTF-8", true)?;
//! writer.start_element("config", Mode::Normal)?;
//! writer.write_element("retries", 3)?;
//! writer.write_element("verbose", true)?;
//!
//! writer.start_element_attrs("endpoint")?;
//! writer.write_attribute("host", "localhost")?;
//! writer.write_attribute("port", 8080)?;
//! writer.end_attrs(Mode::Terse)?;
//! writer.end_element(Mode::Terse)?;
//!
//! writer.end_element(Mode::Normal)?;
//! writer.end_document()?;
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
//!      <config>\n\
//!      \t<retries>3</retries>\n\
//!      \t<verbose>True</verbose>\n\
//!      \t<endpoint host=\"localhost\" port=\"8080\"></endpoint>\n\
//!      </config>\n"
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod types;
pub mod writer;

pub use error::{Result, XmlError};
pub use types::XmlValue;
pub use writer::{Mode, XmlWriter};
