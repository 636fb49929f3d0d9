//! Writes rendered host blocks to the open output sink.

use std::io::Write;

use crate::error::Error;
use crate::ip::IpPattern;
use crate::record::{HostKind, HostRecord};

/// Appends host blocks to the output stream, one blank line between blocks.
///
/// Emission re-validates node addresses even though the extractor already
/// filtered candidates; this is the last gate before a block reaches the
/// file. Whether a failed check aborts the run is the caller's policy.
pub struct Emitter<W> {
    /// Shared dotted-quad matcher for the emission-time re-check.
    ip: IpPattern,
    /// The open output stream, held for the whole run.
    sink: W,
}

impl<W: Write> Emitter<W> {
    pub fn new(sink: W) -> Self {
        return Self {
            ip: IpPattern::new(),
            sink,
        };
    }

    /// Consume the emitter and hand back the sink.
    pub fn into_inner(self) -> W {
        return self.sink;
    }

    /// Validate, render, write, then confirm on stdout.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIpAddress` when a node record carries an
    /// address that fails the strict dotted-quad check, or `Error::Io`
    /// when the sink cannot be written.
    pub fn emit(&mut self, record: &HostRecord) -> Result<(), Error> {
        if record.kind == HostKind::Node {
            let address = record.address.as_deref().unwrap_or("");
            if !self.ip.is_valid(address) {
                return Err(Error::InvalidIpAddress {
                    value: address.to_string(),
                });
            }
        }

        writeln!(self.sink, "{}\n", record.render())?;
        println!("{} is written", record.host_name);
        return Ok(());
    }
}
