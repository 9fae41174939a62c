//! Walk stream consumption and printing.

use std::future::poll_fn;
use std::io::Write;
use std::pin::pin;
use std::task::Context;

use async_snmp::VarBind;
use futures_core::Stream;

use crate::error::{Error, Result};
use crate::render::write_entry;

/// Print every entry of a walk stream in arrival order.
///
/// Entries are written as they arrive; nothing is buffered or re-sorted.
/// The first stream error aborts the walk, reporting how many entries were
/// already printed. On exhaustion a completion line is emitted and the
/// entry count returned.
pub async fn print_walk<S, E, W>(stream: S, out: &mut W) -> Result<u64>
where
    S: Stream<Item = std::result::Result<VarBind, E>>,
    E: Into<Error>,
    W: Write,
{
    let mut stream = pin!(stream);
    let mut entries: u64 = 0;

    loop {
        let item = poll_fn(|cx: &mut Context<'_>| stream.as_mut().poll_next(cx)).await;
        match item {
            Some(Ok(vb)) => {
                write_entry(out, &vb)?;
                entries += 1;
            }
            Some(Err(e)) => {
                return Err(Error::Walk {
                    entries,
                    source: Box::new(e.into()),
                });
            }
            None => {
                writeln!(out, "walk complete: {} entries", entries)?;
                return Ok(entries);
            }
        }
    }
}
