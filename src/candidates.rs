use std::io::{self, Write};

use crate::model::CandidateValue;

/// Writes one `value:description` line per candidate.
///
/// This is the wire format the generated on-the-fly helper parses back by
/// splitting on newlines and feeding each line to `_describe`, so colons are
/// passed through as-is and an empty list produces no output at all.
pub fn render_candidates<W: Write>(w: &mut W, values: &[CandidateValue]) -> io::Result<()> {
    for v in values {
        writeln!(w, "{}:{}", v.value, v.description)?;
    }
    Ok(())
}
