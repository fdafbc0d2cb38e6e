/// A reference to a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Zero-based line number in the source.
    pub number: usize,
    /// Line text without the `\n` terminator or a trailing `\r`.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text`.
///
/// Splits on `\n` only, so a trailing newline yields a final empty line
/// (which the block phase treats as blank). Empty input yields nothing.
pub fn lines(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut parts = (!text.is_empty()).then(|| text.split('\n'));
    let mut number = 0usize;
    std::iter::from_fn(move || {
        let raw = parts.as_mut()?.next()?;
        let line = LineRef {
            number,
            text: raw.strip_suffix('\r').unwrap_or(raw),
        };
        number += 1;
        Some(line)
    })
}
