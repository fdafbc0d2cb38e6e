/// ATX heading (`#` through `######`).
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Matches a heading line, returning `(level, content)`.
    ///
    /// Markers start the line, are followed by whitespace, and then by at
    /// least one more character. Content is whatever follows the whitespace
    /// run; when only whitespace follows the markers, the run gives up its
    /// last character as content. Seven or more markers is not a heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if level == 0 || level > usize::from(Self::MAX_LEVEL) {
            return None;
        }

        let rest = &line[level..];
        let ws = rest.len() - rest.trim_start().len();
        if ws == 0 {
            return None;
        }
        if ws < rest.len() {
            return Some((level as u8, &rest[ws..]));
        }

        let (last, _) = rest.char_indices().next_back()?;
        (last > 0).then_some((level as u8, &rest[last..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# A", 1, "A")]
    #[case("###### Z", 6, "Z")]
    #[case("##   spaced out", 2, "spaced out")]
    #[case("#\ttab", 1, "tab")]
    #[case("# trailing  ", 1, "trailing  ")]
    #[case("##   ", 2, " ")]
    #[case("# \t", 1, "\t")]
    fn detects_headings(#[case] line: &str, #[case] level: u8, #[case] content: &str) {
        assert_eq!(Heading::parse(line), Some((level, content)));
    }

    #[rstest]
    #[case("####### seven")]
    #[case("#hashtag")]
    #[case("#")]
    #[case("# ")]
    #[case("  # indented")]
    #[case("plain # text")]
    fn rejects_non_headings(#[case] line: &str) {
        assert_eq!(Heading::parse(line), None);
    }
}
