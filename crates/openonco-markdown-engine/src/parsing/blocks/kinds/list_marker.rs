use super::content_after_marker;

/// List item markers: `-`/`*` bullets and `N.` ordinals.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: &'static [char] = &['-', '*'];
    pub const ORDINAL_SUFFIX: char = '.';

    /// Content of an unordered item line.
    pub fn bullet(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::BULLETS)?;
        content_after_marker(rest)
    }

    /// Content of an ordered item line.
    pub fn ordered(line: &str) -> Option<&str> {
        let t = line.trim_start();
        let digits = t.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let rest = t[digits..].strip_prefix(Self::ORDINAL_SUFFIX)?;
        content_after_marker(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets() {
        assert_eq!(ListMarker::bullet("- a"), Some("a"));
        assert_eq!(ListMarker::bullet("* a"), Some("a"));
        assert_eq!(ListMarker::bullet("    - nested"), Some("nested"));
        assert_eq!(ListMarker::bullet("- **bold** item"), Some("**bold** item"));
    }

    #[test]
    fn emphasis_at_line_start_is_not_a_bullet() {
        assert_eq!(ListMarker::bullet("**bold** text"), None);
        assert_eq!(ListMarker::bullet("*italic* text"), None);
        assert_eq!(ListMarker::bullet("-5 degrees"), None);
        assert_eq!(ListMarker::bullet("- "), None);
    }

    #[test]
    fn ordinals() {
        assert_eq!(ListMarker::ordered("1. one"), Some("one"));
        assert_eq!(ListMarker::ordered("42.  answer"), Some("answer"));
        assert_eq!(ListMarker::ordered(" 3. indented"), Some("indented"));
    }

    #[test]
    fn numbers_in_prose_are_not_ordinals() {
        assert_eq!(ListMarker::ordered("1.5 mg daily"), None);
        assert_eq!(ListMarker::ordered("2) paren"), None);
        assert_eq!(ListMarker::ordered(". dot"), None);
        assert_eq!(ListMarker::ordered("7."), None);
    }
}
