use super::kinds::{CodeSpan, Emphasis, Link, Strong};

/// Every closing delimiter the inline rules search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closer {
    DoubleStar,
    DoubleUnderscore,
    Star,
    Underscore,
    Tick,
    BracketClose,
    ParenClose,
}

impl Closer {
    const COUNT: usize = 7;

    pub fn for_delimiter(delim: &str) -> Option<Self> {
        match delim {
            d if d == Strong::DELIMITERS[0] => Some(Closer::DoubleStar),
            d if d == Strong::DELIMITERS[1] => Some(Closer::DoubleUnderscore),
            d if d == Emphasis::DELIMITERS[0] => Some(Closer::Star),
            d if d == Emphasis::DELIMITERS[1] => Some(Closer::Underscore),
            d if d == CodeSpan::TICK => Some(Closer::Tick),
            d if d == Link::TEXT_CLOSE => Some(Closer::BracketClose),
            d if d == Link::URL_CLOSE => Some(Closer::ParenClose),
            _ => None,
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            Closer::DoubleStar => Strong::DELIMITERS[0],
            Closer::DoubleUnderscore => Strong::DELIMITERS[1],
            Closer::Star => Emphasis::DELIMITERS[0],
            Closer::Underscore => Emphasis::DELIMITERS[1],
            Closer::Tick => CodeSpan::TICK,
            Closer::BracketClose => Link::TEXT_CLOSE,
            Closer::ParenClose => Link::URL_CLOSE,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Remembered results of closer searches over one string.
///
/// Two facts make earlier searches reusable:
///
/// - if a search from `p` found nothing, a search from any `q >= p` finds
///   nothing either;
/// - if a search from `p` found the closer at `h`, a search from any
///   `q` in `p..=h` finds `h` too.
///
/// Without this, a line of unpaired openers rescans its tail once per
/// opener.
#[derive(Debug, Clone)]
pub struct Watermarks {
    exhausted_from: [usize; Closer::COUNT],
    last_hit: [Option<(usize, usize)>; Closer::COUNT],
}

impl Watermarks {
    pub fn new() -> Self {
        Self {
            exhausted_from: [usize::MAX; Closer::COUNT],
            last_hit: [None; Closer::COUNT],
        }
    }

    /// A known answer for a search of `closer` from `from`, if any.
    ///
    /// `Some(None)` means the search is known to fail.
    pub fn lookup(&self, closer: Closer, from: usize) -> Option<Option<usize>> {
        let idx = closer.index();
        if from >= self.exhausted_from[idx] {
            return Some(None);
        }
        match self.last_hit[idx] {
            Some((searched_from, hit)) if searched_from <= from && from <= hit => Some(Some(hit)),
            _ => None,
        }
    }

    /// Records the outcome of a search of `closer` from `from`.
    pub fn record(&mut self, closer: Closer, from: usize, result: Option<usize>) {
        let idx = closer.index();
        match result {
            Some(hit) => self.last_hit[idx] = Some((from, hit)),
            None => self.exhausted_from[idx] = self.exhausted_from[idx].min(from),
        }
    }
}

impl Default for Watermarks {
    fn default() -> Self {
        Self::new()
    }
}
