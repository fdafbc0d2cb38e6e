/// Bold (strong emphasis) delimiters. Checked before [`Emphasis`] so that
/// `**` is never read as two italic markers when a closing pair exists.
pub struct Strong;

impl Strong {
    pub const DELIMITERS: &'static [&'static str] = &["**", "__"];
}

/// Italic delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITERS: &'static [&'static str] = &["*", "_"];
}
