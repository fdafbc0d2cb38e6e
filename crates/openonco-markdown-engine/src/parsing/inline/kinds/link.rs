/// `[text](url)` link delimiters.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: &'static str = "[";
    pub const TEXT_CLOSE: &'static str = "]";
    pub const URL_OPEN: &'static str = "(";
    pub const URL_CLOSE: &'static str = ")";
}
