pub mod heading;
pub mod list_marker;

pub use heading::Heading;
pub use list_marker::ListMarker;

/// Content following a block marker.
///
/// The marker must be followed by at least one whitespace character, and
/// something other than whitespace must follow that. The whitespace run is
/// dropped; the rest is returned verbatim.
pub(crate) fn content_after_marker(rest: &str) -> Option<&str> {
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let content = rest.trim_start();
    (!content.is_empty()).then_some(content)
}
