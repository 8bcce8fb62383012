/// Class applied to `#header` once the page has scrolled past the threshold.
pub const SCROLLED_CLASS: &str = "header--scrolled";

/// Whether the header should carry [`SCROLLED_CLASS`] at this offset.
/// The threshold itself counts as not scrolled.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}
