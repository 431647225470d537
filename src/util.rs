use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of size `size` centered within `area`, shrunk to fit if
/// `area` is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [display] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [display] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(display);
    display
}
