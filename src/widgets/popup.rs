use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly under `anchor`, clipped to `bounds`
///
/// Returns None when there is no room below the anchor.
pub fn popup_below_anchor(
    anchor: Rect,
    bounds: Rect,
    width: u16,
    height: u16,
    x_offset: u16,
) -> Option<Rect> {
    let popup_x = anchor.x.saturating_add(x_offset);
    let popup_y = anchor.bottom();
    let room_below = bounds.bottom().saturating_sub(popup_y);
    let room_right = anchor.right().saturating_sub(popup_x);

    let popup = Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(room_right),
        height: height.min(room_below),
    };

    (!popup.is_empty()).then_some(popup)
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
