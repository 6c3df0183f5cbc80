use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::core::Mode;
use crate::shared::constants;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Button {
    Size,
    Clear,
    Mode(Mode),
    Quit,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::Size,
        Button::Clear,
        Button::Mode(Mode::Default),
        Button::Mode(Mode::Random),
        Button::Mode(Mode::Darken),
        Button::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Button::Size => " Size ",
            Button::Clear => " Clear ",
            Button::Mode(Mode::Default) => " Default ",
            Button::Mode(Mode::Random) => " Random ",
            Button::Mode(Mode::Darken) => " Darken ",
            Button::Quit => " Quit ",
        }
    }

    fn width(self) -> u16 {
        self.label().len() as u16
    }
}

/// Lays the buttons left to right, one column apart, dropping whatever
/// doesn't fit on the row.
pub fn layout(area: Rect) -> Vec<(Button, Rect)> {
    let mut x = area.x;
    let mut placed = Vec::with_capacity(Button::ALL.len());
    if area.height == 0 {
        return placed;
    }
    for button in Button::ALL {
        let width = button.width();
        if x + width > area.right() {
            break;
        }
        placed.push((button, Rect::new(x, area.y, width, 1)));
        x += width + 1;
    }
    placed
}

pub fn hit(area: Rect, column: u16, row: u16) -> Option<Button> {
    layout(area).into_iter().find_map(|(button, rect)| {
        let inside = column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom();
        inside.then_some(button)
    })
}

/// Button row with the active mode highlighted
pub struct Toolbar {
    mode: Mode,
}

impl Toolbar {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    fn style_for(&self, button: Button) -> Style {
        let base = Style::default().fg(Color::White).bg(constants::BUTTON_IDLE);
        match button {
            Button::Mode(mode) if mode == self.mode => base
                .bg(constants::BUTTON_ACTIVE)
                .add_modifier(Modifier::BOLD),
            _ => base,
        }
    }
}

impl Widget for Toolbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (button, rect) in layout(area) {
            buf.set_string(rect.x, rect.y, button.label(), self.style_for(button));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_places_buttons_in_order() {
        let placed = layout(Rect::new(0, 0, 80, 1));
        assert_eq!(placed.len(), Button::ALL.len());
        assert_eq!(placed[0], (Button::Size, Rect::new(0, 0, 6, 1)));
        assert_eq!(placed[1], (Button::Clear, Rect::new(7, 0, 7, 1)));
    }

    #[test]
    fn test_layout_drops_buttons_that_do_not_fit() {
        let placed = layout(Rect::new(0, 0, 14, 1));
        assert_eq!(placed.len(), 2);
    }

    #[test]
    fn test_hit_finds_button_under_pointer() {
        let area = Rect::new(0, 0, 80, 1);
        assert_eq!(hit(area, 0, 0), Some(Button::Size));
        assert_eq!(hit(area, 8, 0), Some(Button::Clear));
        assert_eq!(hit(area, 6, 0), None);
        assert_eq!(hit(area, 8, 1), None);
    }

    #[test]
    fn test_active_mode_is_highlighted() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        Toolbar::new(Mode::Random).render(area, &mut buf);

        let positions = layout(area);
        let bg_of = |wanted: Button| {
            let (_, rect) = positions.iter().find(|(b, _)| *b == wanted).copied().unwrap();
            buf.get(rect.x, rect.y).bg
        };

        assert_eq!(bg_of(Button::Mode(Mode::Random)), constants::BUTTON_ACTIVE);
        assert_eq!(bg_of(Button::Mode(Mode::Darken)), constants::BUTTON_IDLE);
        assert_eq!(bg_of(Button::Size), constants::BUTTON_IDLE);
    }
}
