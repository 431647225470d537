use crate::config::Palette;
use crate::consts;
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

/// The blinking message shown over the field while the game is paused or
/// over, together with the movement instructions
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Banner {
    pub(super) kind: BannerKind,

    /// Which of the two alternating styles the message is currently in
    pub(super) blink_on: bool,

    pub(super) palette: Palette,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum BannerKind {
    Paused,
    GameOver,
}

impl BannerKind {
    fn message(self) -> &'static str {
        match self {
            BannerKind::Paused => "Game paused, Press SPACE to continue...",
            BannerKind::GameOver => "GAME OVER, Press SPACE to restart...",
        }
    }
}

const INSTRUCTIONS: &str = "Press UP, DOWN, LEFT, RIGHT to move";

impl Widget for Banner {
    /*
     *   (blank)
     *   Press UP, DOWN, LEFT, RIGHT to move     <- INSTRUCTIONS_OFFSET rows up
     *   ...
     *   Game paused, Press SPACE to continue... <- middle row of `area`
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let middle = area.y + area.height / 2;
        let style = if self.blink_on {
            self.palette.tip
        } else {
            self.palette.tip_off
        };
        Line::styled(self.kind.message(), style)
            .centered()
            .render(Rect { y: middle, height: 1, ..area }, buf);
        if let Some(y) = middle
            .checked_sub(consts::INSTRUCTIONS_OFFSET)
            .filter(|&y| y >= area.y)
        {
            Line::styled(INSTRUCTIONS, self.palette.instructions)
                .centered()
                .render(Rect { y, height: 1, ..area }, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_paused() {
        let banner = Banner {
            kind: BannerKind::Paused,
            blink_on: true,
            palette: Palette::default(),
        };
        let area = Rect::new(0, 0, 44, 12);
        let mut buffer = Buffer::empty(area);
        banner.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "",
            "    Press UP, DOWN, LEFT, RIGHT to move     ",
            "",
            "",
            "",
            "",
            "  Game paused, Press SPACE to continue...   ",
            "",
            "",
            "",
            "",
            "",
        ]);
        expected.set_style(Rect::new(0, 1, 44, 1), consts::INSTRUCTIONS_STYLE);
        expected.set_style(Rect::new(0, 6, 44, 1), consts::TIP_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_game_over_blink_off() {
        let banner = Banner {
            kind: BannerKind::GameOver,
            blink_on: false,
            palette: Palette::default(),
        };
        let area = Rect::new(0, 0, 44, 12);
        let mut buffer = Buffer::empty(area);
        banner.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "",
            "    Press UP, DOWN, LEFT, RIGHT to move     ",
            "",
            "",
            "",
            "",
            "    GAME OVER, Press SPACE to restart...    ",
            "",
            "",
            "",
            "",
            "",
        ]);
        expected.set_style(Rect::new(0, 1, 44, 1), consts::INSTRUCTIONS_STYLE);
        expected.set_style(Rect::new(0, 6, 44, 1), consts::TIP_OFF_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_too_short_for_instructions() {
        let banner = Banner {
            kind: BannerKind::GameOver,
            blink_on: true,
            palette: Palette::default(),
        };
        let area = Rect::new(0, 0, 44, 3);
        let mut buffer = Buffer::empty(area);
        banner.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "",
            "    GAME OVER, Press SPACE to restart...    ",
            "",
        ]);
        expected.set_style(Rect::new(0, 1, 44, 1), consts::TIP_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
