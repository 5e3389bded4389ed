use crate::command::Command;
use crate::consts;
use crate::util::EnumExt;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// A widget for displaying a pause menu pop-up
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Paused {
    /// The currently-selected item in the pause menu
    selection: PauseOpt,
}

impl Paused {
    /// The height that should be used for the `Rect` passed to
    /// `Paused::render()`
    pub(super) const HEIGHT: u16 = 5;

    /// The width that should be used for the `Rect` passed to
    /// `Paused::render()`
    pub(super) const WIDTH: u16 = 18;

    /// Create a new `Paused`
    pub(super) fn new() -> Paused {
        Paused {
            selection: PauseOpt::min(),
        }
    }

    /// Handle an input command.  Returns `Some` if the player made a choice.
    pub(super) fn handle_command(&mut self, cmd: Command) -> Option<PauseOpt> {
        match cmd {
            Command::Esc => return Some(PauseOpt::Resume),
            Command::R => return Some(PauseOpt::Restart),
            Command::Q => return Some(PauseOpt::Retire),
            Command::Enter => return Some(self.selection),
            Command::Up => {
                if let Some(opt) = self.selection.prev() {
                    self.selection = opt;
                }
            }
            Command::Down => {
                if let Some(opt) = self.selection.next() {
                    self.selection = opt;
                }
            }
            Command::Next => self.selection = self.selection.next().unwrap_or_else(PauseOpt::min),
            Command::Prev => self.selection = self.selection.prev().unwrap_or_else(PauseOpt::max),
            Command::Home => self.selection = PauseOpt::min(),
            Command::End => self.selection = PauseOpt::max(),
            _ => (),
        }
        None
    }
}

/// The choices in the pause menu
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(super) enum PauseOpt {
    /// Unpause/resume the round
    Resume,

    /// Start the round over
    Restart,

    /// Give up and show the final score
    Retire,
}

impl PauseOpt {
    /// Render the option as a `Line` for display in the pause menu.  If
    /// `selected` is `true`, this option is the currently-selected one.
    fn to_line(self, selected: bool) -> Line<'static> {
        let mut line = Line::default();
        if selected {
            line.push_span("» ");
        } else {
            line.push_span("  ");
        }
        match self {
            PauseOpt::Resume => {
                line.push_span("Resume (");
                line.push_span(Span::styled("Esc", consts::KEY_STYLE));
                line.push_span(")");
            }
            PauseOpt::Restart => {
                line.push_span("Restart (");
                line.push_span(Span::styled("r", consts::KEY_STYLE));
                line.push_span(")");
            }
            PauseOpt::Retire => {
                line.push_span("Retire (");
                line.push_span(Span::styled("q", consts::KEY_STYLE));
                line.push_span(")");
            }
        }
        if selected {
            line = line.style(consts::MENU_SELECTION_STYLE);
        }
        line
    }
}

impl Widget for Paused {
    /*
     * ┌──── PAUSED ────┐
     * │ » Resume (Esc) │
     * │   Restart (r)  │
     * │   Retire (q)   │
     * └────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" PAUSED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        for (opt, row) in PauseOpt::iter().zip(inner.rows()) {
            opt.to_line(self.selection == opt).render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_resume() {
        assert_eq!(Paused::new().selection, PauseOpt::Resume);
    }

    #[test]
    fn shortcut_keys() {
        let mut paused = Paused::new();
        assert_eq!(paused.handle_command(Command::Esc), Some(PauseOpt::Resume));
        assert_eq!(paused.handle_command(Command::R), Some(PauseOpt::Restart));
        assert_eq!(paused.handle_command(Command::Q), Some(PauseOpt::Retire));
    }

    #[test]
    fn navigation() {
        let mut paused = Paused::new();
        assert_eq!(paused.handle_command(Command::Down), None);
        assert_eq!(paused.selection, PauseOpt::Restart);
        assert_eq!(paused.handle_command(Command::Down), None);
        assert_eq!(paused.selection, PauseOpt::Retire);
        // No wrap past the last option
        assert_eq!(paused.handle_command(Command::Down), None);
        assert_eq!(paused.selection, PauseOpt::Retire);
        assert_eq!(paused.handle_command(Command::Home), None);
        assert_eq!(paused.selection, PauseOpt::Resume);
        // Tab wraps around
        assert_eq!(paused.handle_command(Command::Prev), None);
        assert_eq!(paused.selection, PauseOpt::Retire);
        assert_eq!(paused.handle_command(Command::Enter), Some(PauseOpt::Retire));
    }
}
