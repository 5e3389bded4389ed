use crate::config::Config;
use crate::game::{Game, GameError};
use ratatui::{DefaultTerminal, Frame};

/// The top-level application state
#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,
}

impl App {
    pub(crate) fn new(config: Config) -> Result<App, GameError> {
        Ok(App {
            screen: Screen::Game(Game::new(config)?),
        })
    }

    pub(crate) fn run(mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.quitting() {
            terminal.draw(|frame| self.draw(frame))?;
            if let Some(screen) = self.process_input()? {
                self.screen = screen;
            }
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        match &self.screen {
            Screen::Game(game) => game.draw(frame),
            Screen::Quit => (),
        }
    }

    /// Wait for the next tick or input event and react to it.  Returns
    /// `Some` if the app should switch to a new screen.
    fn process_input(&mut self) -> anyhow::Result<Option<Screen>> {
        match &mut self.screen {
            Screen::Game(game) => game.process_input(),
            Screen::Quit => Ok(None),
        }
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Game(Game),
    Quit,
}
