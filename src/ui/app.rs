use std::error::Error;
use std::io;

use log::debug;
use termion::event::{Event as TermEvent, Key};
use unsegen::base::Terminal;
use unsegen::input::Input;
use unsegen::widget::{RenderingHints, VLayout, Widget};

use crate::cmds::Cmd;
use crate::config::Config;
use crate::events::{Dispatcher, Event};

use super::context::{Context, Theme};
use super::month_pane::MonthPane;
use super::status_line::StatusLine;

pub struct App<'a> {
    config: &'a Config,
    context: Context,
    /// Digits typed so far of a day-number selection.
    pending: String,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config) -> App<'a> {
        App {
            config,
            context: Context::with_theme(Theme::from_config(config)),
            pending: String::new(),
        }
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w {
        VLayout::new()
            .widget(MonthPane::new(self.context.displayed(), &self.context))
            .widget(StatusLine::new(&self.context, &self.pending))
    }

    /// Renders the current month once as plain text, for non-interactive
    /// use. Deliberately avoids the alternate screen so the output stays
    /// visible after exit.
    pub fn show<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        MonthPane::new(self.context.displayed(), &self.context).write_to(sink)
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<(), Box<dyn Error>> {
        let mut run = true;

        while run {
            {
                let root = term.create_root_window();
                self.as_widget().draw(root, RenderingHints::default());
            }
            term.present();

            match dispatcher.next()? {
                Event::Update => self.context.update(),
                Event::Input(input) => run = self.handle_input(input),
            }
        }

        Ok(())
    }

    fn handle_input(&mut self, input: Input) -> bool {
        if let TermEvent::Key(key) = input.event {
            match key {
                Key::Char(c) if c.is_ascii_digit() => self.pending.push(c),
                Key::Char('\n') if !self.pending.is_empty() => {
                    if let Ok(day) = self.pending.parse::<i32>() {
                        self.context.select_day(day);
                    }
                    self.pending.clear();
                }
                Key::Backspace if !self.pending.is_empty() => {
                    self.pending.pop();
                }
                Key::Esc if !self.pending.is_empty() => self.pending.clear(),
                Key::Esc => return false,
                _ => {
                    if let Some(&cmd) = self.config.key_map.get(&key) {
                        return self.run_cmd(cmd);
                    }
                }
            }
        }

        true
    }

    fn run_cmd(&mut self, cmd: Cmd) -> bool {
        debug!("running {:?}", cmd);

        match cmd {
            Cmd::PrevMonth => self.context.prev_month(),
            Cmd::NextMonth => self.context.next_month(),
            Cmd::Today => self.context.go_to_today(),
            Cmd::SelectPrevDay => self.context.move_selection(-1),
            Cmd::SelectNextDay => self.context.move_selection(1),
            Cmd::SelectPrevWeek => self.context.move_selection(-7),
            Cmd::SelectNextWeek => self.context.move_selection(7),
            Cmd::Exit => return false,
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::MonthIndex;

    fn key_input(key: Key) -> Input {
        Input {
            event: TermEvent::Key(key),
            raw: Vec::new(),
        }
    }

    #[test]
    fn month_navigation_commands_move_the_displayed_month() {
        let config = Config::default();
        let mut app = App::new(&config);
        let start = app.context.displayed();

        assert!(app.run_cmd(Cmd::NextMonth));
        assert_eq!(app.context.displayed(), start.next());

        assert!(app.run_cmd(Cmd::PrevMonth));
        assert!(app.run_cmd(Cmd::PrevMonth));
        assert_eq!(app.context.displayed(), start.prev());

        assert!(app.run_cmd(Cmd::Today));
        assert_eq!(app.context.displayed(), MonthIndex::current());

        assert!(!app.run_cmd(Cmd::Exit));
    }

    #[test]
    fn typed_digits_followed_by_enter_select_that_day() {
        let config = Config::default();
        let mut app = App::new(&config);

        assert!(app.handle_input(key_input(Key::Char('4'))));
        assert!(app.handle_input(key_input(Key::Char('2'))));
        assert_eq!(app.pending, "42");

        assert!(app.handle_input(key_input(Key::Char('\n'))));
        assert_eq!(app.context.selected_day(), Some(42));
        assert!(app.pending.is_empty());
    }

    #[test]
    fn escape_clears_a_pending_entry_before_quitting() {
        let config = Config::default();
        let mut app = App::new(&config);
        let before = app.context.selected_day();

        assert!(app.handle_input(key_input(Key::Char('1'))));
        assert!(app.handle_input(key_input(Key::Esc)));
        assert!(app.pending.is_empty());
        assert_eq!(app.context.selected_day(), before);

        assert!(!app.handle_input(key_input(Key::Esc)));
    }

    #[test]
    fn arrow_keys_move_the_selection_through_the_keymap() {
        let config = Config::default();
        let mut app = App::new(&config);
        app.context.select_day(10);

        assert!(app.handle_input(key_input(Key::Down)));
        assert_eq!(app.context.selected_day(), Some(17));

        assert!(app.handle_input(key_input(Key::Left)));
        assert_eq!(app.context.selected_day(), Some(16));
    }
}
