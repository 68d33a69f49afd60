use chrono::prelude::*;
use log::debug;

use unsegen::base::{Color, StyleModifier};

use crate::calendar::MonthIndex;
use crate::config::Config;

#[derive(Clone, Debug)]
pub struct Theme {
    pub day_style: StyleModifier,
    pub focus_day_style: StyleModifier,
    pub focus_day_char: Option<char>,
    pub today_day_style: StyleModifier,
    pub today_day_char: Option<char>,
    pub month_header_style: StyleModifier,
    pub weekday_header_style: StyleModifier,
    pub status_style: StyleModifier,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            day_style: StyleModifier::default(),
            focus_day_style: StyleModifier::default().bg_color(Color::Blue),
            focus_day_char: None,
            today_day_style: StyleModifier::default().invert(true),
            today_day_char: Some('*'),
            month_header_style: StyleModifier::default().fg_color(Color::Yellow),
            weekday_header_style: StyleModifier::default().fg_color(Color::Yellow),
            status_style: StyleModifier::default(),
        }
    }
}

impl Theme {
    pub fn from_config(config: &Config) -> Self {
        Theme {
            today_day_char: config.today_char,
            focus_day_char: config.select_char,
            ..Theme::default()
        }
    }
}

/// All mutable state of the view: the displayed month, the selected day and
/// the cached wall clock.
///
/// The selected day is a bare day number without an attached month. It is
/// stored exactly as given, so a selection can numerically match a day of
/// whatever month is displayed.
pub struct Context {
    displayed: MonthIndex,
    selected_day: Option<i32>,
    now: DateTime<Local>,
    pub theme: Theme,
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}

impl Context {
    pub fn new() -> Self {
        let now = Local::now();
        Context {
            displayed: now.into(),
            selected_day: Some(now.day() as i32),
            now,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(theme: Theme) -> Self {
        let mut context = Context::new();
        context.theme = theme;
        context
    }

    pub fn displayed(&self) -> MonthIndex {
        self.displayed
    }

    pub fn selected_day(&self) -> Option<i32> {
        self.selected_day
    }

    pub fn now(&self) -> &DateTime<Local> {
        &self.now
    }

    pub fn update(&mut self) {
        self.now = Local::now();
    }

    pub fn prev_month(&mut self) {
        self.displayed = self.displayed.prev();
    }

    pub fn next_month(&mut self) {
        self.displayed = self.displayed.next();
    }

    /// Jumps back to the current month. A no-op while the current month is
    /// already displayed (the status line hides the binding in that case).
    pub fn go_to_today(&mut self) {
        self.update();
        if !self.is_current_month_displayed() {
            debug!("returning to {}", MonthIndex::from(self.now));
            self.displayed = self.now.into();
        }
    }

    /// Stores `day` as-is. No range validation is performed.
    pub fn select_day(&mut self, day: i32) {
        self.selected_day = Some(day);
    }

    /// Shifts the selected day number by `delta`, again without validation.
    pub fn move_selection(&mut self, delta: i32) {
        let current = self.selected_day.unwrap_or_else(|| self.now.day() as i32);
        self.selected_day = Some(current + delta);
    }

    pub fn is_current_month_displayed(&self) -> bool {
        self.displayed == self.now.into()
    }

    pub fn is_today(&self, index: MonthIndex, day: u32) -> bool {
        index == self.now.into() && self.now.day() == day
    }
}
