use std::fmt::{self, Write};
use std::io;

use unsegen::base::*;
use unsegen::widget::*;

use crate::calendar::{self, GridCell, MonthIndex};

use super::context::{Context, Theme};

pub struct DayCell<'a> {
    day_num: u32,
    selected: bool,
    is_today: bool,
    theme: &'a Theme,
}

impl<'a> DayCell<'a> {
    pub const CELL_HEIGHT: usize = 1;
    pub const CELL_WIDTH: usize = 4;

    fn new(day_num: u32, theme: &'a Theme) -> Self {
        DayCell {
            day_num,
            selected: false,
            is_today: false,
            theme,
        }
    }

    fn select(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn today(mut self, is_today: bool) -> Self {
        self.is_today = is_today;
        self
    }
}

impl fmt::Display for DayCell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arg_today = if self.is_today {
            self.theme.today_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        let arg_focus = if self.selected {
            self.theme.focus_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        write!(f, "{}{}{:>2}", arg_today, arg_focus, self.day_num)
    }
}

/// Renders one month: a navigation label, the weekday header and the day
/// grid with selection and today highlights.
pub struct MonthPane<'a> {
    index: MonthIndex,
    context: &'a Context,
}

impl<'a> MonthPane<'a> {
    const HEADER_ROWS: usize = 2;

    const HEADER: &'static [&'static str] = &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

    pub fn new(index: MonthIndex, context: &'a Context) -> Self {
        MonthPane { index, context }
    }

    /// Writes the pane as plain text, for non-interactive output that must
    /// survive leaving the terminal's alternate screen.
    pub fn write_to<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        let theme = &self.context.theme;
        let width = calendar::COLUMNS * DayCell::CELL_WIDTH;

        writeln!(sink, "{:^width$}", self.index.to_string(), width = width)?;

        for &head in Self::HEADER {
            write!(sink, "{:>width$}", &head, width = DayCell::CELL_WIDTH)?;
        }
        writeln!(sink)?;

        let grid = calendar::month_grid(
            &self.index.month,
            self.index.year,
            self.context.selected_day(),
        );

        for row in &grid {
            for cell in row {
                match *cell {
                    GridCell::Empty => {
                        write!(sink, "{:width$}", "", width = DayCell::CELL_WIDTH)?;
                    }
                    GridCell::Day { num, selected } => {
                        let is_today = self.context.is_today(self.index, num);
                        write!(
                            sink,
                            "{}",
                            DayCell::new(num, theme).select(selected).today(is_today)
                        )?;
                    }
                }
            }
            writeln!(sink)?;
        }

        Ok(())
    }
}

impl Widget for MonthPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(calendar::COLUMNS * DayCell::CELL_WIDTH),
            height: RowDemand::exact(
                Self::HEADER_ROWS + calendar::MAX_ROWS * DayCell::CELL_HEIGHT,
            ),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = &self.context.theme;
        let width = calendar::COLUMNS * DayCell::CELL_WIDTH;

        let mut cursor = Cursor::new(&mut window);

        cursor.set_style_modifier(theme.month_header_style);
        writeln!(
            &mut cursor,
            "{:^width$}",
            format!("< {} >", self.index),
            width = width
        )
        .unwrap();

        cursor.set_style_modifier(theme.weekday_header_style);
        for &head in Self::HEADER {
            write!(
                &mut cursor,
                "{:>width$}",
                &head,
                width = DayCell::CELL_WIDTH
            )
            .unwrap();
        }
        writeln!(&mut cursor).unwrap();

        let grid = calendar::month_grid(
            &self.index.month,
            self.index.year,
            self.context.selected_day(),
        );

        for row in &grid {
            for cell in row {
                match *cell {
                    GridCell::Empty => {
                        cursor.set_style_modifier(theme.day_style);
                        write!(&mut cursor, "{:width$}", "", width = DayCell::CELL_WIDTH)
                            .unwrap();
                    }
                    GridCell::Day { num, selected } => {
                        let is_today = self.context.is_today(self.index, num);
                        cursor.set_style_modifier(if selected {
                            theme.focus_day_style
                        } else if is_today {
                            theme.today_day_style
                        } else {
                            theme.day_style
                        });
                        write!(
                            &mut cursor,
                            "{}",
                            DayCell::new(num, theme).select(selected).today(is_today)
                        )
                        .unwrap();
                    }
                }
            }
            writeln!(&mut cursor).unwrap();
        }
    }
}
