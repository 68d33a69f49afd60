use std::fmt::Write;

use unsegen::base::*;
use unsegen::widget::*;

use super::context::Context;

/// Bottom bar showing the active key hints. The hint for jumping back to the
/// current month only appears while another month is displayed; a pending
/// day-number entry replaces the hints entirely.
pub struct StatusLine<'a> {
    context: &'a Context,
    pending: &'a str,
}

impl<'a> StatusLine<'a> {
    pub fn new(context: &'a Context, pending: &'a str) -> Self {
        StatusLine { context, pending }
    }

    fn line(&self) -> String {
        if !self.pending.is_empty() {
            return format!(" select day: {}", self.pending);
        }

        let mut line = String::from(" h/l: month  arrows: day  q: quit");
        if !self.context.is_current_month_displayed() {
            line.push_str("  t: today");
        }
        line
    }
}

impl Widget for StatusLine<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(1),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let mut cursor = Cursor::new(&mut window);
        cursor.set_style_modifier(self.context.theme.status_style);

        write!(&mut cursor, "{}", self.line()).unwrap();
    }
}
