//! Pure date-grid computation for a single displayed month.
//!
//! Everything in here is side-effect free; the UI recomputes the grid from
//! [`month_grid`] on every draw.

use chrono::prelude::*;
use num_traits::FromPrimitive;
use std::fmt;

/// Weekday columns of the grid, Sunday first.
pub const COLUMNS: usize = 7;
/// A month never spans more than 6 week rows.
pub const MAX_ROWS: usize = 6;

pub fn days_of_month(month: &Month, year: i32) -> u32 {
    if month.number_from_month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month.number_from_month() + 1, 1)
    }
    .unwrap()
    .signed_duration_since(NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).unwrap())
    .num_days() as u32
}

/// Sunday-based weekday index (0=Sun..6=Sat) of the 1st of `month`.
pub fn first_weekday(month: &Month, year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
        .unwrap()
        .weekday()
        .num_days_from_sunday()
}

/// One slot of the month grid: either leading/trailing padding or a day
/// number with its selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Empty,
    Day { num: u32, selected: bool },
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        matches!(self, GridCell::Empty)
    }

    pub fn num(&self) -> Option<u32> {
        match self {
            GridCell::Day { num, .. } => Some(*num),
            GridCell::Empty => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, GridCell::Day { selected: true, .. })
    }
}

/// Lays out `month` as week rows of [`GridCell`]s.
///
/// The first row is padded up to the weekday of the 1st; the row containing
/// the last day is emitted in full and no rows follow it. `selected` is a
/// bare day number and may match nothing at all.
pub fn month_grid(month: &Month, year: i32, selected: Option<i32>) -> Vec<[GridCell; COLUMNS]> {
    let num_days = days_of_month(month, year);
    let offset = first_weekday(month, year) as usize;

    let mut rows = Vec::with_capacity(MAX_ROWS);
    let mut day = 1u32;

    for row in 0..MAX_ROWS {
        let mut cells = [GridCell::Empty; COLUMNS];
        for (col, cell) in cells.iter_mut().enumerate() {
            if (row == 0 && col < offset) || day > num_days {
                continue;
            }
            *cell = GridCell::Day {
                num: day,
                selected: selected == Some(day as i32),
            };
            day += 1;
        }
        rows.push(cells);
        if day > num_days {
            break;
        }
    }

    rows
}

/// A (month, year) pair identifying the month currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthIndex {
    pub month: Month,
    pub year: i32,
}

impl MonthIndex {
    pub fn new(month: Month, year: i32) -> Self {
        MonthIndex { month, year }
    }

    pub fn current() -> Self {
        Local::now().into()
    }

    pub fn next(&self) -> Self {
        let next_month = self.month.succ();

        MonthIndex {
            month: next_month,
            year: if next_month.number_from_month() == 1 {
                self.year + 1
            } else {
                self.year
            },
        }
    }

    pub fn prev(&self) -> Self {
        let prev_month = self.month.pred();

        MonthIndex {
            month: prev_month,
            year: if prev_month.number_from_month() == 12 {
                self.year - 1
            } else {
                self.year
            },
        }
    }
}

impl Default for MonthIndex {
    fn default() -> Self {
        MonthIndex::current()
    }
}

impl<T: Datelike> From<T> for MonthIndex {
    fn from(date: T) -> Self {
        MonthIndex::new(Month::from_u32(date.month()).unwrap(), date.year())
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{} {}", self.month.name(), self.year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_cells(rows: &[[GridCell; COLUMNS]]) -> Vec<u32> {
        rows.iter().flatten().filter_map(GridCell::num).collect()
    }

    #[test]
    fn days_of_month_follows_gregorian_rules() {
        assert_eq!(days_of_month(&Month::February, 2024), 29);
        assert_eq!(days_of_month(&Month::February, 2023), 28);
        assert_eq!(days_of_month(&Month::February, 2000), 29);
        assert_eq!(days_of_month(&Month::February, 1900), 28);
        assert_eq!(days_of_month(&Month::April, 2024), 30);
        assert_eq!(days_of_month(&Month::January, 2024), 31);
        assert_eq!(days_of_month(&Month::December, 2023), 31);
    }

    #[test]
    fn first_weekday_of_reference_dates() {
        // 2024-01-01 was a Monday, 2024-02-01 a Thursday, 2024-09-01 a Sunday.
        assert_eq!(first_weekday(&Month::January, 2024), 1);
        assert_eq!(first_weekday(&Month::February, 2024), 4);
        assert_eq!(first_weekday(&Month::September, 2024), 0);
    }

    #[test]
    fn grid_contains_every_day_exactly_once() {
        for &year in &[1900, 1999, 2000, 2023, 2024] {
            for m in 1..=12u32 {
                let month = Month::from_u32(m).unwrap();
                let rows = month_grid(&month, year, None);
                let days = numbered_cells(&rows);
                let expected: Vec<u32> = (1..=days_of_month(&month, year)).collect();
                assert_eq!(days, expected, "{} {}", month.name(), year);
                assert!(rows.len() <= MAX_ROWS);
            }
        }
    }

    #[test]
    fn leading_padding_matches_first_weekday() {
        for &year in &[1999, 2023, 2024] {
            for m in 1..=12u32 {
                let month = Month::from_u32(m).unwrap();
                let rows = month_grid(&month, year, None);
                let padding = rows[0].iter().take_while(|c| c.is_empty()).count();
                assert_eq!(padding as u32, first_weekday(&month, year));
            }
        }
    }

    #[test]
    fn rows_end_with_the_last_day() {
        for &year in &[2023, 2024] {
            for m in 1..=12u32 {
                let month = Month::from_u32(m).unwrap();
                let rows = month_grid(&month, year, None);
                let last_row = rows.last().unwrap();
                let last_day = last_row.iter().filter_map(GridCell::num).max().unwrap();
                assert_eq!(last_day, days_of_month(&month, year));
            }
        }
    }

    #[test]
    fn february_2024_layout() {
        let rows = month_grid(&Month::February, 2024, None);

        assert_eq!(rows.len(), 5);

        // Day 1 sits in the Thursday column behind four padding cells.
        assert!(rows[0][..4].iter().all(GridCell::is_empty));
        assert_eq!(rows[0][4].num(), Some(1));

        // Last row: 25..29 followed by trailing padding.
        assert_eq!(rows[4][0].num(), Some(25));
        assert_eq!(rows[4][4].num(), Some(29));
        assert!(rows[4][5].is_empty());
        assert!(rows[4][6].is_empty());
    }

    #[test]
    fn selection_marks_the_matching_day_only() {
        let rows = month_grid(&Month::March, 2024, Some(15));
        let selected: Vec<u32> = rows
            .iter()
            .flatten()
            .filter(|c| c.is_selected())
            .filter_map(GridCell::num)
            .collect();
        assert_eq!(selected, vec![15]);
    }

    #[test]
    fn out_of_range_selection_marks_nothing() {
        for &sel in &[Some(0), Some(40), Some(-2), None] {
            let rows = month_grid(&Month::April, 2024, sel);
            assert!(rows.iter().flatten().all(|c| !c.is_selected()));
        }
    }

    #[test]
    fn month_rollover_carries_the_year() {
        let jan = MonthIndex::new(Month::January, 2024);
        assert_eq!(jan.prev(), MonthIndex::new(Month::December, 2023));

        let dec = MonthIndex::new(Month::December, 2024);
        assert_eq!(dec.next(), MonthIndex::new(Month::January, 2025));
    }

    #[test]
    fn prev_and_next_round_trip() {
        for &year in &[1_i32, 1999, 2024] {
            for m in 1..=12u32 {
                let idx = MonthIndex::new(Month::from_u32(m).unwrap(), year);
                assert_eq!(idx.prev().next(), idx);
                assert_eq!(idx.next().prev(), idx);
            }
        }
    }

    #[test]
    fn month_index_display() {
        let idx = MonthIndex::new(Month::March, 2024);
        assert_eq!(idx.to_string(), "March 2024");
    }
}
