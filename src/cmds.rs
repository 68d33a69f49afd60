use serde::Deserialize;

/// User-facing operations a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cmd {
    PrevMonth,
    NextMonth,
    Today,
    SelectPrevDay,
    SelectNextDay,
    SelectPrevWeek,
    SelectNextWeek,
    Exit,
}
