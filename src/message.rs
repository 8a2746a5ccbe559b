use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::components::reminder_form::SlotTime;
use crate::core::event::CalendarEvent;

/// Rendering granularity. Orthogonal to the navigation date: switching views
/// never moves the anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Year,
    #[default]
    Month,
    Week,
    Day,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Week => "Week",
            Self::Day => "Day",
        }
    }

    pub const ALL: &'static [View] = &[View::Year, View::Month, View::Week, View::Day];
}

/// Full inbound command set. Every state change flows through exactly one of
/// these; there is no other mutation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// One-shot startup correction from the async clock resolution. Sets
    /// `today` for the lifetime of the component.
    Initialize(NaiveDate),

    // Navigation
    YearForward,
    YearBack,
    MonthForward,
    MonthBack,
    WeekForward,
    WeekBack,
    DayForward,
    DayBack,

    // Selection and granularity
    SelectDate(NaiveDate),
    SetView(View),

    // Event store
    AddEvent(CalendarEvent),
    RemoveEvent(CalendarEvent),

    // Reminder creation
    PickReminderTime(SlotTime),
    CreateReminder(NaiveDate),
}
