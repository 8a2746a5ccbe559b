use chrono::{Months, NaiveDate};

use crate::components::calendar_view::calendar_view;
use crate::components::reminder_form::{reminder_form, reminder_on, SlotTime};
use crate::config::CalendarConfig;
use crate::core::event::EventManager;
use crate::message::{Message, View};
use crate::render::Node;

/// Navigation and selection state. `today` is written once, by
/// `Message::Initialize`; until then both dates hold the epoch placeholder,
/// which is visible by design while the startup clock resolution is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub navigation_date: NaiveDate,
    pub today: NaiveDate,
    pub selected: Option<NaiveDate>,
    pub granularity: View,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            navigation_date: NaiveDate::default(),
            today: NaiveDate::default(),
            selected: None,
            granularity: View::Month,
        }
    }
}

/// Root component. Owns all state; every mutation flows through `update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    pub state: NavigationState,
    pub events: EventManager,
    /// Transient time-picker choice for the reminder form.
    pub reminder_slot: SlotTime,
}

impl Calendar {
    pub fn new(config: &CalendarConfig) -> Self {
        Self {
            state: NavigationState {
                granularity: config.initial_view,
                ..NavigationState::default()
            },
            ..Self::default()
        }
    }

    /// Process one command to completion. Transitions are synchronous and
    /// terminal; nothing here dispatches further messages.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Initialize(date) => {
                log::info!("Initialized calendar on {}", date);
                self.state.today = date;
                self.state.navigation_date = date;
                self.state.selected = None;
            }

            Message::YearForward => self.shift_months(12),
            Message::YearBack => self.shift_months(-12),
            Message::MonthForward => self.shift_months(1),
            Message::MonthBack => self.shift_months(-1),
            Message::WeekForward => self.shift_days(7),
            Message::WeekBack => self.shift_days(-7),
            Message::DayForward => self.shift_days(1),
            Message::DayBack => self.shift_days(-1),

            // Selection sticks across navigation and view changes until the
            // user picks another date.
            Message::SelectDate(date) => {
                self.state.selected = Some(date);
            }

            Message::SetView(view) => {
                log::debug!("Switched to {} view", view.title());
                self.state.granularity = view;
            }

            Message::AddEvent(event) => {
                self.events.add(event);
            }

            Message::RemoveEvent(event) => {
                self.events.remove(&event);
            }

            Message::PickReminderTime(slot) => {
                self.reminder_slot = slot;
            }

            Message::CreateReminder(date) => {
                let reminder = reminder_on(date, self.reminder_slot);
                log::debug!("Created reminder on {} at {}", date, self.reminder_slot.label());
                self.events.add(reminder);
            }
        }
    }

    /// Build the outbound render tree for the current state.
    pub fn view(&self) -> Node {
        let mut root = Node::column().class("calendar").push(calendar_view(
            self.state.granularity,
            self.state.navigation_date,
            self.state.today,
            self.state.selected,
            &self.events,
        ));
        if let Some(form) = reminder_form(self.state.selected, self.reminder_slot) {
            root = root.push(form);
        }
        root
    }

    /// Month and year steps clamp to the last valid day of the target month
    /// (Jan 31 forward lands on Feb 28/29, never March).
    fn shift_months(&mut self, delta: i32) {
        let nav = self.state.navigation_date;
        self.state.navigation_date = if delta >= 0 {
            nav.checked_add_months(Months::new(delta as u32)).unwrap_or(nav)
        } else {
            nav.checked_sub_months(Months::new(delta.unsigned_abs())).unwrap_or(nav)
        };
    }

    fn shift_days(&mut self, days: i64) {
        self.state.navigation_date += chrono::Duration::days(days);
    }
}

/// The single async boundary: resolve the wall clock once at startup. The
/// host spawns this and feeds the resulting message back into `update`.
pub async fn resolve_today() -> Message {
    Message::Initialize(chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::reminder_form::REMINDER_TAG;
    use crate::core::event::{CalendarEvent, EventTag};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar_on(date: NaiveDate) -> Calendar {
        let mut cal = Calendar::default();
        cal.update(Message::Initialize(date));
        cal
    }

    #[test]
    fn starts_on_epoch_placeholder_until_initialized() {
        let cal = Calendar::default();
        assert_eq!(cal.state.navigation_date, day(1970, 1, 1));
        assert_eq!(cal.state.today, day(1970, 1, 1));

        let cal = calendar_on(day(2024, 3, 10));
        assert_eq!(cal.state.navigation_date, day(2024, 3, 10));
        assert_eq!(cal.state.today, day(2024, 3, 10));
        assert_eq!(cal.state.selected, None);
    }

    #[test]
    fn month_forward_then_back_round_trips() {
        let mut cal = calendar_on(day(2024, 3, 10));
        cal.update(Message::MonthForward);
        assert_eq!(cal.state.navigation_date, day(2024, 4, 10));
        cal.update(Message::MonthBack);
        assert_eq!(cal.state.navigation_date, day(2024, 3, 10));
    }

    #[test]
    fn month_step_clamps_to_month_end() {
        let mut cal = calendar_on(day(2024, 1, 31));
        cal.update(Message::MonthForward);
        assert_eq!(cal.state.navigation_date, day(2024, 2, 29));
    }

    #[test]
    fn year_step_clamps_leap_day() {
        let mut cal = calendar_on(day(2024, 2, 29));
        cal.update(Message::YearForward);
        assert_eq!(cal.state.navigation_date, day(2025, 2, 28));
        cal.update(Message::YearBack);
        assert_eq!(cal.state.navigation_date, day(2024, 2, 28));
    }

    #[test]
    fn week_and_day_steps_move_by_whole_days() {
        let mut cal = calendar_on(day(2024, 3, 10));
        cal.update(Message::WeekForward);
        assert_eq!(cal.state.navigation_date, day(2024, 3, 17));
        cal.update(Message::DayBack);
        assert_eq!(cal.state.navigation_date, day(2024, 3, 16));
        cal.update(Message::WeekBack);
        assert_eq!(cal.state.navigation_date, day(2024, 3, 9));
    }

    #[test]
    fn selection_survives_view_change_and_navigation() {
        let mut cal = calendar_on(day(2024, 3, 10));
        cal.update(Message::SelectDate(day(2024, 3, 20)));
        cal.update(Message::SetView(View::Week));
        assert_eq!(cal.state.selected, Some(day(2024, 3, 20)));
        cal.update(Message::MonthForward);
        assert_eq!(cal.state.selected, Some(day(2024, 3, 20)));
    }

    #[test]
    fn today_is_not_touched_by_navigation() {
        let mut cal = calendar_on(day(2024, 3, 10));
        cal.update(Message::YearForward);
        cal.update(Message::DayForward);
        assert_eq!(cal.state.today, day(2024, 3, 10));
    }

    #[test]
    fn add_and_remove_flow_through_the_store() {
        let mut cal = calendar_on(day(2024, 3, 10));
        let event = CalendarEvent::Reminder {
            date: day(2024, 3, 15),
            instant: day(2024, 3, 15).and_hms_opt(14, 30, 0).unwrap().and_utc(),
            tag: EventTag::new("a", "Standup"),
        };
        cal.update(Message::AddEvent(event.clone()));
        cal.update(Message::AddEvent(event.clone()));
        assert_eq!(cal.events.len(), 2);

        cal.update(Message::RemoveEvent(event.clone()));
        assert!(cal.events.events_on(day(2024, 3, 15)).is_empty());
    }

    #[test]
    fn create_reminder_uses_the_picked_slot() {
        let mut cal = calendar_on(day(2024, 3, 10));
        cal.update(Message::SelectDate(day(2024, 3, 15)));
        cal.update(Message::PickReminderTime(SlotTime { hour: 14, minute: 30 }));
        cal.update(Message::CreateReminder(day(2024, 3, 15)));

        let hits = cal.events.events_on(day(2024, 3, 15));
        assert_eq!(hits.len(), 1);
        match hits[0] {
            CalendarEvent::Reminder { instant, tag, .. } => {
                assert_eq!(*instant, day(2024, 3, 15).and_hms_opt(14, 30, 0).unwrap().and_utc());
                assert_eq!(*tag, *REMINDER_TAG);
            }
            other => panic!("expected a reminder, got {other:?}"),
        }
    }

    #[test]
    fn view_without_selection_has_no_reminder_form() {
        let mut cal = calendar_on(day(2024, 3, 10));
        assert!(cal.view().find_class("reminder-form").is_none());

        cal.update(Message::SelectDate(day(2024, 3, 15)));
        assert!(cal.view().find_class("reminder-form").is_some());
    }

    #[test]
    fn view_is_idempotent() {
        let mut cal = calendar_on(day(2024, 3, 10));
        cal.update(Message::SelectDate(day(2024, 3, 10)));
        cal.update(Message::CreateReminder(day(2024, 3, 10)));
        assert_eq!(cal.view(), cal.view());
    }

    #[test]
    fn new_honors_configured_initial_view() {
        let config = CalendarConfig {
            initial_view: View::Year,
            debug_logging: false,
        };
        let cal = Calendar::new(&config);
        assert_eq!(cal.state.granularity, View::Year);
    }
}
