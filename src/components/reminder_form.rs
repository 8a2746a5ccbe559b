use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;

use crate::core::event::{CalendarEvent, EventTag};
use crate::render::Node;

/// Granularity of the time-of-day picker.
pub const SLOT_MINUTES: u32 = 30;

/// Tag attached to every reminder created through the form.
pub static REMINDER_TAG: Lazy<EventTag> = Lazy::new(|| EventTag::new("reminder", "Reminder"));

/// One pickable time of day. The picker only ever offers half-hour slots,
/// so `hour`/`minute` are always a valid wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTime {
    pub hour: u32,
    pub minute: u32,
}

impl Default for SlotTime {
    fn default() -> Self {
        Self { hour: 0, minute: 0 }
    }
}

impl SlotTime {
    /// Every slot of the day, 00:00 through 23:30.
    pub fn slots() -> Vec<SlotTime> {
        (0..24)
            .flat_map(|hour| {
                (0..60).step_by(SLOT_MINUTES as usize).map(move |minute| SlotTime { hour, minute })
            })
            .collect()
    }

    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// The UTC instant for this slot on `date`.
    pub fn instant_on(&self, date: NaiveDate) -> DateTime<Utc> {
        date.and_hms_opt(self.hour, self.minute, 0)
            .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
            .and_utc()
    }
}

/// Build the reminder the form submits for `date` at `slot`.
pub fn reminder_on(date: NaiveDate, slot: SlotTime) -> CalendarEvent {
    CalendarEvent::Reminder {
        date,
        instant: slot.instant_on(date),
        tag: REMINDER_TAG.clone(),
    }
}

/// Render the creation form for the selected date. With nothing selected
/// there is no target to attach a reminder to, so no form at all.
pub fn reminder_form(selected: Option<NaiveDate>, picked: SlotTime) -> Option<Node> {
    let date = selected?;

    let mut picker = Node::picker().class("reminder-time");
    for slot in SlotTime::slots() {
        let mut option = Node::picker_option(slot.label());
        if slot == picked {
            option = option.class("picked");
        }
        picker = picker.push(option);
    }

    Some(
        Node::column()
            .class("reminder-form")
            .push(Node::label(date.format("%Y-%m-%d").to_string()).class("target-date"))
            .push(picker)
            .push(Node::button("Create reminder").class("submit")),
    )
}
