use chrono::{Datelike, NaiveDate};

use crate::core::event::{CalendarEvent, EventManager};
use crate::core::grid;
use crate::message::View;
use crate::render::Node;

/// Render the grid for the active granularity. Pure: the same state always
/// produces the same tree.
pub fn calendar_view(
    view: View,
    nav: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    events: &EventManager,
) -> Node {
    match view {
        View::Day => day_view(nav, today, selected, events),
        View::Week => week_view(nav, today, selected, events),
        View::Month => month_view(nav, today, selected, events),
        View::Year => year_view(nav, today, selected, events),
    }
}

fn day_view(
    nav: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    events: &EventManager,
) -> Node {
    let mut column = Node::column().class("day");
    for date in grid::day_grid(nav) {
        column = column.push(date_cell(date, nav, today, selected, events));
    }
    column
}

/// One week-number label cell followed by the seven days, Monday first.
fn week_view(
    nav: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    events: &EventManager,
) -> Node {
    let mut row = Node::row().class("week").push(
        Node::cell()
            .class("week-number")
            .push(Node::label(nav.iso_week().week().to_string())),
    );
    for date in grid::week_grid(nav) {
        row = row.push(date_cell(date, nav, today, selected, events));
    }
    row
}

/// Fixed 6x7 month grid under a month label and the Mo..Su header row.
/// `anchor` decides which cells count as in-month; trailing spill days
/// render inactive rather than being cut off.
fn month_view(
    anchor: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    events: &EventManager,
) -> Node {
    let mut column = Node::column()
        .class("month")
        .push(Node::label(anchor.format("%B %Y").to_string()).class("month-title"))
        .push(weekday_header());

    let cells = grid::month_grid(anchor);
    for week in cells.chunks(7) {
        let mut row = Node::row().class("month-week");
        for date in week {
            row = row.push(date_cell(*date, anchor, today, selected, events));
        }
        column = column.push(row);
    }
    column
}

fn year_view(
    nav: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    events: &EventManager,
) -> Node {
    let mut column = Node::column().class("year");
    for (first, _) in grid::year_grid(nav) {
        column = column.push(month_view(first, today, selected, events));
    }
    column
}

fn weekday_header() -> Node {
    let mut row = Node::row().class("weekdays");
    for name in ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"] {
        row = row.push(Node::label(name));
    }
    row
}

/// A single day cell: classification tag, day-number label, then every
/// event on that date in store order.
fn date_cell(
    date: NaiveDate,
    anchor: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    events: &EventManager,
) -> Node {
    let state = grid::classify(date, selected, today, anchor);
    let mut cell = Node::cell()
        .class(state.class())
        .push(Node::label(date.day().to_string()).class("day-number"));
    for event in events.events_on(date) {
        cell = cell.push(event_summary(event));
    }
    cell
}

fn event_summary(event: &CalendarEvent) -> Node {
    match event {
        CalendarEvent::Event { range, tag, .. } => Node::event_summary(format!(
            "{} – {} {}",
            range.start.format("%H:%M"),
            range.end.format("%H:%M"),
            tag.brief
        ))
        .class("event"),
        CalendarEvent::Reminder { instant, tag, .. } => {
            Node::event_summary(format!("{} {}", instant.format("%H:%M"), tag.brief))
                .class("reminder")
        }
    }
}
