use chrono::{Datelike, NaiveDate};

/// Visual state of a rendered day cell, exposed to the host as a CSS-class
/// style tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Selected,
    Current,
    Active,
    Inactive,
}

impl DayState {
    pub fn class(self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Current => "current",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Classify a cell date against the selection, today, and the month the grid
/// is anchored on. First matching rule wins: selected beats current beats
/// active/inactive.
pub fn classify(
    date: NaiveDate,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    anchor: NaiveDate,
) -> DayState {
    if selected == Some(date) {
        DayState::Selected
    } else if date == today {
        DayState::Current
    } else if date.month() == anchor.month() && date.year() == anchor.year() {
        DayState::Active
    } else {
        DayState::Inactive
    }
}

/// The Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// First day of `date`'s month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // The 1st always exists for a valid year/month pair.
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Day view is the single navigated day.
pub fn day_grid(nav: NaiveDate) -> Vec<NaiveDate> {
    vec![nav]
}

/// The seven days of `nav`'s week, Monday through Sunday.
pub fn week_grid(nav: NaiveDate) -> Vec<NaiveDate> {
    let monday = week_start(nav);
    (0..7)
        .map(|offset| monday + chrono::Duration::days(offset))
        .collect()
}

/// A fixed 6x7 grid (42 cells) starting from the Monday on or before the
/// first of `nav`'s month. Always six rows, so short months spill into the
/// following month; those cells render inactive.
pub fn month_grid(nav: NaiveDate) -> Vec<NaiveDate> {
    let grid_start = week_start(month_start(nav));
    (0..42)
        .map(|offset| grid_start + chrono::Duration::days(offset))
        .collect()
}

/// The twelve months of `nav`'s year, January through December, each paired
/// with its own month grid.
pub fn year_grid(nav: NaiveDate) -> Vec<(NaiveDate, Vec<NaiveDate>)> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(nav.year(), month, 1))
        .map(|first| (first, month_grid(first)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_grid_is_the_navigated_day() {
        assert_eq!(day_grid(day(2024, 3, 10)), vec![day(2024, 3, 10)]);
    }

    #[test]
    fn week_grid_runs_monday_through_sunday() {
        // 2024-03-10 is a Sunday; its week starts Monday 2024-03-04.
        let cells = week_grid(day(2024, 3, 10));
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[0], day(2024, 3, 4));
        assert_eq!(cells[6], day(2024, 3, 10));
        let weekdays: Vec<u32> = cells.iter().map(|d| d.weekday().number_from_monday()).collect();
        assert_eq!(weekdays, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn week_grid_of_a_monday_starts_on_itself() {
        let cells = week_grid(day(2024, 3, 4));
        assert_eq!(cells[0], day(2024, 3, 4));
    }

    #[test]
    fn month_grid_has_42_strictly_increasing_cells() {
        for nav in [day(2024, 2, 29), day(2024, 3, 10), day(2023, 12, 31), day(2021, 2, 14)] {
            let cells = month_grid(nav);
            assert_eq!(cells.len(), 42);
            for pair in cells.windows(2) {
                assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
            }
            assert_eq!(cells[0].weekday(), Weekday::Mon);
        }
    }

    #[test]
    fn month_grid_starts_on_monday_before_the_first() {
        // March 2024 starts on a Friday; the grid opens on Monday Feb 26.
        let cells = month_grid(day(2024, 3, 10));
        assert_eq!(cells[0], day(2024, 2, 26));
        // Cell 22 sits well inside the anchored month for any month length.
        assert_eq!(cells[21].month(), 3);
    }

    #[test]
    fn month_grid_keeps_six_rows_for_a_four_row_month() {
        // February 2021: 28 days starting on a Monday, the one month that
        // fits in exactly four rows. The grid is still 42 cells.
        let cells = month_grid(day(2021, 2, 14));
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[0], day(2021, 2, 1));
        assert_eq!(cells[28], day(2021, 3, 1));
    }

    #[test]
    fn year_grid_is_january_through_december_month_grids() {
        let nav = day(2024, 7, 19);
        let months = year_grid(nav);
        assert_eq!(months.len(), 12);
        for (i, (first, cells)) in months.iter().enumerate() {
            assert_eq!(*first, day(2024, i as u32 + 1, 1));
            assert_eq!(*cells, month_grid(*first));
        }
    }

    #[test]
    fn classify_precedence_selected_beats_current() {
        let today = day(2024, 3, 15);
        let anchor = day(2024, 3, 1);
        assert_eq!(classify(today, Some(today), today, anchor), DayState::Selected);
        assert_eq!(classify(today, None, today, anchor), DayState::Current);
        assert_eq!(classify(day(2024, 3, 14), None, today, anchor), DayState::Active);
        assert_eq!(classify(day(2024, 4, 1), None, today, anchor), DayState::Inactive);
    }

    #[test]
    fn classify_matches_month_and_year_not_month_alone() {
        // Same month number in a different year is not active.
        let anchor = day(2024, 3, 1);
        assert_eq!(
            classify(day(2023, 3, 15), None, day(2024, 3, 1), anchor),
            DayState::Inactive
        );
    }
}
