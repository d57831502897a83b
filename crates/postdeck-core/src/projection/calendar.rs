//! Calendar projection - buckets posts into a month grid.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::Post;
use crate::error::DomainError;

/// One day slot in the month grid.
///
/// Placeholder cells before day 1 and after the last day carry no date and
/// no posts.
#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub day: Option<u32>,
    pub date: Option<String>,
    pub posts: Vec<Post>,
}

impl DayCell {
    fn placeholder() -> Self {
        Self {
            day: None,
            date: None,
            posts: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.day.is_none()
    }
}

/// A month of posts, laid out as Monday-first week rows of 7 cells each.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Vec<DayCell>>,
    /// Posts excluded because their date string failed to parse.
    pub skipped: usize,
}

/// Project the post collection onto a month grid.
///
/// Dates are matched by string equality on the ISO `YYYY-MM-DD` form, no
/// timezone conversion. Posts within a cell keep the input (store) order.
/// Unscheduled posts simply do not appear; posts with malformed date
/// strings are excluded and counted in [`MonthGrid::skipped`].
pub fn project_month(posts: &[Post], year: i32, month: u32) -> Result<MonthGrid, DomainError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        DomainError::Validation(format!("invalid calendar month: {year}-{month}"))
    })?;

    let days_in_month = days_in_month(year, month);
    // Monday-first offset of day 1 within its week row.
    let lead = first.weekday().num_days_from_monday() as usize;

    let skipped = posts.iter().filter(|p| p.has_malformed_date()).count();

    let mut cells: Vec<DayCell> = Vec::with_capacity(42);
    cells.resize_with(lead, DayCell::placeholder);

    for day in 1..=days_in_month {
        let date = format!("{year:04}-{month:02}-{day:02}");
        let day_posts = posts
            .iter()
            .filter(|p| !p.has_malformed_date() && p.publish_date.as_deref() == Some(date.as_str()))
            .cloned()
            .collect();
        cells.push(DayCell {
            day: Some(day),
            date: Some(date),
            posts: day_posts,
        });
    }

    while cells.len() % 7 != 0 {
        cells.push(DayCell::placeholder());
    }

    let weeks = cells
        .chunks(7)
        .map(|week| week.to_vec())
        .collect::<Vec<_>>();

    Ok(MonthGrid {
        year,
        month,
        weeks,
        skipped,
    })
}

/// Number of days in a month, leap years included.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_y, next_m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // Both dates exist whenever (year, month, 1) does.
    NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_on(title: &str, date: Option<&str>) -> Post {
        Post::new(
            "instagram".into(),
            title.into(),
            String::new(),
            date.map(String::from),
            None,
            String::new(),
            None,
        )
    }

    fn flat_cells(grid: &MonthGrid) -> Vec<&DayCell> {
        grid.weeks.iter().flatten().collect()
    }

    #[test]
    fn empty_month_still_renders_a_full_grid() {
        let grid = project_month(&[], 2024, 3).unwrap();
        let cells = flat_cells(&grid);
        assert_eq!(cells.len() % 7, 0);
        let dated = cells.iter().filter(|c| !c.is_placeholder()).count();
        assert_eq!(dated, 31);
        assert_eq!(grid.skipped, 0);
    }

    #[test]
    fn march_2024_starts_on_friday() {
        // 2024-03-01 is a Friday: four placeholders before it, Monday-first.
        let grid = project_month(&[], 2024, 3).unwrap();
        let first_week = &grid.weeks[0];
        assert!(first_week[..4].iter().all(|c| c.is_placeholder()));
        assert_eq!(first_week[4].day, Some(1));
    }

    #[test]
    fn leap_february_has_29_days() {
        let grid = project_month(&[], 2024, 2).unwrap();
        let dated = flat_cells(&grid)
            .iter()
            .filter(|c| !c.is_placeholder())
            .count();
        assert_eq!(dated, 29);

        let grid = project_month(&[], 2023, 2).unwrap();
        let dated = flat_cells(&grid)
            .iter()
            .filter(|c| !c.is_placeholder())
            .count();
        assert_eq!(dated, 28);
    }

    #[test]
    fn december_wraps_the_year_boundary() {
        let grid = project_month(&[], 2024, 12).unwrap();
        let dated = flat_cells(&grid)
            .iter()
            .filter(|c| !c.is_placeholder())
            .count();
        assert_eq!(dated, 31);
    }

    #[test]
    fn posts_land_in_their_date_cell_preserving_order() {
        let posts = vec![
            post_on("first", Some("2024-03-15")),
            post_on("elsewhere", Some("2024-03-02")),
            post_on("second", Some("2024-03-15")),
        ];
        let grid = project_month(&posts, 2024, 3).unwrap();
        let cell = flat_cells(&grid)
            .into_iter()
            .find(|c| c.day == Some(15))
            .unwrap();
        let titles: Vec<&str> = cell.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[test]
    fn malformed_dates_are_skipped_and_counted() {
        let posts = vec![
            post_on("good", Some("2024-03-10")),
            post_on("bad", Some("not-a-date")),
            post_on("unscheduled", None),
            post_on("empty", Some("")),
        ];
        let grid = project_month(&posts, 2024, 3).unwrap();
        assert_eq!(grid.skipped, 1);
        let placed: usize = flat_cells(&grid).iter().map(|c| c.posts.len()).sum();
        assert_eq!(placed, 1);
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert!(matches!(
            project_month(&[], 2024, 0),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            project_month(&[], 2024, 13),
            Err(DomainError::Validation(_))
        ));
    }
}
