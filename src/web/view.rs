//! Presentation models for the form page.
//!
//! Templates only read fields from these structs; all geometry and wording is
//! prepared here so it can be unit tested.

use crate::domain::calendar::WeekdayDistribution;
use crate::domain::entities::{BirthdayReport, MoonPhase, NotablePerson};

pub const CHART_TITLE: &str = "Number of birthdays by day of week";
pub const CHART_Y_LABEL: &str = "Frequency";

const CHART_WIDTH: u32 = 480;
const CHART_HEIGHT: u32 = 320;
const MARGIN_LEFT: u32 = 56;
const MARGIN_RIGHT: u32 = 16;
const MARGIN_TOP: u32 = 40;
const MARGIN_BOTTOM: u32 = 72;

/// One bar of the weekday chart, in SVG user units.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub count: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Horizontal centre of the bar, where the rotated label is anchored.
    pub center: u32,
}

/// Y-axis tick at an integer frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: u32,
    pub y: u32,
}

/// Server-rendered SVG bar chart of a weekday distribution.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: &'static str,
    pub y_label: &'static str,
    pub width: u32,
    pub height: u32,
    pub plot_left: u32,
    pub plot_right: u32,
    pub plot_top: u32,
    pub plot_bottom: u32,
    /// Baseline for the weekday labels.
    pub label_y: u32,
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
}

impl BarChart {
    /// Lays out one bar per weekday present in `distribution`.
    ///
    /// Returns `None` for an empty distribution, in which case no chart is
    /// drawn. Ticks run over every integer from 0 to the largest count.
    pub fn from_distribution(distribution: &WeekdayDistribution) -> Option<Self> {
        if distribution.is_empty() {
            return None;
        }

        let plot_width = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let plot_bottom = MARGIN_TOP + plot_height;
        let max = distribution.max_count().max(1);

        let scale = |value: u32| -> u32 {
            let scaled = f64::from(value) * f64::from(plot_height) / f64::from(max);
            scaled.round() as u32
        };

        let counts = distribution.counts();
        let slot = plot_width / counts.len() as u32;
        let bar_width = slot * 3 / 5;

        let bars = counts
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let slot_left = MARGIN_LEFT + slot * i as u32;
                let height = scale(entry.count);
                Bar {
                    label: entry.weekday.clone(),
                    count: entry.count,
                    x: slot_left + (slot - bar_width) / 2,
                    y: plot_bottom - height,
                    width: bar_width,
                    height,
                    center: slot_left + slot / 2,
                }
            })
            .collect();

        let ticks = (0..=distribution.max_count())
            .map(|value| Tick {
                value,
                y: plot_bottom - scale(value),
            })
            .collect();

        Some(Self {
            title: CHART_TITLE,
            y_label: CHART_Y_LABEL,
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            plot_left: MARGIN_LEFT,
            plot_right: MARGIN_LEFT + plot_width,
            plot_top: MARGIN_TOP,
            plot_bottom,
            label_y: plot_bottom + 14,
            bars,
            ticks,
        })
    }

    /// Vertical centre of the plot area, where the y-axis label sits.
    pub fn plot_middle(&self) -> u32 {
        (self.plot_top + self.plot_bottom) / 2
    }

    /// Horizontal centre of the whole chart, where the title sits.
    pub fn center(&self) -> u32 {
        self.width / 2
    }
}

/// Everything the page shows for a submitted birthdate.
#[derive(Debug, Clone)]
pub struct FactsView {
    pub birthdate: String,
    pub is_birthday: bool,
    pub age: i32,
    pub weekday_born: String,
    pub zodiac: String,
    /// Number of past birthdays behind the chart.
    pub total_birthdays: u32,
    pub chart: Option<BarChart>,
    pub moon_phase: Option<MoonPhase>,
    pub moon_phase_unavailable: Option<String>,
    pub notable_people: Vec<NotablePerson>,
    pub notable_people_source: Option<String>,
    pub notable_people_unavailable: Option<String>,
}

impl From<BirthdayReport> for FactsView {
    fn from(report: BirthdayReport) -> Self {
        let chart = BarChart::from_distribution(&report.weekdays);

        let moon_phase_unavailable = report.moon_phase.reason().map(str::to_string);
        let moon_phase = report.moon_phase.value().cloned();

        let notable_people_unavailable = report.notable_people.reason().map(str::to_string);
        let (notable_people, notable_people_source) = match report.notable_people.value() {
            Some(found) => (found.people.clone(), Some(found.source_url.clone())),
            None => (Vec::new(), None),
        };

        Self {
            birthdate: report.birthdate.format("%B %-d, %Y").to_string(),
            is_birthday: report.is_birthday,
            age: report.age,
            weekday_born: report.weekday_born,
            zodiac: report.zodiac.to_string(),
            total_birthdays: report.weekdays.total(),
            chart,
            moon_phase,
            moon_phase_unavailable,
            notable_people,
            notable_people_source,
            notable_people_unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::{LeapDayPolicy, WeekdayNames, count_birthdays_by_weekday};
    use crate::domain::entities::{Fact, NotablePeople, ZodiacSign};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn distribution(today: NaiveDate, birthday: NaiveDate) -> WeekdayDistribution {
        count_birthdays_by_weekday(
            today,
            birthday,
            &WeekdayNames::default(),
            LeapDayPolicy::Skip,
        )
        .unwrap()
    }

    #[test]
    fn test_no_chart_for_empty_distribution() {
        let dist = distribution(d(2024, 6, 1), d(2024, 1, 1));
        assert!(dist.is_empty());
        assert!(BarChart::from_distribution(&dist).is_none());
    }

    #[test]
    fn test_chart_bars_follow_distribution_order() {
        let dist = distribution(d(2005, 6, 15), d(2000, 1, 1));
        let chart = BarChart::from_distribution(&dist).unwrap();

        let labels: Vec<_> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Monday", "Tuesday", "Wednesday", "Thursday", "Saturday"]
        );
        assert_eq!(chart.title, "Number of birthdays by day of week");
        assert_eq!(chart.y_label, "Frequency");
    }

    #[test]
    fn test_ticks_cover_zero_to_max() {
        let dist = distribution(d(2024, 6, 1), d(1950, 7, 4));
        let chart = BarChart::from_distribution(&dist).unwrap();

        let values: Vec<u32> = chart.ticks.iter().map(|t| t.value).collect();
        let expected: Vec<u32> = (0..=dist.max_count()).collect();
        assert_eq!(values, expected);

        assert_eq!(chart.ticks[0].y, chart.plot_bottom);
        assert_eq!(chart.ticks.last().unwrap().y, chart.plot_top);
    }

    #[test]
    fn test_tallest_bar_fills_plot() {
        let dist = distribution(d(2024, 6, 1), d(1950, 7, 4));
        let chart = BarChart::from_distribution(&dist).unwrap();

        let tallest = chart.bars.iter().max_by_key(|b| b.count).unwrap();
        assert_eq!(tallest.y, chart.plot_top);
        assert_eq!(tallest.y + tallest.height, chart.plot_bottom);

        for bar in &chart.bars {
            assert!(bar.x >= chart.plot_left);
            assert!(bar.x + bar.width <= chart.plot_right);
        }
    }

    #[test]
    fn test_facts_view_from_report() {
        let report = BirthdayReport {
            today: d(2005, 6, 15),
            birthdate: d(2000, 1, 1),
            is_birthday: false,
            weekdays: distribution(d(2005, 6, 15), d(2000, 1, 1)),
            age: 5,
            weekday_born: "Saturday".to_string(),
            zodiac: ZodiacSign::Unknown,
            moon_phase: Fact::unavailable("request timed out"),
            notable_people: Fact::available(NotablePeople {
                people: vec![NotablePerson {
                    rank: 1,
                    name: "Someone".to_string(),
                    age: Some(24),
                    occupation: "Singer".to_string(),
                }],
                source_url: "https://example.test/january1.html".to_string(),
            }),
        };

        let view = FactsView::from(report);

        assert_eq!(view.birthdate, "January 1, 2000");
        assert_eq!(view.zodiac, "unknown");
        assert_eq!(view.total_birthdays, 5);
        assert!(view.chart.is_some());
        assert!(view.moon_phase.is_none());
        assert_eq!(
            view.moon_phase_unavailable.as_deref(),
            Some("request timed out")
        );
        assert_eq!(view.notable_people.len(), 1);
        assert!(view.notable_people_unavailable.is_none());
        assert_eq!(
            view.notable_people_source.as_deref(),
            Some("https://example.test/january1.html")
        );
    }
}
