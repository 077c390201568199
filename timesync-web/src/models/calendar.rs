use serde::{Deserialize, Serialize};

pub const WORKING_DAY_COLOR: &str = "#3788d8";
pub const HOLIDAY_COLOR: &str = "#2ecc71";
pub const ABSENCE_COLOR: &str = "#e74c3c";
pub const DAY_OFF_COLOR: &str = "#f39c12";

pub const WORKING_DAY_CLASS: &str = "working-day";

/// Payload of `GET /api/events/?start=&end=`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarFeed {
    pub working_days: Vec<WorkingDay>,
    pub holidays: Vec<DatedEntry>,
    pub absences: Vec<DatedEntry>,
    pub days_off: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkingDay {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// A holiday or absence day. Older payloads use `start_date`/`end_date`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatedEntry {
    #[serde(alias = "start_date")]
    pub date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub days: Option<u32>,
}

/// Event object handed to the calendar widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub all_day: bool,
    pub background_color: &'static str,
    pub border_color: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub class_names: Vec<&'static str>,
    /// Shift start and end for working days.
    #[serde(skip)]
    pub shift: Option<(String, String)>,
}

impl CalendarEvent {
    fn colored(title: String, start: String, color: &'static str) -> Self {
        Self {
            title,
            start,
            end: None,
            all_day: false,
            background_color: color,
            border_color: color,
            class_names: Vec::new(),
            shift: None,
        }
    }

    pub fn is_working_day(&self) -> bool {
        self.class_names.contains(&WORKING_DAY_CLASS)
    }
}

impl CalendarFeed {
    /// Working days first, then holidays, absences and days off.
    pub fn into_events(self) -> Vec<CalendarEvent> {
        let mut events = Vec::with_capacity(
            self.working_days.len() + self.holidays.len() + self.absences.len() + self.days_off.len(),
        );

        for day in self.working_days {
            let mut event = CalendarEvent::colored(
                format!("{}-{}", day.start_time, day.end_time),
                day.date,
                WORKING_DAY_COLOR,
            );
            event.all_day = true;
            event.class_names.push(WORKING_DAY_CLASS);
            event.shift = Some((day.start_time, day.end_time));
            events.push(event);
        }

        for holiday in self.holidays {
            events.push(CalendarEvent::colored(
                holiday.title,
                holiday.date,
                HOLIDAY_COLOR,
            ));
        }

        for absence in self.absences {
            let mut event = CalendarEvent::colored(absence.title, absence.date, ABSENCE_COLOR);
            event.end = absence.end_date;
            events.push(event);
        }

        for date in self.days_off {
            let mut event = CalendarEvent::colored("Off".to_string(), date, DAY_OFF_COLOR);
            event.all_day = true;
            events.push(event);
        }

        events
    }
}
