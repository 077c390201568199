use crate::models::CalendarEvent;
use crate::page::Page;
use crate::services::ApiClient;
use timesync_core::AppError;

/// Events for the visible range, as the calendar widget expects them.
pub async fn load_events(
    api: &ApiClient,
    start: &str,
    end: &str,
) -> Result<Vec<CalendarEvent>, AppError> {
    let feed = api.calendar_events(start, end).await.map_err(|e| {
        tracing::error!(start, end, error = %e, "Failed to load calendar events");
        e
    })?;

    let events = feed.into_events();
    tracing::debug!(start, end, events = events.len(), "Calendar events loaded");
    Ok(events)
}

/// Text shown when an event is clicked.
pub fn event_details(event: &CalendarEvent) -> String {
    match (&event.shift, event.is_working_day()) {
        (Some((start, end)), true) => format!("{}\nTime: {} - {}", event.title, start, end),
        _ => event.title.clone(),
    }
}

pub fn show_event_details(page: &dyn Page, event: &CalendarEvent) {
    page.alert(&event_details(event));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CalendarFeed;

    #[test]
    fn test_working_day_details_include_shift() {
        let feed: CalendarFeed = serde_json::from_value(serde_json::json!({
            "workingDays": [{"date": "2024-03-04", "start_time": "09:00", "end_time": "17:00"}],
            "daysOff": ["2024-03-09"]
        }))
        .unwrap();
        let events = feed.into_events();

        assert_eq!(event_details(&events[0]), "09:00-17:00\nTime: 09:00 - 17:00");
        assert_eq!(event_details(&events[1]), "Off");
    }
}
