// Reminder engine - decides which tracked medications are due on each poll
// tick and makes sure none of them fires twice for the same minute.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::core::model::{DosingCondition, TrackedMedication};
use crate::core::reminder::ReminderTime;

/// Notification fired when a tracked medication's reminder time comes up.
#[derive(Debug, Clone, Serialize)]
pub struct ReminderEvent {
    pub product_name: String,
    pub time: ReminderTime,
    pub condition: DosingCondition,
    pub message: String,
}

/// Evaluates reminder times against the wall clock.
///
/// Comparing formatted clock strings for exact equality misses a minute
/// whenever a poll lands after the boundary and double-fires when two polls
/// land inside the same minute. The engine works on minutes-of-day instead:
/// a reminder is due when `now` is at or past its target by no more than the
/// tolerance window, and each (product, day, target minute) fires at most
/// once.
pub struct ReminderEngine {
    /// How far past the target minute a poll may land and still fire.
    tolerance: Duration,
    /// Last fired (date, target minute) per product.
    fired: HashMap<String, (NaiveDate, u32)>,
}

impl ReminderEngine {
    /// `tolerance` should match the poll interval so a poll landing just
    /// after the minute boundary still catches it.
    pub fn new(tolerance: Duration) -> Self {
        Self {
            tolerance,
            fired: HashMap::new(),
        }
    }

    /// Scan the tracked list and return every reminder due at `now`.
    ///
    /// The window does not wrap across midnight: a 23:59 reminder polled
    /// first at 00:00 is missed for that day.
    pub fn tick(
        &mut self,
        now: NaiveDateTime,
        tracked: &[TrackedMedication],
    ) -> Vec<ReminderEvent> {
        let today = now.date();
        let now_minutes = now.hour() * 60 + now.minute();
        // Zero tolerance still covers the target minute itself.
        let window = (self.tolerance.as_secs().div_ceil(60)) as u32;

        let mut due = Vec::new();
        for entry in tracked {
            let target = entry.reminder.minutes_of_day();
            if now_minutes < target || now_minutes - target > window {
                continue;
            }
            if self.fired.get(entry.product_name()) == Some(&(today, target)) {
                continue;
            }

            self.fired
                .insert(entry.product_name().to_string(), (today, target));
            due.push(ReminderEvent {
                product_name: entry.product_name().to_string(),
                time: entry.reminder,
                condition: entry.condition,
                message: format!(
                    "Time to take {}. {}",
                    entry.product_name(),
                    entry.condition.description()
                ),
            });
        }

        due
    }
}
