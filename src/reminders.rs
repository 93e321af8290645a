use crate::binding::Binding;
use crate::config::Config;
use crate::keys::REMINDERS_ENABLED;
use crate::reset::DailyReset;
use crate::state::AppState;
use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    Morning,
    Evening,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub title: &'static str,
    pub body: &'static str,
    pub tag: &'static str,
}

impl ReminderKind {
    pub fn reminder(self) -> Reminder {
        let (title, tag) = match self {
            ReminderKind::Morning => ("☀️ أذكار الصباح", "athkar-morning-reminder"),
            ReminderKind::Evening => ("🌙 أذكار المساء", "athkar-evening-reminder"),
        };
        Reminder {
            kind: self,
            title,
            body: "حان وقت قراءة أذكارك اليومية. اضغط هنا لفتح التطبيق.",
            tag,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Reminder(ReminderKind),
    /// Just past local midnight.
    Rollover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub event: Event,
    pub at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSchedule {
    pub morning_hour: u32,
    pub evening_hour: u32,
}

impl From<&Config> for ReminderSchedule {
    fn from(config: &Config) -> Self {
        Self {
            morning_hour: config.morning_hour,
            evening_hour: config.evening_hour,
        }
    }
}

impl ReminderSchedule {
    pub fn next_event(&self, now: NaiveDateTime) -> ScheduledEvent {
        let candidates = [
            ScheduledEvent {
                event: Event::Reminder(ReminderKind::Morning),
                at: next_occurrence(now, self.morning_hour),
            },
            ScheduledEvent {
                event: Event::Reminder(ReminderKind::Evening),
                at: next_occurrence(now, self.evening_hour),
            },
            ScheduledEvent {
                event: Event::Rollover,
                at: next_rollover(now),
            },
        ];
        let mut next = candidates[0];
        for candidate in &candidates[1..] {
            if candidate.at < next.at {
                next = *candidate;
            }
        }
        next
    }
}

/// The next `hour:00:00` strictly after `now`.
pub fn next_occurrence(now: NaiveDateTime, hour: u32) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default();
    let today = now.date().and_time(time);
    if now < today {
        today
    } else {
        today + Duration::days(1)
    }
}

pub fn next_rollover(now: NaiveDateTime) -> NaiveDateTime {
    (now.date() + Duration::days(1)).and_time(NaiveTime::default()) + Duration::seconds(1)
}

/// Where reminders go. Delivery is best-effort.
pub trait Notifier: Send + Sync {
    fn notify(&self, reminder: &Reminder);
}

pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, reminder: &Reminder) {
        info!(tag = reminder.tag, "{}: {}", reminder.title, reminder.body);
    }
}

pub struct ReminderScheduler {
    state: AppState,
    schedule: ReminderSchedule,
    notifier: Arc<dyn Notifier>,
}

impl ReminderScheduler {
    pub fn new(state: AppState, schedule: ReminderSchedule, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state,
            schedule,
            notifier,
        }
    }

    /// Runs until the returned handle is aborted.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }

    async fn run(self) {
        loop {
            let now = Local::now().naive_local();
            let next = self.schedule.next_event(now);
            let delay = (next.at - now).to_std().unwrap_or_default();
            debug!("next reminder event {:?} at {}", next.event, next.at);
            tokio::time::sleep(delay).await;
            self.fire(next.event).await;
        }
    }

    pub async fn fire(&self, event: Event) {
        match event {
            Event::Reminder(kind) => {
                if reminders_enabled(&self.state) {
                    self.notifier.notify(&kind.reminder());
                } else {
                    debug!("{kind:?} reminder skipped, reminders are disabled");
                }
            }
            Event::Rollover => {
                let _guard = self.state.writes.lock().await;
                DailyReset::new(&self.state.storage, &self.state.catalog).run_today();
            }
        }
    }
}

pub fn reminders_enabled(state: &AppState) -> bool {
    Binding::new(&state.storage, REMINDERS_ENABLED, false).into_inner()
}
