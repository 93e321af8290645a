use crate::catalog::Catalog;
use crate::completion::CompletionMap;
use crate::keys::LAST_RESET_DATE;
use crate::storage::Storage;
use chrono::{Local, NaiveDate};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetState {
    Unchecked,
    Checked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// This pass already ran.
    Skipped,
    /// The stored date is today.
    UpToDate,
    Reset { cleared: usize },
    /// A storage call failed part way through.
    Aborted,
}

/// Clears every completion map once per local calendar day.
pub struct DailyReset<'a> {
    storage: &'a Storage,
    catalog: &'a Catalog,
    state: ResetState,
}

impl<'a> DailyReset<'a> {
    pub fn new(storage: &'a Storage, catalog: &'a Catalog) -> Self {
        Self {
            storage,
            catalog,
            state: ResetState::Unchecked,
        }
    }

    pub fn state(&self) -> ResetState {
        self.state
    }

    pub fn run_today(&mut self) -> ResetOutcome {
        self.run(Local::now().date_naive())
    }

    pub fn run(&mut self, today: NaiveDate) -> ResetOutcome {
        if self.state == ResetState::Checked {
            return ResetOutcome::Skipped;
        }
        self.state = ResetState::Checked;

        let today = date_key(today);
        let last_reset: Option<String> = match self.storage.try_get(LAST_RESET_DATE) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to read last reset date, skipping daily reset: {err}");
                return ResetOutcome::Aborted;
            }
        };

        if last_reset.as_deref() == Some(today.as_str()) {
            info!("daily reset already performed for {today}");
            return ResetOutcome::UpToDate;
        }

        info!("performing daily reset for {today}");
        let empty = CompletionMap::new();
        let keys = self.catalog.storage_keys();
        for key in &keys {
            if let Err(err) = self.storage.try_set(key, &empty) {
                error!("daily reset aborted while clearing \"{key}\": {err}");
                return ResetOutcome::Aborted;
            }
            debug!("reset storage key {key}");
        }

        if let Err(err) = self.storage.try_set(LAST_RESET_DATE, &today) {
            error!("daily reset aborted while recording the date: {err}");
            return ResetOutcome::Aborted;
        }

        info!("daily reset complete, cleared {} lists", keys.len());
        ResetOutcome::Reset {
            cleared: keys.len(),
        }
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
