pub const LAST_RESET_DATE: &str = "athkarpal_last_reset_date_v1";
pub const CUSTOM_DAILY_ATHKAR: &str = "custom_daily_athkar_v1";
pub const REMINDERS_ENABLED: &str = "athkarpal_reminders_enabled_v1";
