// Typed payloads of the API and the short-stats summary built from them.

use serde::Deserialize;

use crate::format::{format_number, format_percent};

/// Label used when no day in the week is flagged as today.
pub const DEFAULT_TODAY_LABEL: &str = "today";

/// Body of a successful `/auth/token` call.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of `/dashboard`. Only the fields the summary needs are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardResponse {
    pub dashboard: Dashboard,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Dashboard {
    pub days: Vec<Day>,
    pub today_steps: f64,
    pub weekly_step_goal: f64,
    pub week_number: f64,
    pub current_steps: f64,
    pub week_full_pct: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Day {
    pub abbr: String,
    pub is_today: bool,
}

impl Dashboard {
    /// Abbreviation of the first day flagged as today.
    pub fn today_label(&self) -> &str {
        self.days
            .iter()
            .find(|day| day.is_today)
            .map(|day| day.abbr.as_str())
            .unwrap_or(DEFAULT_TODAY_LABEL)
    }

    /// Today's steps as a percentage of a seventh of the weekly goal.
    pub fn today_pct(&self) -> f64 {
        let daily_goal = self.weekly_step_goal / 7.0;
        if daily_goal <= 0.0 {
            return 0.0;
        }
        100.0 * self.today_steps / daily_goal
    }

    /// One-line summary, e.g.
    /// `H2W - Tue: 8,500 (85.00%); week 12: 31,000 (44.29%)`.
    pub fn summary(&self) -> String {
        format!(
            "H2W - {}: {} ({}%); week {}: {} ({}%)",
            self.today_label(),
            format_number(self.today_steps),
            format_percent(self.today_pct()),
            self.week_number,
            format_number(self.current_steps),
            format_percent(self.week_full_pct),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dashboard(days: serde_json::Value) -> Dashboard {
        let body = json!({
            "dashboard": {
                "days": days,
                "today_steps": 8500,
                "weekly_step_goal": 70000,
                "week_number": 12,
                "current_steps": 31000,
                "week_full_pct": 44.2857,
                "points": 40
            }
        });
        serde_json::from_value::<DashboardResponse>(body).unwrap().dashboard
    }

    #[test]
    fn summary_line_for_a_typical_week() {
        let d = dashboard(json!([
            {"abbr": "Mon", "is_today": false, "steps": 22500},
            {"abbr": "Tue", "is_today": true, "steps": 8500},
            {"abbr": "Wed", "is_today": false, "steps": 0}
        ]));

        assert_eq!(
            d.summary(),
            "H2W - Tue: 8,500 (85.00%); week 12: 31,000 (44.29%)"
        );
    }

    #[test]
    fn no_day_flagged_falls_back_to_today() {
        let d = dashboard(json!([
            {"abbr": "Mon", "is_today": false},
            {"abbr": "Tue", "is_today": false}
        ]));

        assert_eq!(d.today_label(), "today");
        assert!(d.summary().starts_with("H2W - today: 8,500"));
    }

    #[test]
    fn first_flagged_day_wins() {
        let d = dashboard(json!([
            {"abbr": "Mon", "is_today": false},
            {"abbr": "Wed", "is_today": true},
            {"abbr": "Thu", "is_today": true}
        ]));

        assert_eq!(d.today_label(), "Wed");
    }

    #[test]
    fn zero_goal_does_not_divide_by_zero() {
        let mut d = dashboard(json!([]));
        d.weekly_step_goal = 0.0;

        assert_eq!(d.today_pct(), 0.0);
        assert!(d.summary().contains("8,500 (0.00%)"));
    }

    #[test]
    fn mistyped_field_is_rejected() {
        let body = json!({
            "dashboard": {
                "days": [],
                "today_steps": "lots",
                "weekly_step_goal": 70000,
                "week_number": 12,
                "current_steps": 31000,
                "week_full_pct": 44.0
            }
        });

        assert!(serde_json::from_value::<DashboardResponse>(body).is_err());
    }

    #[test]
    fn missing_dashboard_is_rejected() {
        assert!(serde_json::from_value::<DashboardResponse>(json!({"days": []})).is_err());
        assert!(serde_json::from_value::<LoginResponse>(json!({"error": "nope"})).is_err());
    }
}
