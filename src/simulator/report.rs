//! Aggregated statistics from a simulation batch.

use serde::Serialize;

/// Counters from one simulated play session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub final_level: u32,
    pub final_gold: u64,
    pub zones_unlocked: u32,
    pub kills: u64,
    pub boss_kills: u64,
    pub boss_challenges: u64,
    pub deaths: u64,
    pub flees: u64,
    pub items_found: u64,
    pub items_looted: u64,
    pub gathers: u64,
    pub gacha_pulls: u64,
    pub legendaries: u64,
    pub events_resolved: u64,
    pub quests_claimed: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub runs: Vec<RunStats>,
    pub mean_level: f64,
    pub max_level: u32,
    pub mean_gold: f64,
    pub total_kills: u64,
    pub total_boss_kills: u64,
    pub total_deaths: u64,
    pub total_pulls: u64,
    pub total_legendaries: u64,
    pub total_events: u64,
    pub total_quests_claimed: u64,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let n = runs.len().max(1) as f64;
        let mean_level = runs.iter().map(|r| r.final_level as f64).sum::<f64>() / n;
        let max_level = runs.iter().map(|r| r.final_level).max().unwrap_or(0);
        let mean_gold = runs.iter().map(|r| r.final_gold as f64).sum::<f64>() / n;

        let sum = |f: fn(&RunStats) -> u64| runs.iter().map(f).sum::<u64>();

        Self {
            mean_level,
            max_level,
            mean_gold,
            total_kills: sum(|r| r.kills),
            total_boss_kills: sum(|r| r.boss_kills),
            total_deaths: sum(|r| r.deaths),
            total_pulls: sum(|r| r.gacha_pulls),
            total_legendaries: sum(|r| r.legendaries),
            total_events: sum(|r| r.events_resolved),
            total_quests_claimed: sum(|r| r.quests_claimed),
            runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Runs:              {}\n", self.runs.len()));
        out.push_str(&format!("Mean level:        {:.1}\n", self.mean_level));
        out.push_str(&format!("Max level:         {}\n", self.max_level));
        out.push_str(&format!("Mean gold:         {:.0}\n", self.mean_gold));
        out.push_str(&format!("Total kills:       {}\n", self.total_kills));
        out.push_str(&format!("Boss kills:        {}\n", self.total_boss_kills));
        out.push_str(&format!("Deaths:            {}\n", self.total_deaths));
        out.push_str(&format!("Gacha pulls:       {}\n", self.total_pulls));
        out.push_str(&format!("Legendary pulls:   {}\n", self.total_legendaries));
        out.push_str(&format!("Events resolved:   {}\n", self.total_events));
        out.push_str(&format!("Quests claimed:    {}\n", self.total_quests_claimed));
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_aggregation() {
        let runs = vec![
            RunStats {
                final_level: 4,
                final_gold: 100,
                kills: 10,
                ..RunStats::default()
            },
            RunStats {
                final_level: 6,
                final_gold: 300,
                kills: 30,
                ..RunStats::default()
            },
        ];
        let report = SimReport::from_runs(runs);
        assert_eq!(report.mean_level, 5.0);
        assert_eq!(report.max_level, 6);
        assert_eq!(report.mean_gold, 200.0);
        assert_eq!(report.total_kills, 40);
    }

    #[test]
    fn test_report_renders() {
        let report = SimReport::from_runs(vec![RunStats::default()]);
        assert!(report.to_text().contains("Runs:"));
        assert!(report.to_json().contains("\"runs\""));
    }
}
