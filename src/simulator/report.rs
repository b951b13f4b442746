//! Simulation report generation.

use std::collections::BTreeMap;

use serde::Serialize;

/// What happened to one simulated character.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub final_level: u32,
    pub final_gold: u32,
    pub battles: u32,
    pub battles_won: u32,
    pub battles_fled: u32,
    /// Battles abandoned at the action limit
    pub stalemates: u32,
    pub bosses_defeated: u32,
    pub total_turns: u64,
    pub damage_taken: u64,
    pub potions_bought: u32,
    pub potions_used: u32,
    pub gold_spent: u64,
    pub died: bool,
    pub reached_target: bool,
    /// (new level, battle number) for every level up
    pub level_ups: Vec<(u32, u32)>,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub target_level: u32,
    pub runs_completed: u32,
    pub runs_died: u32,

    pub avg_final_level: f64,
    pub avg_battles: f64,
    pub avg_turns_per_battle: f64,
    pub avg_damage_per_battle: f64,
    pub win_rate: f64,
    pub flee_rate: f64,
    pub avg_bosses_defeated: f64,
    pub avg_potions_used: f64,
    pub avg_gold_spent: f64,

    pub level_distribution: BTreeMap<u32, u32>,
    /// Average battle number at which each level was reached
    pub avg_battles_to_level: BTreeMap<u32, f64>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, target_level: u32) -> Self {
        let n = runs.len();
        let num_runs = n as u32;
        let runs_completed = runs.iter().filter(|r| r.reached_target).count() as u32;
        let runs_died = runs.iter().filter(|r| r.died).count() as u32;

        let total_battles: u64 = runs.iter().map(|r| r.battles as u64).sum();
        let total_won: u64 = runs.iter().map(|r| r.battles_won as u64).sum();
        let total_fled: u64 = runs.iter().map(|r| r.battles_fled as u64).sum();
        let total_turns: u64 = runs.iter().map(|r| r.total_turns).sum();
        let total_damage: u64 = runs.iter().map(|r| r.damage_taken).sum();

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        let mut level_totals: BTreeMap<u32, (u64, u32)> = BTreeMap::new();
        for run in &runs {
            for &(level, battle) in &run.level_ups {
                let entry = level_totals.entry(level).or_insert((0, 0));
                entry.0 += battle as u64;
                entry.1 += 1;
            }
        }
        let avg_battles_to_level = level_totals
            .into_iter()
            .map(|(level, (sum, count))| (level, sum as f64 / count as f64))
            .collect();

        Self {
            num_runs,
            target_level,
            runs_completed,
            runs_died,
            avg_final_level: mean(runs.iter().map(|r| r.final_level as f64), n),
            avg_battles: mean(runs.iter().map(|r| r.battles as f64), n),
            avg_turns_per_battle: ratio(total_turns, total_battles),
            avg_damage_per_battle: ratio(total_damage, total_battles),
            win_rate: ratio(total_won, total_battles),
            flee_rate: ratio(total_fled, total_battles),
            avg_bosses_defeated: mean(runs.iter().map(|r| r.bosses_defeated as f64), n),
            avg_potions_used: mean(runs.iter().map(|r| r.potions_used as f64), n),
            avg_gold_spent: mean(runs.iter().map(|r| r.gold_spent as f64), n),
            level_distribution,
            avg_battles_to_level,
            run_stats: runs,
        }
    }

    pub fn completion_rate(&self) -> f64 {
        ratio(self.runs_completed as u64, self.num_runs as u64)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} reached level {}, {} died\n\n",
            self.num_runs, self.runs_completed, self.target_level, self.runs_died
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:       {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Battles:           {:.1}\n", self.avg_battles));
        report.push_str(&format!("  Avg Bosses Defeated:   {:.2}\n", self.avg_bosses_defeated));
        report.push_str(&format!("  Avg Potions Used:      {:.1}\n", self.avg_potions_used));
        report.push_str(&format!("  Avg Gold Spent:        {:.0}\n\n", self.avg_gold_spent));

        report.push_str("── COMBAT ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Win Rate:              {:.1}%\n", self.win_rate * 100.0));
        report.push_str(&format!("  Flee Rate:             {:.1}%\n", self.flee_rate * 100.0));
        report.push_str(&format!("  Avg Turns per Battle:  {:.1}\n", self.avg_turns_per_battle));
        report.push_str(&format!("  Avg Damage per Battle: {:.1}\n\n", self.avg_damage_per_battle));

        report.push_str("── FINAL LEVELS ─────────────────────────────────────────────────\n");
        for (level, count) in &self.level_distribution {
            let pct = ratio(*count as u64, self.num_runs as u64) * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Level {:2}: {:>5.1}% {}\n", level, pct, bar));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let death_rate = ratio(self.runs_died as u64, self.num_runs as u64) * 100.0;
        let rating = if death_rate < 10.0 {
            "TOO EASY - Characters rarely die"
        } else if death_rate < 40.0 {
            "GOOD - Challenging but fair"
        } else if death_rate < 70.0 {
            "HARD - Most characters struggle"
        } else {
            "TOO HARD - Excessive deaths"
        };
        report.push_str(&format!("  Completion Rate: {:.1}%\n", self.completion_rate() * 100.0));
        report.push_str(&format!("  Death Rate:      {:.1}%\n", death_rate));
        report.push_str(&format!("  Rating:          {}\n", rating));

        report
    }

    /// Battles needed to reach each level, averaged over the runs that did.
    pub fn level_curve_text(&self) -> String {
        let mut text = String::from("── LEVEL CURVE ──────────────────────────────────────────────────\n");
        for (level, battles) in &self.avg_battles_to_level {
            text.push_str(&format!("  Level {:2}: battle {:.1}\n", level, battles));
        }
        text
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
