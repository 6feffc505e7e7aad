//! Report rendering: console, markdown, and JSON views of batch results.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use serde::Serialize;

use crate::scenarios::{BalanceProbes, Verdict, first_player_bias};
use crate::simulation::BatchSummary;

const BAR_WIDTH: usize = 30;

/// One finished batch, labeled for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub label: String,
    pub summary: BatchSummary,
    pub verdict: Verdict,
    pub bias_pct: f64,
    pub probes: BalanceProbes,
    pub elapsed_ms: u64,
}

impl RunRecord {
    #[must_use]
    pub fn new(label: String, summary: BatchSummary, elapsed: Duration) -> Self {
        let verdict = Verdict::for_summary(&summary);
        let bias_pct = first_player_bias(&summary);
        let probes = BalanceProbes::for_starting_money(summary.starting_money);
        #[allow(clippy::cast_possible_truncation)]
        let elapsed_ms = elapsed.as_millis() as u64;
        Self {
            label,
            summary,
            verdict,
            bias_pct,
            probes,
            elapsed_ms,
        }
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn win_bar(wins: usize, games: usize) -> String {
    let share = if games == 0 {
        0.0
    } else {
        wins as f64 / games as f64
    };
    let filled = (share * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn verdict_colored(verdict: Verdict) -> colored::ColoredString {
    let label = verdict.label();
    match verdict {
        Verdict::Ideal => label.green(),
        Verdict::Long | Verdict::Short | Verdict::MostlyTimeout => label.yellow(),
        Verdict::NeverEnds | Verdict::VeryLong => label.red(),
    }
}

#[allow(clippy::cast_precision_loss)]
pub fn generate_console_report(
    out: &mut dyn Write,
    records: &[RunRecord],
    total: Duration,
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Simulation Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "=====================".cyan())?;

    for record in records {
        let s = &record.summary;
        writeln!(out)?;
        writeln!(
            out,
            "{}: {} players, {} FCFA start, {} games (seed {})",
            record.label.bold(),
            s.num_players,
            format_money(s.starting_money as f64),
            s.games,
            s.seed
        )?;
        writeln!(
            out,
            "   Completion: {:.0}% ({} decisive, {} timeout)   Verdict: {}",
            s.decisive_rate() * 100.0,
            s.decisive,
            s.timeouts,
            verdict_colored(record.verdict)
        )?;
        writeln!(
            out,
            "   Rounds: median {:.0}, mean {:.0}, p25 {:.0}, p75 {:.0}, max {:.0}",
            s.rounds.median, s.rounds.mean, s.rounds.p25, s.rounds.p75, s.rounds.max
        )?;
        if let Some(done) = &s.decisive_rounds {
            writeln!(out, "   Rounds (decisive only): median {:.0}", done.median)?;
        }
        writeln!(
            out,
            "   Probes: max hotel rent {} ({:.1}% of start), GO reward {} ({:.1}% of start)",
            format_money(record.probes.max_hotel_rent as f64),
            record.probes.max_rent_pct,
            format_money(record.probes.go_reward as f64),
            record.probes.go_reward_pct
        )?;

        writeln!(out, "   Win distribution (first-seat bias {:+.1}%):", record.bias_pct)?;
        for (seat, econ) in s.seats.iter().enumerate() {
            writeln!(
                out,
                "     P{} {} {:>5} wins",
                seat + 1,
                win_bar(econ.wins, s.games),
                econ.wins
            )?;
        }

        writeln!(
            out,
            "   {:>8}  {:>12}  {:>12}  {:>10}  {:>6}  {:>12}",
            "Player", "Rent Paid", "Rent Rcvd", "GO Bonus", "Props", "Peak Cash"
        )?;
        for (seat, econ) in s.seats.iter().enumerate() {
            writeln!(
                out,
                "   {:>8}  {:>12}  {:>12}  {:>10}  {:>6.1}  {:>12}",
                format!("P{}", seat + 1),
                format_money(econ.rent_paid),
                format_money(econ.rent_received),
                format_money(econ.go_bonuses),
                econ.properties_bought,
                format_money(econ.peak_cash)
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "🏁 Total time: {total:?}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, records: &[RunRecord]) -> std::io::Result<()> {
    writeln!(out, "# Babipoly Balance Report")?;
    writeln!(out)?;
    writeln!(
        out,
        "| Scenario | Players | Start (FCFA) | Games | Completion | Median rounds | P1 bias | Max rent % | GO % | Verdict |"
    )?;
    writeln!(out, "|---|---|---|---|---|---|---|---|---|---|")?;
    for record in records {
        let s = &record.summary;
        let median_done = s.decisive_rounds.map_or(10_000.0, |d| d.median);
        writeln!(
            out,
            "| {} | {} | {} | {} | {:.0}% | {:.0} | {:+.1}% | {:.1}% | {:.1}% | {} |",
            record.label,
            s.num_players,
            s.starting_money,
            s.games,
            s.decisive_rate() * 100.0,
            median_done,
            record.bias_pct,
            record.probes.max_rent_pct,
            record.probes.go_reward_pct,
            record.verdict.label()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "## Economics (mean per game)")?;
    for record in records {
        let s = &record.summary;
        writeln!(out)?;
        writeln!(out, "### {} ({} players)", record.label, s.num_players)?;
        writeln!(out)?;
        writeln!(
            out,
            "| Seat | Wins | Rent paid | Rent received | GO bonuses | Properties | Peak cash |"
        )?;
        writeln!(out, "|---|---|---|---|---|---|---|")?;
        for (seat, econ) in s.seats.iter().enumerate() {
            writeln!(
                out,
                "| P{} | {} | {:.0} | {:.0} | {:.0} | {:.1} | {:.0} |",
                seat + 1,
                econ.wins,
                econ.rent_paid,
                econ.rent_received,
                econ.go_bonuses,
                econ.properties_bought,
                econ.peak_cash
            )?;
        }
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, records: &[RunRecord]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

fn format_money(value: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
