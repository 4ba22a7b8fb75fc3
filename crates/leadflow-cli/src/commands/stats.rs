//! Stats command
//!
//! Usage: leadflow stats

use serde::Serialize;

use super::{print_json, CmdResult, Context};
use leadflow_core::model::{DailyVolume, DashboardStats};

#[derive(Serialize)]
struct StatsView<'a> {
    stats: &'a DashboardStats,
    daily_volume: &'a [DailyVolume],
}

/// Execute stats command
pub fn execute(ctx: &Context) -> CmdResult {
    let ws = &ctx.workspace;
    if ctx.json {
        return print_json(&StatsView {
            stats: &ws.stats,
            daily_volume: &ws.daily_volume,
        });
    }

    let s = &ws.stats;
    println!("Leads today:     {}", s.leads_today);
    println!("Delivered today: {}", s.delivered_today);
    println!("Rejected today:  {}", s.rejected_today);
    println!("Revenue today:   {:.2}", s.revenue_today);
    println!("Acceptance rate: {:.0}%", s.acceptance_rate * 100.0);

    if !ws.daily_volume.is_empty() {
        println!();
        for day in &ws.daily_volume {
            println!("{:<4} {}", day.day, day.leads);
        }
    }
    Ok(())
}
