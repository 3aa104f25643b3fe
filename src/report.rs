//! ═══════════════════════════════════════════════════════════════════════════════
//! REPORT — Console Summary of an Analysis Run
//! ═══════════════════════════════════════════════════════════════════════════════
//! Display only. Consumes the report as plain data; nothing here feeds back
//! into the analyzers.
//! ═══════════════════════════════════════════════════════════════════════════════

use crate::engine::StabilityReport;

/// Print a boxed summary of one analysis run to stdout
pub fn print_report(report: &StabilityReport) {
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ STABILITY METRICS                                           │");
    println!("├─────────────────────────────────────────────────────────────┤");
    println!(
        "│ Breakdown threshold (noise):   {:>10}                   │",
        fmt_opt(report.metrics.breakdown_threshold)
    );
    println!(
        "│ Mean recovery time:            {:>10}                   │",
        fmt_opt(report.metrics.mean_recovery_time)
    );
    println!(
        "│ Mean phase locking:            {:>10}                   │",
        fmt_f64(report.metrics.mean_phase_locking)
    );
    println!("└─────────────────────────────────────────────────────────────┘");

    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ SWEEPS                                                      │");
    println!("├─────────────────────────────────────────────────────────────┤");
    match &report.perturbation {
        Ok(sweep) => {
            let stable = sweep.records.iter().filter(|r| r.is_stable).count();
            println!(
                "│ Perturbation: {:4} windows, {:4} stable                     │",
                sweep.records.len(),
                stable
            );
        }
        Err(e) => println!("│ Perturbation: unavailable ({:<25})   │", e.to_string()),
    }
    println!(
        "│ Recurrence:   {:4} windows                                  │",
        report.recurrence.len()
    );
    let degenerate = report.coupling.iter().filter(|r| r.is_degenerate()).count();
    println!(
        "│ Coupling:     {:4} windows, {:4} degenerate                 │",
        report.coupling.len(),
        degenerate
    );
    println!("└─────────────────────────────────────────────────────────────┘");
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.3}", v),
        None => "n/a".to_string(),
    }
}

fn fmt_f64(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.3}", value)
    }
}
