//! Formatting helpers for the human-readable strings in results.

use spacereg_pack::{Timeline, WeekRange};

/// `EUR 60M` for whole millions, `EUR 7,500` otherwise.
pub fn eur(amount: u64) -> String {
    if amount >= 1_000_000 && amount % 1_000_000 == 0 {
        format!("EUR {}M", amount / 1_000_000)
    } else {
        format!("EUR {}", thousands(amount))
    }
}

fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Average weeks without a trailing `.0`.
pub fn weeks(avg: f64) -> String {
    if avg.fract() == 0.0 {
        format!("{avg:.0}")
    } else {
        format!("{avg:.1}")
    }
}

/// `6-10 weeks`, or `6 weeks` for a degenerate range.
pub fn week_range(range: WeekRange) -> String {
    if range.min == range.max {
        format!("{} weeks", range.min)
    } else {
        format!("{}-{} weeks", range.min, range.max)
    }
}

/// Processing time for result summaries.
pub fn timeline(t: &Timeline) -> String {
    t.processing_weeks
        .map(week_range)
        .unwrap_or_else(|| "Not specified".to_string())
}

/// Application cost for result summaries.
pub fn application_fee(t: &Timeline) -> String {
    match t.application_fee_eur {
        None => "Contact authority for fee schedule".to_string(),
        Some(0) => "No application fee".to_string(),
        Some(fee) => format!("{} application fee", eur(fee)),
    }
}

/// Recurring supervision fee for result summaries.
pub fn annual_fee(fee: u64) -> String {
    format!("{} per year", eur(fee))
}
