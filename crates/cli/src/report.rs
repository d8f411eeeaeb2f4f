// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of query results.

use shiftbook::Workbook;
use shiftbook_domain::{
    DayOverrideDraft, Job, PayrollTotals, ResolvedDay, ShiftCode, ShiftDefinition,
};
use std::fmt::Display;
use time::Date;

/// Returns the shift column for a day: code and label, or `-` for none.
fn shift_label(day: &ResolvedDay) -> String {
    match (&day.shift_code, &day.shift) {
        (Some(code), Some(shift)) => format!("{code} ({})", shift.label),
        (Some(code), None) => format!("{code} (unknown)"),
        (None, _) => String::from("-"),
    }
}

/// Renders every field of one resolved day.
pub fn render_day(day: &ResolvedDay) -> String {
    let mut lines: Vec<String> = vec![
        format!("Date:           {}", day.date),
        format!("Shift:          {}", shift_label(day)),
        format!("Hours worked:   {}", day.hours_worked),
        format!(
            "Overtime:       {} h @ {}",
            day.overtime_hours, day.overtime_rate
        ),
        format!(
            "Premium:        {} h @ {}",
            day.premium_hours, day.premium_rate
        ),
    ];
    if !day.note.is_empty() {
        lines.push(format!("Note:           {}", day.note));
    }
    if day.overridden {
        lines.push(String::from("Overridden:     yes"));
    }
    lines.join("\n")
}

/// Renders a one-line calendar row for a day.
pub fn render_plan_row(day: &ResolvedDay) -> String {
    let marker: &str = if day.overridden { "*" } else { " " };
    let mut row: String = format!(
        "{}{marker} {:<20} {:>6} h",
        day.date,
        shift_label(day),
        day.total_hours()
    );
    if !day.premium_hours.is_zero() {
        row.push_str(&format!("  +{} h premium", day.premium_hours));
    }
    if !day.note.is_empty() {
        row.push_str(&format!("  {}", day.note));
    }
    row
}

/// Renders payroll totals for a job over a month or a range.
pub fn render_totals(job: &Job, period: &impl Display, totals: &PayrollTotals) -> String {
    [
        format!("{} ({}) - {period}", job.name, job.id),
        format!(
            "Days:           {} active of {}",
            totals.active_days, totals.days_evaluated
        ),
        format!("Total hours:    {}", totals.total_hours),
        format!("Premium hours:  {}", totals.premium_hours),
        format!("Gross pay:      {}", totals.gross_pay),
        format!(
            "Net pay:        {} (tax {} %)",
            totals.net_pay, job.pay.tax_percent
        ),
    ]
    .join("\n")
}

/// Renders a stored override as its non-blank editor fields.
pub fn render_override(date: Date, draft: &DayOverrideDraft) -> String {
    let fields: [(&str, &str); 7] = [
        ("shift", draft.shift_code.as_str()),
        ("hours", draft.hours_worked.as_str()),
        ("overtime", draft.overtime_hours.as_str()),
        ("overtime-rate", draft.overtime_rate.as_str()),
        ("premium", draft.premium_hours.as_str()),
        ("premium-rate", draft.premium_rate.as_str()),
        ("note", draft.note.as_str()),
    ];
    let set: Vec<String> = fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    if set.is_empty() {
        format!("{date}  (empty)")
    } else {
        format!("{date}  {}", set.join(" "))
    }
}

/// Renders one catalog entry.
pub fn render_shift(shift: &ShiftDefinition) -> String {
    format!(
        "{:<10} {:<12} {:>6} h  {:<8} {}",
        shift.code, shift.label, shift.base_hours, shift.kind, shift.color
    )
}

/// Renders the job list of a workbook.
pub fn render_jobs(workbook: &Workbook) -> String {
    workbook
        .jobs()
        .map(|job| {
            let end: String = job
                .contract
                .end()
                .map_or_else(|| String::from("open"), |d| d.to_string());
            let start: String = job
                .contract
                .start()
                .map_or_else(|| String::from("unset"), |d| d.to_string());
            let rotation: Vec<&str> = job.rotation.codes().iter().map(ShiftCode::value).collect();
            format!(
                "{:<12} {:<20} {start} .. {end}  {}/h  rotation {}",
                job.id,
                job.name,
                job.pay.hourly_rate,
                rotation.join(",")
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}
