//! Text reports for the terminal.

use std::fmt::Write;

use wire_core::calculations::{BreakerResult, ConductorResult, ConduitResult};
use wire_core::compliance::ComplianceReport;
use wire_core::CalculationResponse;

const RULE: &str = "═══════════════════════════════════════";

pub fn response(response: &CalculationResponse) -> String {
    match response {
        CalculationResponse::Conductor(result) => conductor(result),
        CalculationResponse::Breaker(result) => breaker(result),
        CalculationResponse::ConduitFill(result) => conduit(result),
    }
}

fn heading(out: &mut String, title: &str, label: &str) {
    let _ = writeln!(out, "{RULE}");
    if label.is_empty() {
        let _ = writeln!(out, "  {title}");
    } else {
        let _ = writeln!(out, "  {title}: {label}");
    }
    let _ = writeln!(out, "{RULE}");
}

fn compliance(out: &mut String, report: &ComplianceReport, references: &[String]) {
    let _ = writeln!(out);
    for (check, passed) in report.flags.applicable() {
        let mark = if passed { "ok" } else { "FAIL" };
        let _ = writeln!(out, "  [{mark:^4}] {check}");
    }
    for issue in &report.issues {
        let _ = writeln!(out, "  ! {issue}");
    }
    let verdict = if report.compliant { "COMPLIANT" } else { "NOT COMPLIANT" };
    let _ = writeln!(out, "\nStatus: {verdict}");
    if !references.is_empty() {
        let _ = writeln!(out, "References: {}", references.join(", "));
    }
}

pub fn conductor(result: &ConductorResult) -> String {
    let mut out = String::new();
    heading(&mut out, "CONDUCTOR", &result.label);
    let _ = writeln!(out, "Standard:   {}", result.standard.display_name());
    let _ = writeln!(
        out,
        "Conductor:  {} ({:.2} mm²), {:?} {}",
        result.size, result.area_mm2, result.material, result.temperature_rating
    );
    let _ = writeln!(
        out,
        "Current:    {:.2} A x {:.2} = {:.2} A design",
        result.load_current_a, result.current_factor, result.design_current_a
    );
    let _ = writeln!(
        out,
        "Ampacity:   {:.1} A table, {:.1} A adjusted",
        result.base_ampacity_a, result.adjusted_ampacity_a
    );
    let _ = writeln!(
        out,
        "Drop:       {:.2} V ({:.2}%, limit {}%) over {} {}",
        result.voltage_drop_v,
        result.voltage_drop_pct,
        result.voltage_drop_limit_pct,
        result.length,
        result.length_unit.symbol()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", result.derating.format_report());
    compliance(&mut out, &result.compliance, &result.code_references);
    out
}

pub fn breaker(result: &BreakerResult) -> String {
    let mut out = String::new();
    heading(&mut out, "PROTECTION", &result.label);
    let defaulted = if result.standard_defaulted { " (default)" } else { "" };
    let _ = writeln!(out, "Standard:   {}{defaulted}", result.standard.display_name());
    let _ = writeln!(out, "Device:     {} A {}", result.rating_a, result.device);
    let _ = writeln!(out, "Catalog:    {}", result.catalog);
    if let Some(solar) = &result.solar {
        let _ = writeln!(
            out,
            "PV:         {:.2} A Isc x {} ({:?} strings)",
            solar.total_isc_a, solar.multiplier, solar.string_configuration
        );
    } else {
        let _ = writeln!(
            out,
            "Factors:    safety {:.2}, environment {:.2}, temperature {:.2}",
            result.safety_factor, result.environment_factor, result.temperature_factor
        );
    }
    let _ = writeln!(
        out,
        "Current:    {:.2} A base, {:.2} A adjusted",
        result.base_current_a, result.adjusted_current_a
    );
    compliance(&mut out, &result.compliance, &result.code_references);
    out
}

pub fn conduit(result: &ConduitResult) -> String {
    let mut out = String::new();
    heading(&mut out, "CONDUIT FILL", &result.label);
    let _ = writeln!(out, "Standard:   {}", result.standard.display_name());
    let _ = writeln!(
        out,
        "Conduit:    {} {}",
        result.trade_size,
        result.conduit_type.display_name()
    );
    for wire in &result.wires {
        let _ = writeln!(
            out,
            "  {} x {} {:?} @ {:.2} mm²",
            wire.count, wire.size, wire.insulation, wire.area_each_mm2
        );
    }
    for note in &result.conversions {
        let _ = writeln!(out, "  * {note}");
    }
    let _ = writeln!(
        out,
        "Fill:       {:.1}% of {:.0} mm² (allowed {}% for {} conductors)",
        result.fill_pct, result.internal_area_mm2, result.allowable_fill_pct, result.conductor_count
    );
    compliance(&mut out, &result.compliance, &result.code_references);
    out
}
