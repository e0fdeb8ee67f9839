//! Plain-text rendering of an analysis report.
//!
//! The narrative service receives this block as grounding context; it is
//! structured for a language model, not for terminal alignment.

use std::fmt::Write;

use crate::records::AnalysisReport;

/// Render a report as the sectioned plain-text context block.
pub fn report_to_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let ec = &report.eight_characters;

    let _ = writeln!(out, "[Subject]");
    let _ = writeln!(
        out,
        "{} ({}), born solar {} (lunar {}), season: {}",
        ec.name, ec.gender, ec.solar_date, ec.lunar_date, ec.season
    );

    let _ = writeln!(out, "\n[Four Pillars]");
    for (slot, p) in [
        ("Year", &ec.pillars.year),
        ("Month", &ec.pillars.month),
        ("Day", &ec.pillars.day),
        ("Hour", &ec.pillars.hour),
    ] {
        let _ = writeln!(
            out,
            "{slot}: {} ({} {} / {} {}), nayin {}",
            p.ganzi, p.stem_element, p.stem_polarity, p.branch_element, p.branch_polarity, p.nayin
        );
    }
    let _ = writeln!(
        out,
        "Day master: {} ({} {})",
        ec.day_stem.stem, ec.day_stem.polarity, ec.day_stem.element
    );

    let ea = &report.element_analysis;
    let _ = writeln!(out, "\n[Elements]");
    for (name, stat) in &ea.element_stats {
        let _ = writeln!(out, "{name} {}: ratio {}%, count {}", stat.symbol, stat.ratio, stat.count);
    }
    let _ = writeln!(
        out,
        "strongest: {}, weakest: {}, missing: {}",
        ea.strongest_element,
        ea.weakest_element,
        if ea.missing_elements.is_empty() {
            "none".to_owned()
        } else {
            ea.missing_elements.join(", ")
        }
    );

    let sa = &report.strength_analysis;
    let _ = writeln!(out, "\n[Strength]");
    let _ = writeln!(
        out,
        "{} ({}), self-support {:.1}%",
        sa.strength_status,
        sa.strength_level,
        sa.self_support_ratio * 100.0
    );
    let _ = writeln!(out, "{}", sa.description);

    let tg = &report.ten_gods_analysis;
    let _ = writeln!(out, "\n[Ten Gods]");
    let _ = writeln!(out, "dominant: {}", tg.dominant_category);
    let _ = writeln!(out, "{}", tg.interpretation);

    let ia = &report.interactions_analysis;
    let _ = writeln!(out, "\n[Interactions]");
    if ia.interactions.is_empty() {
        let _ = writeln!(out, "none detected");
    } else {
        for x in &ia.interactions {
            let _ = writeln!(out, "{} [{}]: {}", x.kind_korean, x.impact, x.description);
        }
    }

    let ys = &report.yong_shin_analysis;
    let _ = writeln!(out, "\n[YongShin]");
    let _ = writeln!(
        out,
        "yongshin: {} {}, heeshin: {}, gishin: {} (method: {})",
        ys.yong_shin, ys.yong_shin_symbol, ys.hee_shin, ys.gi_shin, ys.selection_method_label
    );
    let _ = writeln!(out, "{}", ys.selection_reason);
    let r = &ys.recommendations;
    let _ = writeln!(
        out,
        "colors: {}; direction: {}; numbers: {}, {}; career: {}; item: {}",
        r.lucky_colors.join(", "),
        r.lucky_direction,
        r.lucky_numbers[0],
        r.lucky_numbers[1],
        r.career_advice,
        r.lucky_item
    );

    let fa = &report.fortune_analysis;
    let _ = writeln!(out, "\n[Fortune Cycles]");
    let _ = writeln!(
        out,
        "direction: {}, first pillar at age {}, current age {}",
        fa.direction, fa.start_age, fa.current_age
    );
    if let Some(d) = &fa.current_da_yun {
        let _ = writeln!(
            out,
            "current da-yun: {} (ages {}-{}), score {} ({})",
            d.ganzi, d.start_age, d.end_age, d.score, d.rating
        );
    }
    let _ = writeln!(
        out,
        "year {}: {} score {} ({})",
        fa.current_year_fortune.year,
        fa.current_year_fortune.ganzi,
        fa.current_year_fortune.score,
        fa.current_year_fortune.rating
    );
    for y in &fa.yearly_fortunes {
        let _ = writeln!(out, "{} {}: {} ({}): {}", y.year, y.ganzi, y.score, y.rating, y.summary);
    }

    out
}
