use crate::model::scores::RankedDriver;
use crate::report::{SummaryData, format_f64_6};

pub fn render_report_text(
    summary: &SummaryData,
    ranked: &[RankedDriver],
    top: Option<usize>,
) -> String {
    let mut out = String::new();

    out.push_str("Driver Composite Ranking\n");
    out.push_str("========================\n\n");

    match summary.season {
        Some(season) => out.push_str(&format!("Season: {}\n", season)),
        None => out.push_str("Season: unspecified\n"),
    }
    let w = &summary.weights;
    out.push_str(&format!(
        "Weights: wins={} podiums={} points={} csi_alpha={}\n",
        w.wins_weight, w.podiums_weight, w.points_weight, w.csi_alpha
    ));
    out.push_str(&format!(
        "Drivers: {} ranked, {} excluded\n\n",
        summary.n_ranked, summary.n_rejected
    ));

    out.push_str("1. Featured driver\n");
    match &summary.featured {
        Some(f) => out.push_str(&format!(
            "{}{} (score {})\n\n",
            f.driver_id,
            f.constructor
                .as_deref()
                .map(|c| format!(" / {c}"))
                .unwrap_or_default(),
            format_f64_6(f.score)
        )),
        None => out.push_str("none\n\n"),
    }

    out.push_str("2. Leaderboard\n");
    let limit = top.unwrap_or(ranked.len()).min(ranked.len());
    for driver in &ranked[..limit] {
        out.push_str(&format!(
            "{:>3}. {:<24} {:>12}  W{} P{} {}pts  csi={}\n",
            driver.rank,
            driver.driver_id,
            format_f64_6(driver.score()),
            driver.wins,
            driver.podiums,
            driver.points,
            driver.csi
        ));
    }
    if limit < ranked.len() {
        out.push_str(&format!("... {} more\n", ranked.len() - limit));
    }
    out.push('\n');

    out.push_str("3. Distribution\n");
    out.push_str(&format!(
        "median={} p90={} max={}\n",
        format_f64_6(summary.score_stats.median),
        format_f64_6(summary.score_stats.p90),
        format_f64_6(summary.score_stats.max)
    ));

    if !summary.rejected.is_empty() {
        out.push_str("\n4. Excluded records\n");
        for r in &summary.rejected {
            out.push_str(&format!("#{} {}: {}\n", r.input_index, r.driver_id, r.reason));
        }
    }

    out
}
