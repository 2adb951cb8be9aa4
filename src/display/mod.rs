use std::fmt::{self, Display, Formatter};
use num_traits::{Float, FromPrimitive};
use comfy_table::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use crate::statistics::MomentSummary;

const UNDEFINED: &str = "—";

fn cell<F: Display>(value: Option<F>, signed: bool) -> String {
    match value {
        Some(v) if signed => format!("{:+.4}", v),
        Some(v) => format!("{:.4}", v),
        None => UNDEFINED.to_string(),
    }
}

fn skewness_interpretation<F>(skewness: Option<F>) -> &'static str
where
    F: Float + FromPrimitive,
{
    let Some(skewness) = skewness else {
        return "Undefined (n < 3 or zero spread)";
    };
    let c = |x: f64| F::from_f64(x).unwrap_or_else(F::nan);

    let right = skewness > F::zero();
    let skew_abs = skewness.abs();
    if skew_abs < c(0.5) {
        "🟢 Approx. symmetric"
    } else if skew_abs < c(1.0) {
        if right { "🟡 Moderate right skew" } else { "🟡 Moderate left skew" }
    } else if skew_abs < c(2.0) {
        if right { "🟠 Strong right skew" } else { "🟠 Strong left skew" }
    } else if right {
        "🔴 Extreme right skew"
    } else {
        "🔴 Extreme left skew"
    }
}

fn kurtosis_interpretation<F>(excess: Option<F>) -> &'static str
where
    F: Float + FromPrimitive,
{
    let Some(excess) = excess else {
        return "Undefined (empty or zero spread)";
    };
    let c = |x: f64| F::from_f64(x).unwrap_or_else(F::nan);

    if excess.abs() < c(0.5) {
        "🟢 Mesokurtic (normal tails)"
    } else if excess < c(2.0) && excess >= c(0.5) {
        "🟡 Leptokurtic (heavy tails)"
    } else if excess >= c(2.0) && excess < c(5.0) {
        "🟠 Very heavy tails"
    } else if excess >= c(5.0) {
        "🔴 Extreme heavy tails"
    } else {
        "🔵 Platykurtic (light tails)"
    }
}

impl<F> MomentSummary<F>
where
    F: Float + FromPrimitive + Display,
{
    /// Renders the summary as a table with a plain-language reading of the
    /// shape statistics.
    pub fn display(&self) -> String {
        let mut title_table = Table::new();
        title_table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .add_row(vec![Cell::new(format!("Moment Summary (n = {})", self.n))
                .set_alignment(CellAlignment::Center)]);

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Metric").set_alignment(CellAlignment::Center),
                Cell::new("Value").set_alignment(CellAlignment::Center),
                Cell::new("Interpretation").set_alignment(CellAlignment::Center),
            ]);

        let rows: [(&str, String, &str); 8] = [
            ("Mean", cell(Some(self.mean), false), ""),
            ("Std. dev. (sample)", cell(self.std_dev_sample, false), "divisor n − 1"),
            ("Std. dev. (population)", cell(Some(self.std_dev_population), false), "divisor n"),
            (
                "Skewness (sample)",
                cell(self.skewness_sample, true),
                skewness_interpretation(self.skewness_sample),
            ),
            (
                "Skewness (population)",
                cell(self.skewness_population, true),
                skewness_interpretation(self.skewness_population),
            ),
            ("Kurtosis", cell(self.kurtosis, false), "normal = 3"),
            (
                "Excess kurtosis",
                cell(self.excess_kurtosis, true),
                kurtosis_interpretation(self.excess_kurtosis),
            ),
            ("Observations", self.n.to_string(), ""),
        ];

        for (metric, value, interpretation) in rows {
            table.add_row(vec![
                Cell::new(metric).set_alignment(CellAlignment::Left),
                Cell::new(value).set_alignment(CellAlignment::Right),
                Cell::new(interpretation).set_alignment(CellAlignment::Left),
            ]);
        }

        format!("{}\n{}", title_table, table)
    }
}

impl<F> Display for MomentSummary<F>
where
    F: Float + FromPrimitive + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
