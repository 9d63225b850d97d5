use std::fmt::Write;

use crate::optimizer::{BestValue, Candidate};

use super::state::{ViewResult, ViewState};

/// Locks the button while the browser waits for the result page.
pub const DISABLE_ON_SUBMIT: &str = "var b = this.querySelector('button[type=submit]'); \
     if (b.disabled) { return false; } b.disabled = true; b.textContent = 'Calculating...';";

#[derive(Debug, PartialEq)]
pub struct ComparisonRow<'a> {
    pub candidate: &'a Candidate,
    pub is_best: bool,
}

/// Comparisons ordered by ascending price per km. Only the first row whose
/// destination and airport match `best` is flagged.
pub fn comparison_rows(value: &BestValue) -> Vec<ComparisonRow<'_>> {
    let mut sorted: Vec<&Candidate> = value.comparisons.iter().collect();
    sorted.sort_by(|a, b| a.price_per_km.total_cmp(&b.price_per_km));

    let mut flagged = false;
    sorted
        .into_iter()
        .map(|candidate| {
            let matches = candidate.destination == value.best.destination
                && candidate.airport == value.best.airport;
            let is_best = matches && !flagged;
            flagged |= is_best;
            ComparisonRow { candidate, is_best }
        })
        .collect()
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn render_best(out: &mut String, value: &BestValue) {
    let best = &value.best;
    let _ = write!(
        out,
        r#"<div class="best-block">
<h3>Best destination: {destination}</h3>
<p>Airport: {airport}</p>
<p>Distance: {distance} km</p>
<p>Price per km: ${ppk}/km</p>
<p>Price (approx): ${price}</p>
</div>
"#,
        destination = escape_html(&best.destination),
        airport = escape_html(&best.airport),
        distance = best.distance_km,
        ppk = best.price_per_km,
        price = best.price,
    );

    out.push_str(
        "<table class=\"comparisons\">\n<thead><tr><th>Destination</th><th>Airport</th>\
         <th>Price</th><th>Distance (km)</th><th>$/km</th></tr></thead>\n<tbody>\n",
    );
    for row in comparison_rows(value) {
        let c = row.candidate;
        let class = if row.is_best { r#" class="best""# } else { "" };
        let _ = writeln!(
            out,
            "<tr{class}><td>{}</td><td>{}</td><td>${}</td><td>{}</td><td>${}</td></tr>",
            escape_html(&c.destination),
            escape_html(&c.airport),
            c.price,
            c.distance_km,
            c.price_per_km,
        );
    }
    out.push_str("</tbody>\n</table>\n");
}

pub fn render_page(state: &ViewState) -> String {
    let mut out = String::from(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Flight Optimizer ($/km)</title>
<style>
body { max-width: 600px; margin: 40px auto; font-family: system-ui, sans-serif; }
input { width: 100%; margin-bottom: 8px; }
.error { color: red; }
.best-block { margin-top: 16px; padding: 12px; border: 1px solid #ddd; }
table.comparisons { margin-top: 16px; width: 100%; border-collapse: collapse; }
tr.best { background: #e6f4ea; font-weight: bold; }
</style>
</head>
<body>
<h1>Flight Optimizer ($/km)</h1>
"#,
    );

    let (disabled, label) = if state.loading {
        (" disabled", "Calculating...")
    } else {
        ("", "Find best")
    };
    let _ = write!(
        out,
        r#"<form method="post" action="/" onsubmit="{on_submit}">
<label for="from">From city</label>
<input id="from" name="from" value="{from}" placeholder="London">
<label for="to">To cities (comma separated)</label>
<input id="to" name="to" value="{to}" placeholder="Paris, Rome, Madrid">
<button type="submit"{disabled}>{label}</button>
</form>
"#,
        from = escape_html(&state.form.from),
        to = escape_html(&state.form.to),
        on_submit = escape_html(DISABLE_ON_SUBMIT),
    );

    if let Some(error) = &state.error {
        let _ = writeln!(out, r#"<p class="error">{}</p>"#, escape_html(error));
    }
    match &state.result {
        Some(ViewResult::Best(value)) => render_best(&mut out, value),
        Some(ViewResult::Message(message)) => {
            let _ = writeln!(out, r#"<p class="message">{}</p>"#, escape_html(message));
        }
        None => {}
    }

    out.push_str("</body>\n</html>\n");
    out
}
