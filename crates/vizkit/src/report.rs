//! Self-contained HTML report: the rendered view as a single document.
//!
//! Chart data is embedded as a JSON blob and drawn client-side with Chart.js
//! (plus its boxplot plugin), so the document works offline-from-disk with no
//! companion files.

use crate::dashboard::ViewResult;
use crate::error::Result;

/// Render a view into one self-contained HTML document.
///
/// `caption` describes the dataset (file name, shape) and appears under the
/// page title.
pub fn render_html(result: &ViewResult, caption: &str) -> Result<String> {
    let blob = serde_json::to_string(result)?;
    Ok(TEMPLATE
        .replace("__VIZKIT_CAPTION__", &escape_html(caption))
        .replace("__VIZKIT_DATA__", &escape_json_for_script(&blob)))
}

/// Escape text interpolated into HTML body positions.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Keep `</script>` and friends from terminating the inline data block.
fn escape_json_for_script(s: &str) -> String {
    s.replace("</", "<\\/")
}

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Vizkit Report</title>
<script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>
<script src="https://cdn.jsdelivr.net/npm/@sgratzl/chartjs-chart-boxplot@4"></script>
<style>
  * { box-sizing: border-box; }
  body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    margin: 0; padding: 20px; background: #f5f5f5; color: #333;
  }
  h1 { margin: 0 0 4px 0; }
  .caption { color: #777; margin-bottom: 20px; }
  .bullets {
    background: #fff; border-radius: 8px; padding: 12px 28px; margin-bottom: 20px;
    box-shadow: 0 1px 3px rgba(0,0,0,0.08);
  }
  .charts { display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 16px; }
  .chart-card {
    background: #fff; border-radius: 8px; padding: 16px;
    box-shadow: 0 1px 3px rgba(0,0,0,0.08);
  }
  .chart-card h3 { margin: 0 0 8px 0; font-size: 0.95rem; }
  .chart-card .empty { color: #999; padding: 40px 0; text-align: center; }
  .chart-wrap { position: relative; height: 340px; }
</style>
</head>
<body>
<h1>Vizkit Report</h1>
<div class="caption">__VIZKIT_CAPTION__</div>
<div class="bullets"><ul id="bullets"></ul></div>
<div class="charts" id="charts"></div>

<script>
const VIEW = __VIZKIT_DATA__;
const PALETTE = ['#4e79a7','#f28e2b','#e15759','#76b7b2','#59a14f',
                 '#edc948','#b07aa1','#ff9da7','#9c755f','#bab0ac','#86bcb6'];

const bulletList = document.getElementById('bullets');
for (const text of VIEW.bullets) {
  const li = document.createElement('li');
  li.textContent = text;
  bulletList.appendChild(li);
}
if (!VIEW.bullets.length) {
  bulletList.parentElement.style.display = 'none';
}

const chartsEl = document.getElementById('charts');
VIEW.charts.forEach((chart, i) => {
  const card = document.createElement('div');
  card.className = 'chart-card';
  const title = document.createElement('h3');
  title.textContent = chartTitle(chart);
  card.appendChild(title);

  if (chart.kind === 'empty') {
    const msg = document.createElement('div');
    msg.className = 'empty';
    msg.textContent = 'Nothing to draw for this view.';
    card.appendChild(msg);
  } else {
    const wrap = document.createElement('div');
    wrap.className = 'chart-wrap';
    const canvas = document.createElement('canvas');
    canvas.id = 'chart-' + i;
    wrap.appendChild(canvas);
    card.appendChild(wrap);
    new Chart(canvas, chartConfig(chart));
  }
  chartsEl.appendChild(card);
});

function chartTitle(chart) {
  return chart.title || '';
}

function chartConfig(chart) {
  switch (chart.kind) {
    case 'histogram': return histogramConfig(chart);
    case 'category_mix': return categoryConfig(chart);
    case 'box_by_period': return boxConfig(chart);
    case 'trend_line': return trendConfig(chart);
  }
}

function axisType(log) { return log ? 'logarithmic' : 'linear'; }

function histogramConfig(chart) {
  const points = chart.bins.map(b => ({ x: (b.left + b.right) / 2, y: b.count }));
  return {
    type: 'bar',
    data: { datasets: [{ data: points, backgroundColor: PALETTE[0] }] },
    options: {
      maintainAspectRatio: false,
      plugins: { legend: { display: false } },
      scales: {
        x: { type: axisType(chart.log_x) },
        y: { type: axisType(chart.log_y), beginAtZero: !chart.log_y }
      }
    }
  };
}

function categoryConfig(chart) {
  const labels = chart.slices.map(s => s.label);
  const values = chart.slices.map(s => s.value);
  if (chart.as_bar) {
    return {
      type: 'bar',
      data: { labels, datasets: [{ data: values, backgroundColor: PALETTE[0] }] },
      options: {
        maintainAspectRatio: false,
        plugins: { legend: { display: false } },
        scales: { y: { beginAtZero: true } }
      }
    };
  }
  return {
    type: 'doughnut',
    data: { labels, datasets: [{ data: values, backgroundColor: labels.map((_, i) => PALETTE[i % PALETTE.length]) }] },
    options: { maintainAspectRatio: false, cutout: '35%' }
  };
}

function boxConfig(chart) {
  const periods = [...new Set(chart.groups.map(g => g.period))];
  const categories = [...new Set(chart.groups.map(g => g.category ?? null))];
  const datasets = categories.map((cat, ci) => ({
    label: cat ?? 'Metric',
    backgroundColor: PALETTE[ci % PALETTE.length] + '88',
    borderColor: PALETTE[ci % PALETTE.length],
    data: periods.map(p => {
      const g = chart.groups.find(g => g.period === p && (g.category ?? null) === cat);
      return g ? { min: g.summary.min, q1: g.summary.q1, median: g.summary.median,
                   q3: g.summary.q3, max: g.summary.max } : null;
    })
  }));
  return {
    type: 'boxplot',
    data: { labels: periods, datasets },
    options: {
      maintainAspectRatio: false,
      plugins: { legend: { display: categories.length > 1 } }
    }
  };
}

function trendConfig(chart) {
  return {
    type: 'line',
    data: {
      labels: chart.points.map(p => p.period),
      datasets: [{
        data: chart.points.map(p => p.value),
        borderColor: PALETTE[0],
        backgroundColor: PALETTE[0],
        pointRadius: 3,
        tension: 0
      }]
    },
    options: {
      maintainAspectRatio: false,
      plugins: { legend: { display: false } },
      scales: { y: { beginAtZero: true } }
    }
  };
}
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Dashboard;
    use crate::roles::guess_roles;

    fn sample_result() -> ViewResult {
        let dashboard = Dashboard::new();
        let table = dashboard.load_sample();
        let roles = guess_roles(&table.headers);
        dashboard.render(&table, &roles).unwrap()
    }

    #[test]
    fn test_report_is_self_contained() {
        let html = render_html(&sample_result(), "sample (300 rows × 4 cols)").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("sample (300 rows × 4 cols)"));
        assert!(html.contains("const VIEW = {"));
        // No leftover placeholders.
        assert!(!html.contains("__VIZKIT_"));
    }

    #[test]
    fn test_report_embeds_all_charts() {
        let html = render_html(&sample_result(), "sample").unwrap();
        for kind in ["histogram", "category_mix", "box_by_period", "trend_line"] {
            assert!(html.contains(&format!("\"kind\":\"{}\"", kind)), "missing {}", kind);
        }
    }

    #[test]
    fn test_caption_is_escaped() {
        let html = render_html(&sample_result(), "<script>alert(1)</script>").unwrap();
        assert!(!html.contains("<script>alert"));
    }
}
