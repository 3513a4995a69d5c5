//! Renders the study results as a single self-contained HTML page with
//! plotly.js charts: the simulated path fans and the convergence error curve.

use std::fmt::Write as _;

use pricing::simulation::Path;

use crate::AppResult;

/// How many paths the "few paths" panel overlays.
const FEW_PATHS: usize = 10;
/// Index of the path shown on its own in the single-path panel.
const REPRESENTATIVE_PATH: usize = 4;

pub fn render_html(
    paths: &[Path],
    sweep_path_counts: &[usize],
    price_diffs: &[f64],
) -> AppResult<String> {
    let nr_steps = paths.first().map(|path| path.len().saturating_sub(1));
    let days: Vec<usize> = (0..=nr_steps.unwrap_or(0)).collect();

    let mut all_traces = String::new();
    for path in paths {
        writeln!(
            &mut all_traces,
            "allTraces.push({{x:days,y:{},mode:'lines',line:{{width:1}},hoverinfo:'skip'}});",
            serde_json::to_string(path)?,
        )?;
    }

    let single_path = paths
        .get(REPRESENTATIVE_PATH)
        .or_else(|| paths.first())
        .cloned()
        .unwrap_or_default();

    let mut few_traces = String::new();
    for path in paths.iter().take(FEW_PATHS) {
        writeln!(
            &mut few_traces,
            "fewTraces.push({{x:days,y:{},mode:'lines',line:{{width:1.5}}}});",
            serde_json::to_string(path)?,
        )?;
    }

    let html = format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Monte Carlo vs Black-Scholes Convergence Study</title>
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
  <style>
    body {{
      margin: 0;
      background: #f5f6f8;
      color: #1f2937;
      font-family: "IBM Plex Sans", "Segoe UI", sans-serif;
      padding: 16px;
    }}
    .grid {{
      display: grid;
      grid-template-columns: 1fr;
      gap: 16px;
      max-width: 1400px;
      margin: 0 auto;
    }}
    .panel {{
      background: #ffffff;
      border: 1px solid #d1d5db;
      border-radius: 12px;
      padding: 12px;
    }}
    #all-paths, #single-path, #ten-paths, #convergence {{
      width: 100%;
      min-height: 420px;
    }}
    @media (min-width: 980px) {{
      .grid {{
        grid-template-columns: 1fr 1fr;
      }}
    }}
  </style>
</head>
<body>
  <div class="grid">
    <section class="panel"><div id="all-paths"></div></section>
    <section class="panel"><div id="single-path"></div></section>
    <section class="panel"><div id="ten-paths"></div></section>
    <section class="panel"><div id="convergence"></div></section>
  </div>
  <script>
    const days = {days};

    const allTraces = [];
{all_traces}
    Plotly.newPlot('all-paths', allTraces, {{
      title: 'Paths of All Simulations',
      xaxis: {{title: 'Number of Days From Start'}},
      yaxis: {{title: 'Underlying Asset Price'}},
      showlegend: false,
    }});

    Plotly.newPlot('single-path', [{{
      x: days,
      y: {single_path},
      mode: 'lines',
      line: {{color: 'black'}},
    }}], {{
      title: 'Path of Single Simulation',
      xaxis: {{title: 'Number of Days From Start'}},
      yaxis: {{title: 'Underlying Asset Price'}},
    }});

    const fewTraces = [];
{few_traces}
    Plotly.newPlot('ten-paths', fewTraces, {{
      title: 'Path of Ten Simulations',
      xaxis: {{title: 'Number of Days From Start'}},
      yaxis: {{title: 'Underlying Asset Price'}},
      showlegend: false,
    }});

    Plotly.newPlot('convergence', [{{
      x: {sweep},
      y: {diffs},
      mode: 'lines+markers',
      line: {{color: 'black'}},
    }}], {{
      title: 'Testing the Accuracy of the Monte Carlo Model Against Black-Scholes',
      xaxis: {{title: 'Number of Simulated Paths'}},
      yaxis: {{title: 'Difference Between Model Prices'}},
    }});
  </script>
</body>
</html>
"#,
        days = serde_json::to_string(&days)?,
        all_traces = all_traces,
        single_path = serde_json::to_string(&single_path)?,
        few_traces = few_traces,
        sweep = serde_json::to_string(sweep_path_counts)?,
        diffs = serde_json::to_string(price_diffs)?,
    );

    Ok(html)
}
