// File: crates/demo/src/main.rs
// Summary: Demo loads a chart config and a CSV of marker pairs, then prints chart positions,
// DMS readouts and the bearing for each pair.
//
// Usage: mercator-demo [pairs.csv] [chart.json]
// Without a CSV the chart's default markers are reported. Without a config the bundled
// world chart is used. Set RUST_LOG=debug for config/layout events.

use anyhow::{Context, Result};
use mercator_core::{Chart, ChartConfig, GeoPoint, MarkerId};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let pairs_arg = args.next();
    let config_arg = args.next();

    let config = match &config_arg {
        Some(raw) => {
            let path = resolve_path(raw)?;
            ChartConfig::load(&path).with_context(|| format!("failed to load chart config '{}'", path.display()))?
        }
        None => ChartConfig::world(),
    };
    info!(src = %config.src, "using chart");

    let mut chart = Chart::new(config).context("chart config rejected")?;

    let pairs = match &pairs_arg {
        Some(raw) => {
            let path = resolve_path(raw)?;
            let pairs = load_pairs_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            info!(rows = pairs.len(), path = %path.display(), "loaded marker pairs");
            if pairs.is_empty() {
                anyhow::bail!("no marker pairs loaded; expected from_long,from_lat,to_long,to_lat columns");
            }
            pairs
        }
        None => vec![(chart.marker(MarkerId::A), chart.marker(MarkerId::B))],
    };

    for (i, (from, to)) in pairs.into_iter().enumerate() {
        chart.set_marker(MarkerId::A, from);
        chart.set_marker(MarkerId::B, to);
        report(i, &chart);
    }
    Ok(())
}

fn report(row: usize, chart: &Chart) {
    let a = chart.marker_position(MarkerId::A);
    let b = chart.marker_position(MarkerId::B);
    let r = chart.readout();
    println!(
        "#{row}: {} {} @ ({:.1}, {:.1}) -> {} {} @ ({:.1}, {:.1})  bearing {} ({:.4})",
        r.from_lat, r.from_long, a.x, a.y, r.to_lat, r.to_long, b.x, b.y, r.bearing, chart.bearing(),
    );
}

/// Resolve a path relative to the working directory, falling back to the crate directory.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    let alt = Path::new(env!("CARGO_MANIFEST_DIR")).join(raw);
    if alt.exists() {
        return Ok(alt);
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load marker pairs from a CSV with a header row.
fn load_pairs_csv(path: &Path) -> Result<Vec<(GeoPoint, GeoPoint)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.iter().any(|want| h == want))
    };

    let i_from_long = idx(&["from_long", "from_lon", "long1", "lon1"]);
    let i_from_lat = idx(&["from_lat", "lat1"]);
    let i_to_long = idx(&["to_long", "to_lon", "long2", "lon2"]);
    let i_to_lat = idx(&["to_lat", "lat2"]);

    let (Some(i_from_long), Some(i_from_lat), Some(i_to_long), Some(i_to_lat)) =
        (i_from_long, i_from_lat, i_to_long, i_to_lat)
    else {
        anyhow::bail!("missing one of from_long/from_lat/to_long/to_lat in headers {:?}", headers);
    };

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.parse::<f64>().ok()) };
        match (parse(i_from_long), parse(i_from_lat), parse(i_to_long), parse(i_to_lat)) {
            (Some(fl), Some(fa), Some(tl), Some(ta)) => {
                out.push((GeoPoint::new(fl, fa), GeoPoint::new(tl, ta)));
            }
            _ => warn!(row = line + 1, "skipping row with unparsable coordinates"),
        }
    }
    Ok(out)
}
