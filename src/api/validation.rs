use crate::core::{Plot, Series};
use crate::error::{ChartError, ChartResult};

use super::{ChartConfig, ChartKind};

pub(super) fn validate_chart_config(config: ChartConfig) -> ChartResult<ChartConfig> {
    if !config.size.is_valid() {
        return Err(ChartError::InvalidSize {
            width: config.size.width,
            height: config.size.height,
        });
    }

    let endpoint = config.endpoint.trim();
    if endpoint.is_empty() {
        return Err(ChartError::InvalidData(
            "endpoint must not be empty".to_owned(),
        ));
    }
    if endpoint.contains(['?', '&', '#']) {
        return Err(ChartError::InvalidData(format!(
            "endpoint must not carry a query or fragment: `{endpoint}`"
        )));
    }

    Ok(config)
}

pub(super) fn ensure_kind(
    kind: ChartKind,
    supported: bool,
    what: &str,
) -> ChartResult<()> {
    if supported {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} is not supported by {kind:?} charts"
        )))
    }
}

pub(super) fn validate_plot(kind: ChartKind, plot: &Plot) -> ChartResult<()> {
    ensure_kind(kind, !kind.is_pie(), "plot")?;

    match (kind.requires_xy(), plot.x_series()) {
        (true, None) => Err(ChartError::InvalidData(format!(
            "{kind:?} charts need plots with x coordinates"
        ))),
        (true, Some(x_series)) if x_series.len() != plot.series().len() => {
            Err(ChartError::InvalidData(format!(
                "x series has {} values but y series has {}",
                x_series.len(),
                plot.series().len()
            )))
        }
        (false, Some(_)) => Err(ChartError::InvalidData(format!(
            "{kind:?} charts do not take x coordinates"
        ))),
        _ => Ok(()),
    }
}

pub(super) fn validate_point_sizes(plots: &[Plot], sizes: Series) -> ChartResult<Series> {
    let Some(plot) = plots.first() else {
        return Err(ChartError::InvalidData(
            "point sizes need a scatter plot first".to_owned(),
        ));
    };
    if sizes.len() != plot.series().len() {
        return Err(ChartError::InvalidData(format!(
            "{} point sizes for {} points",
            sizes.len(),
            plot.series().len()
        )));
    }
    Ok(sizes)
}

pub(super) fn validate_bar_width(width: u32) -> ChartResult<u32> {
    if width == 0 {
        return Err(ChartError::InvalidData("bar width must be > 0".to_owned()));
    }
    Ok(width)
}

pub(super) fn validate_orientation(radians: f64) -> ChartResult<f64> {
    if !radians.is_finite() {
        return Err(ChartError::InvalidData(
            "pie orientation must be finite".to_owned(),
        ));
    }
    Ok(radians)
}
