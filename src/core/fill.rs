use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::primitives::format_number;
use crate::error::{ChartError, ChartResult};

/// Region a fill is painted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillTarget {
    Background,
    ChartArea,
}

impl FillTarget {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Background => "bg",
            Self::ChartArea => "c",
        }
    }
}

/// Color stop; `position` is a percentage (gradient offset or stripe width).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillStop {
    pub color: Color,
    pub position: u8,
}

impl FillStop {
    pub fn new(color: Color, position: u8) -> ChartResult<Self> {
        if position > 100 {
            return Err(ChartError::InvalidData(format!(
                "fill stop percentage must be in [0, 100], got {position}"
            )));
        }
        Ok(Self { color, position })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    Solid(Color),
    LinearGradient { angle: f64, stops: Vec<FillStop> },
    LinearStripes { angle: f64, stops: Vec<FillStop> },
}

impl Fill {
    pub fn linear_gradient(angle: f64, stops: Vec<FillStop>) -> ChartResult<Self> {
        validate_pattern(angle, &stops, "gradient")?;
        Ok(Self::LinearGradient { angle, stops })
    }

    pub fn linear_stripes(angle: f64, stops: Vec<FillStop>) -> ChartResult<Self> {
        validate_pattern(angle, &stops, "stripes")?;
        Ok(Self::LinearStripes { angle, stops })
    }

    /// Renders one `chf` entry, e.g. `bg,s,FFFFFF` or `c,lg,90,FF0000,0,0000FF,1`.
    #[must_use]
    pub fn render(&self, target: FillTarget) -> String {
        let (kind, angle, stops) = match self {
            Self::Solid(color) => return format!("{},s,{color}", target.code()),
            Self::LinearGradient { angle, stops } => ("lg", angle, stops),
            Self::LinearStripes { angle, stops } => ("ls", angle, stops),
        };

        let mut out = format!("{},{kind},{}", target.code(), format_number(*angle));
        for stop in stops {
            out.push_str(&format!(
                ",{},{}",
                stop.color,
                format_number(f64::from(stop.position) / 100.0)
            ));
        }
        out
    }
}

fn validate_pattern(angle: f64, stops: &[FillStop], what: &str) -> ChartResult<()> {
    if !angle.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{what} angle must be finite"
        )));
    }
    if stops.is_empty() {
        return Err(ChartError::InvalidData(format!(
            "{what} needs at least one color stop"
        )));
    }
    Ok(())
}
