use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::case::SolverMode;

/// Still water level used when `REEF3D_SWL` is unset
pub const DEFAULT_SWL: f64 = 0.75;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {msg}")]
    InvalidVar { var: &'static str, msg: String },

    #[error("Invalid axis limits {0:?}, expected \"min,max\" or \"min,\"")]
    InvalidLimits(String),
}

/// Settings shared by every report
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub case_dir: PathBuf,
    pub mode: SolverMode,
    pub swl: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_dir: PathBuf::from("."),
            mode: SolverMode::Cfd,
            swl: DEFAULT_SWL,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            case_dir: env::var("REEF3D_CASE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            mode: match env::var("REEF3D_MODE") {
                Ok(value) => value.parse().map_err(|msg| ConfigError::InvalidVar {
                    var: "REEF3D_MODE",
                    msg,
                })?,
                Err(_) => SolverMode::Cfd,
            },
            swl: match env::var("REEF3D_SWL") {
                Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidVar {
                    var: "REEF3D_SWL",
                    msg: format!("{value:?} is not a number"),
                })?,
                Err(_) => DEFAULT_SWL,
            },
        })
    }
}

/// Parse `"min,max"` into a pair of numbers
pub fn parse_range(value: &str) -> Result<(f64, f64), ConfigError> {
    match parse_open_range(value)? {
        (lo, Some(hi)) => Ok((lo, hi)),
        (_, None) => Err(ConfigError::InvalidLimits(value.to_string())),
    }
}

/// Parse `"min,max"` or `"min,"`; an empty or `None` upper bound stays open
///
/// ```
/// use reef3d_post::config::parse_open_range;
///
/// assert_eq!(parse_open_range("5,50").unwrap(), (5.0, Some(50.0)));
/// assert_eq!(parse_open_range("5,").unwrap(), (5.0, None));
/// assert_eq!(parse_open_range("5, None").unwrap(), (5.0, None));
/// assert!(parse_open_range("5").is_err());
/// ```
pub fn parse_open_range(value: &str) -> Result<(f64, Option<f64>), ConfigError> {
    let invalid = || ConfigError::InvalidLimits(value.to_string());
    let (lo, hi) = value.split_once(',').ok_or_else(invalid)?;
    let lo: f64 = lo.trim().parse().map_err(|_| invalid())?;
    let hi = match hi.trim() {
        "" | "None" | "none" => None,
        text => Some(text.parse::<f64>().map_err(|_| invalid())?),
    };
    Ok((lo, hi))
}
