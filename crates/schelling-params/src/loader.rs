//! Parameter file loader.
//!
//! # File format
//!
//! One `key: value` pair per line.  Whitespace around keys and values is
//! ignored; blank lines are skipped.
//!
//! ```text
//! width: 20
//! height: 20
//! occupation_percentage: 0.8
//! discr_attr_percentage: 0.5
//! discrimination_rate: 0.4
//! ```
//!
//! A value containing a `.` is read as a float, anything else as an integer.
//! `width` and `height` must be integers; the three rates accept either.
//!
//! | Key                     | `CityConfig` field  |
//! |-------------------------|---------------------|
//! | `width`                 | `width`             |
//! | `height`                | `height`            |
//! | `occupation_percentage` | `occupation_rate`   |
//! | `discr_attr_percentage` | `category_a_split`  |
//! | `discrimination_rate`   | `tolerance`         |
//!
//! Any line that is not exactly one `key: value` pair, or whose value does not
//! parse, fails the whole file.  Unknown keys are logged and ignored; when a
//! key repeats, the last occurrence wins.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

use schelling_core::{CityConfig, ConfigError};

use crate::{ParamError, ParamResult};

/// Recognised parameter keys.
pub mod keys {
    pub const WIDTH:                 &str = "width";
    pub const HEIGHT:                &str = "height";
    pub const OCCUPATION_PERCENTAGE: &str = "occupation_percentage";
    pub const DISCR_ATTR_PERCENTAGE: &str = "discr_attr_percentage";
    pub const DISCRIMINATION_RATE:   &str = "discrimination_rate";

    pub const ALL: [&str; 5] = [
        WIDTH,
        HEIGHT,
        OCCUPATION_PERCENTAGE,
        DISCR_ATTR_PERCENTAGE,
        DISCRIMINATION_RATE,
    ];
}

// ── ParamValue ────────────────────────────────────────────────────────────────

/// A parsed value: integer unless the text contained a `.`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
}

impl ParamValue {
    fn parse(text: &str) -> Result<ParamValue, String> {
        if text.contains('.') {
            text.parse::<f64>()
                .map(ParamValue::Float)
                .map_err(|e| format!("invalid float {text:?}: {e}"))
        } else {
            text.parse::<i64>()
                .map(ParamValue::Int)
                .map_err(|e| format!("invalid integer {text:?}: {e}"))
        }
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            ParamValue::Int(i)   => i as f64,
            ParamValue::Float(f) => f,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(i)   => write!(f, "{i}"),
            ParamValue::Float(x) => write!(f, "{x}"),
        }
    }
}

// ── ParamSet ──────────────────────────────────────────────────────────────────

/// All `key: value` pairs read from one file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamSet {
    values: BTreeMap<String, ParamValue>,
}

impl ParamSet {
    /// Parse every line of `reader`.
    pub fn parse<R: Read>(reader: R) -> ParamResult<ParamSet> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b':')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut values = BTreeMap::new();
        for result in rdr.records() {
            let record = result.map_err(csv_error)?;
            let line = record.position().map_or(0, csv::Position::line);

            if record.len() != 2 {
                return Err(ParamError::Parse {
                    line,
                    message: format!("expected `key: value`, found {} field(s)", record.len()),
                });
            }
            let value = ParamValue::parse(&record[1])
                .map_err(|message| ParamError::Parse { line, message })?;
            values.insert(record[0].to_owned(), value);
        }
        Ok(ParamSet { values })
    }

    pub fn get(&self, key: &str) -> Option<ParamValue> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Map the five recognised keys onto a validated [`CityConfig`].
    pub fn to_city_config(&self) -> ParamResult<CityConfig> {
        for (key, value) in self.values.iter().filter(|(k, _)| !keys::ALL.contains(&k.as_str())) {
            tracing::warn!(key = %key, value = %value, "ignoring unknown parameter");
        }

        let config = CityConfig {
            width:            self.dimension(keys::WIDTH)?,
            height:           self.dimension(keys::HEIGHT)?,
            occupation_rate:  self.require(keys::OCCUPATION_PERCENTAGE)?.as_f64(),
            category_a_split: self.require(keys::DISCR_ATTR_PERCENTAGE)?.as_f64(),
            tolerance:        self.require(keys::DISCRIMINATION_RATE)?.as_f64(),
        };
        config.validate()?;
        Ok(config)
    }

    fn require(&self, key: &'static str) -> ParamResult<ParamValue> {
        self.get(key).ok_or(ParamError::MissingKey(key))
    }

    fn dimension(&self, key: &'static str) -> ParamResult<u32> {
        match self.require(key)? {
            ParamValue::Float(value) => Err(ParamError::NotInteger { key, value }),
            ParamValue::Int(value) => u32::try_from(value)
                .ok()
                .filter(|&v| v > 0)
                .ok_or(ParamError::Config(ConfigError::InvalidDimension { what: key, value })),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a [`CityConfig`] from a parameter file.
pub fn load_params_file(path: &Path) -> ParamResult<CityConfig> {
    let file = std::fs::File::open(path)?;
    load_params_reader(file)
}

/// Like [`load_params_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded defaults.
pub fn load_params_reader<R: Read>(reader: R) -> ParamResult<CityConfig> {
    let params = ParamSet::parse(reader)?;
    tracing::debug!(keys = params.len(), "parameter file parsed");
    params.to_city_config()
}

/// Write `config` in the parameter file format, so a generated configuration
/// can be saved and replayed.
pub fn write_params<W: Write>(config: &CityConfig, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "{}: {}", keys::WIDTH, config.width)?;
    writeln!(writer, "{}: {}", keys::HEIGHT, config.height)?;
    writeln!(writer, "{}: {}", keys::OCCUPATION_PERCENTAGE, config.occupation_rate)?;
    writeln!(writer, "{}: {}", keys::DISCR_ATTR_PERCENTAGE, config.category_a_split)?;
    writeln!(writer, "{}: {}", keys::DISCRIMINATION_RATE, config.tolerance)?;
    writer.flush()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn csv_error(e: csv::Error) -> ParamError {
    let line = e.position().map_or(0, csv::Position::line);
    let message = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(io) => ParamError::Io(io),
        _ => ParamError::Parse { line, message },
    }
}
