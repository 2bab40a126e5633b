// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use serde::Deserialize;

// Floats at or above this magnitude switch to exponent notation in browsers.
const MAX_PLAIN_INTEGER_FLOAT: f64 = 1e21;

/// Link speed as reported by the endpoint.
///
/// Endpoints send either a bare number (`1000`) or a preformatted string
/// (`"auto"`, `"10G"`), so both are accepted and displayed verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Speed {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speed::Integer(value) => write!(f, "{value}"),
            Speed::Float(value) => {
                if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_PLAIN_INTEGER_FLOAT {
                    // 1000.0 shows as "1000"; -0.0 as "0"
                    let whole = if *value == 0.0 { 0.0 } else { *value };
                    write!(f, "{whole:.0}")
                } else {
                    write!(f, "{value}")
                }
            }
            Speed::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Speed {
    fn from(value: i64) -> Self {
        Speed::Integer(value)
    }
}

impl From<&str> for Speed {
    fn from(value: &str) -> Self {
        Speed::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_integer() {
        assert_eq!(Speed::Integer(1000).to_string(), "1000");
        assert_eq!(Speed::Integer(-1).to_string(), "-1");
    }

    #[test]
    fn test_display_whole_float_as_integer() {
        assert_eq!(Speed::Float(1000.0).to_string(), "1000");
        assert_eq!(Speed::Float(-0.0).to_string(), "0");
    }

    #[test]
    fn test_display_fractional_float() {
        assert_eq!(Speed::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_display_text() {
        assert_eq!(Speed::from("auto").to_string(), "auto");
    }

    #[test]
    fn test_deserialize_variants() {
        let speeds: Vec<Speed> = serde_json::from_str(r#"[100, 2.5, 1000.0, "10G"]"#).unwrap();
        assert_eq!(
            speeds,
            vec![
                Speed::Integer(100),
                Speed::Float(2.5),
                Speed::Float(1000.0),
                Speed::Text("10G".to_string()),
            ]
        );
    }
}
