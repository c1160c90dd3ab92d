use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SumMethod {
    #[default]
    Loop,
    Formula,
    Fold,
}

impl SumMethod {
    pub const ALL: [SumMethod; 3] = [SumMethod::Loop, SumMethod::Formula, SumMethod::Fold];
}

impl fmt::Display for SumMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SumMethod::Loop => "loop",
            SumMethod::Formula => "formula",
            SumMethod::Fold => "fold",
        };
        f.write_str(name)
    }
}

impl FromStr for SumMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "loop" => Ok(SumMethod::Loop),
            "formula" => Ok(SumMethod::Formula),
            "fold" | "reduce" => Ok(SumMethod::Fold),
            other => Err(format!("unknown summation method: {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summation {
    pub n: i64,
    pub method: SumMethod,
    pub expression: String,
    pub sum: i64,
}

#[derive(Debug, Deserialize)]
pub struct SumQuery {
    pub method: Option<String>,
}
