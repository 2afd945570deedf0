use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Park {
    Land,
    Sea,
}

impl Park {
    pub fn as_wire(&self) -> &'static str {
        match self {
            Park::Land => "land",
            Park::Sea => "sea",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Park::Land => "ディズニーランド",
            Park::Sea => "ディズニーシー",
        }
    }
}

/// The closed set of shows the calendar knows about.
///
/// Variant order is the order the show selector lists them in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShowCode {
    CMB,
    MMW,
    BBB,
    DTF,
}

impl ShowCode {
    pub const ALL: [ShowCode; 4] = [ShowCode::CMB, ShowCode::MMW, ShowCode::BBB, ShowCode::DTF];

    pub fn from_code(code: &str) -> Option<ShowCode> {
        match code {
            "BBB" => Some(ShowCode::BBB),
            "MMW" => Some(ShowCode::MMW),
            "CMB" => Some(ShowCode::CMB),
            "DTF" => Some(ShowCode::DTF),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ShowCode::BBB => "BBB",
            ShowCode::MMW => "MMW",
            ShowCode::CMB => "CMB",
            ShowCode::DTF => "DTF",
        }
    }

    pub fn park(&self) -> Park {
        match self {
            ShowCode::BBB | ShowCode::DTF => Park::Sea,
            ShowCode::CMB | ShowCode::MMW => Park::Land,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShowCode::BBB => "ビッグバンドビート～ア・スペシャルトリート～",
            ShowCode::MMW => "ミッキーのマジカルミュージックワールド",
            ShowCode::CMB => "クラブマウスビート",
            ShowCode::DTF => "ドリームス・テイク・フライト",
        }
    }

    /// Short card title, one entry per rendered line.
    pub fn short_name_lines(&self) -> &'static [&'static str] {
        match self {
            ShowCode::BBB => &["ビッグバンドビート", "～ア・スペシャルトリート～"],
            ShowCode::MMW => &["ミッキーのマジカルミュージックワールド"],
            ShowCode::CMB => &["クラブマウスビート"],
            ShowCode::DTF => &["ドリームス・テイク・フライト"],
        }
    }
}

impl fmt::Display for ShowCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Park of a raw show-code key; `None` for codes outside the known set.
pub fn park_of(code: &str) -> Option<Park> {
    ShowCode::from_code(code).map(|c| c.park())
}
