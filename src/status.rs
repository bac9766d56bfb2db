use serde::{Deserialize, Serialize};

/// Cell colors for checked days, picked by habit position.
pub const HABIT_COLORS: [&str; 4] = ["#FDF2D0", "#BFDFCE", "#CCDAF5", "#D8D2E7"];

const MET_COLOR: &str = "#0ADB94";
const UNMET_COLOR: &str = "#FEFC47";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Met,
    Unmet,
}

impl Status {
    pub fn is_met(self) -> bool {
        self == Status::Met
    }

    pub fn color(self) -> &'static str {
        match self {
            Status::Met => MET_COLOR,
            Status::Unmet => UNMET_COLOR,
        }
    }
}

pub fn classify(checked: u32, goal: u32) -> Status {
    if checked >= goal {
        Status::Met
    } else {
        Status::Unmet
    }
}

pub fn habit_color(position: usize) -> &'static str {
    HABIT_COLORS[position % HABIT_COLORS.len()]
}
