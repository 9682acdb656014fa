use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tictactoe_engine::{BotType, GameStatus};

pub const REPORT_FILE_EXTENSION: &str = "yaml";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameOutcome {
    pub game: u32,
    pub status: GameStatus,
    pub moves: u32,
    pub final_board: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RunReport {
    pub seed: u64,
    pub games: u32,
    pub x_bot: BotType,
    pub o_bot: BotType,
    pub random_opening: bool,
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
    pub outcomes: Vec<GameOutcome>,
}

pub fn generate_report_filename() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    format!("{}_TICTACTOE.{}", timestamp, REPORT_FILE_EXTENSION)
}

pub fn save_report(location: &Path, report: &RunReport) -> Result<PathBuf, String> {
    std::fs::create_dir_all(location)
        .map_err(|e| format!("Failed to create report directory: {}", e))?;

    let path = location.join(generate_report_filename());
    let serialized = serde_yaml_ng::to_string(report)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;

    std::fs::write(&path, serialized).map_err(|e| format!("Failed to write report: {}", e))?;

    Ok(path)
}
