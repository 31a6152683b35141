//! JSON wire shapes exchanged with the game service.
//!
//! Board snapshots come in as `{robots, targets, walls, size}`; solutions go
//! out as an ordered array of `{color, from_x, from_y, to_x, to_y}`. The same
//! move shape comes back in when a stored move log is replayed.
//!
//! Coordinates are read as signed integers so that negative or oversized
//! values surface as `MalformedBoard` rather than as a JSON type error.

use serde::{Deserialize, Serialize};

use crate::board::{
    Board, BoardError, Cell, Color, Direction, Move, Robot, RobotId, Target, TargetColor, Wall,
};

/// Errors that can occur while decoding wire data.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("unknown wall direction '{0}'")]
    UnknownDirection(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A board as delivered by the game-state query.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardSnapshot {
    pub robots: Vec<RobotEntry>,
    #[serde(default)]
    pub targets: Vec<TargetEntry>,
    #[serde(default)]
    pub walls: Vec<WallEntry>,
    #[serde(default)]
    pub size: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RobotEntry {
    pub id: String,
    pub color: String,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TargetEntry {
    pub color: String,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WallEntry {
    pub x: i64,
    pub y: i64,
    pub direction: String,
}

/// One move in the submission format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMove {
    pub color: String,
    pub from_x: i64,
    pub from_y: i64,
    pub to_x: i64,
    pub to_y: i64,
}

impl From<&Move> for WireMove {
    fn from(mv: &Move) -> Self {
        WireMove {
            color: mv.robot_color.name().to_string(),
            from_x: mv.from.x.into(),
            from_y: mv.from.y.into(),
            to_x: mv.to.x.into(),
            to_y: mv.to.y.into(),
        }
    }
}

impl WireMove {
    /// Converts back into a `Move` on a board of side `size`.
    pub fn to_move(&self, size: u8) -> Result<Move, WireError> {
        let robot_color = parse_color(&self.color)?;
        let from = cell(self.from_x, self.from_y, size)?;
        let to = cell(self.to_x, self.to_y, size)?;
        if from == to {
            return Err(BoardError::MalformedBoard(format!(
                "{} move from {} to itself",
                self.color, from
            ))
            .into());
        }
        Ok(Move {
            robot_color,
            from,
            to,
        })
    }
}

/// One stored move row, as read back for a finished round.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveRow {
    pub participant_id: String,
    #[serde(default)]
    pub username: Option<String>,
    pub robot_color: String,
    pub from_x: i64,
    pub from_y: i64,
    pub to_x: i64,
    pub to_y: i64,
    pub move_number: u32,
}

/// All moves one player made in a round, in play order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerMoves {
    pub participant_id: String,
    pub username: Option<String>,
    pub moves: Vec<Move>,
}

fn parse_color(s: &str) -> Result<Color, WireError> {
    Color::from_name(s).ok_or_else(|| WireError::UnknownColor(s.to_string()))
}

fn coordinate(v: i64, size: u8) -> Result<u8, BoardError> {
    u8::try_from(v)
        .ok()
        .filter(|c| (1..=size).contains(c))
        .ok_or_else(|| {
            BoardError::MalformedBoard(format!(
                "coordinate {} outside [1, {}]",
                v, size
            ))
        })
}

fn cell(x: i64, y: i64, size: u8) -> Result<Cell, BoardError> {
    Ok(Cell::new(coordinate(x, size)?, coordinate(y, size)?))
}

impl BoardSnapshot {
    /// Validates the snapshot and builds a `Board`. `default_size` applies
    /// when the snapshot carries no size.
    pub fn into_board(self, default_size: u8) -> Result<Board, WireError> {
        let size = match self.size {
            Some(s) => u8::try_from(s).ok().filter(|&s| s > 0).ok_or_else(|| {
                BoardError::MalformedBoard(format!("unsupported board size {}", s))
            })?,
            None => default_size,
        };

        let robots = self
            .robots
            .into_iter()
            .map(|r| {
                Ok(Robot {
                    color: parse_color(&r.color)?,
                    position: cell(r.x, r.y, size)?,
                    id: RobotId(r.id),
                })
            })
            .collect::<Result<Vec<_>, WireError>>()?;

        let targets = self
            .targets
            .into_iter()
            .map(|t| {
                let color = TargetColor::from_name(&t.color)
                    .ok_or_else(|| WireError::UnknownColor(t.color.clone()))?;
                Ok(Target {
                    position: cell(t.x, t.y, size)?,
                    color,
                })
            })
            .collect::<Result<Vec<_>, WireError>>()?;

        let walls = self
            .walls
            .into_iter()
            .map(|w| {
                let direction = Direction::from_name(&w.direction)
                    .ok_or_else(|| WireError::UnknownDirection(w.direction.clone()))?;
                Ok(Wall::new(cell(w.x, w.y, size)?, direction))
            })
            .collect::<Result<Vec<_>, WireError>>()?;

        Ok(Board::new(size, robots, targets, walls)?)
    }
}

/// Parses a board snapshot from JSON.
pub fn parse_board(json: &str, default_size: u8) -> Result<Board, WireError> {
    let snapshot: BoardSnapshot = serde_json::from_str(json)?;
    snapshot.into_board(default_size)
}

/// Encodes a solution as a JSON array.
pub fn encode_moves(moves: &[WireMove]) -> Result<String, WireError> {
    Ok(serde_json::to_string(moves)?)
}

/// Parses a JSON move log for a board of side `size`.
pub fn parse_moves(json: &str, size: u8) -> Result<Vec<Move>, WireError> {
    let wire: Vec<WireMove> = serde_json::from_str(json)?;
    wire.iter().map(|w| w.to_move(size)).collect()
}

/// Groups stored move rows by player.
///
/// Players appear in the order their first row appears; each player's moves
/// are sorted by `move_number`.
pub fn group_player_moves(rows: Vec<MoveRow>, size: u8) -> Result<Vec<PlayerMoves>, WireError> {
    let mut players: Vec<(PlayerMoves, Vec<(u32, Move)>)> = Vec::new();

    for row in rows {
        let mv = WireMove {
            color: row.robot_color,
            from_x: row.from_x,
            from_y: row.from_y,
            to_x: row.to_x,
            to_y: row.to_y,
        }
        .to_move(size)?;

        let idx = match players
            .iter()
            .position(|(p, _)| p.participant_id == row.participant_id)
        {
            Some(i) => i,
            None => {
                players.push((
                    PlayerMoves {
                        participant_id: row.participant_id,
                        username: row.username,
                        moves: Vec::new(),
                    },
                    Vec::new(),
                ));
                players.len() - 1
            }
        };
        players[idx].1.push((row.move_number, mv));
    }

    Ok(players
        .into_iter()
        .map(|(mut player, mut numbered)| {
            numbered.sort_by_key(|(n, _)| *n);
            player.moves = numbered.into_iter().map(|(_, mv)| mv).collect();
            player
        })
        .collect())
}
