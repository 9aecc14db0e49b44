use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Scorecard metadata for the hole being played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInfo {
    pub name: String,
    pub current_hole: u8,
    pub total_holes: u8,
    pub par: u32,
}

/// A playable hole: terrain plus the cell the ball is teed up on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCourse")]
pub struct Course {
    info: CourseInfo,
    terrain: TerrainGrid,
    tee: Coord2,
}

/// Unchecked wire form of [`Course`].
#[derive(Deserialize)]
struct RawCourse {
    info: CourseInfo,
    terrain: TerrainGrid,
    tee: Coord2,
}

impl TryFrom<RawCourse> for Course {
    type Error = GameError;

    fn try_from(raw: RawCourse) -> Result<Self> {
        Course::new(raw.info, raw.terrain, Some(raw.tee))
    }
}

impl Course {
    /// Tees up on the Start cell, or on `tee` when the layout has none.
    pub fn new(info: CourseInfo, terrain: TerrainGrid, tee: Option<Coord2>) -> Result<Self> {
        let tee = match (terrain.start(), tee) {
            (Some(start), None) => start,
            (Some(start), Some(tee)) if start == tee => start,
            (Some(_), Some(_)) => return Err(GameError::InvalidTee),
            (None, Some(tee)) => tee,
            (None, None) => return Err(GameError::MissingTee),
        };

        match terrain.cell_at(tee) {
            Ok(CellKind::Water | CellKind::Tree | CellKind::Hole) | Err(_) => {
                Err(GameError::InvalidTee)
            }
            Ok(_) => Ok(Self { info, terrain, tee }),
        }
    }

    pub fn info(&self) -> &CourseInfo {
        &self.info
    }

    pub fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    pub fn tee(&self) -> Coord2 {
        self.tee
    }

    pub fn par(&self) -> u32 {
        self.info.par
    }
}

const PAPER_GOLF_LAYOUT: [&str; 10] = [
    "..........",
    "...===..S.",
    "...===T...",
    "..:===....",
    "...===....",
    "..~~==....",
    "..T===....",
    "...===:...",
    "...=O=....",
    "..........",
];

impl Default for Course {
    fn default() -> Self {
        CourseConfig::default()
            .into_course()
            .unwrap_or_else(|err| panic!("built-in course is invalid: {err}"))
    }
}

/// Serializable description of a course, usually read from a config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    pub name: String,
    pub hole: u8,
    pub total_holes: u8,
    pub par: u32,
    pub layout: Vec<String>,
    pub tee: Option<Coord2>,
}

impl CourseConfig {
    pub fn into_course(self) -> Result<Course> {
        let terrain = TerrainGrid::from_rows(&self.layout)?;
        let info = CourseInfo {
            name: self.name,
            current_hole: self.hole,
            total_holes: self.total_holes,
            par: self.par,
        };
        Course::new(info, terrain, self.tee)
    }
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            name: "Paper Golf".into(),
            hole: 1,
            total_holes: 9,
            par: 6,
            layout: PAPER_GOLF_LAYOUT.iter().map(|&row| row.into()).collect(),
            tee: None,
        }
    }
}
