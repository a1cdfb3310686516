//! Built-in drawing sessions

use std::{fmt, str::FromStr};

use gridfill_engine::{Circle, FillRequest, FillStrategy, Line, Point};

use crate::scene_file::SceneFile;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Demo {
    /// Rectangle, diagonals, border lines and circles, filled by scanline
    Tutor,
    /// Four circles, each filled with a different strategy
    #[default]
    Circles,
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Demo::Tutor => write!(f, "tutor"),
            Demo::Circles => write!(f, "circles"),
        }
    }
}

impl FromStr for Demo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tutor" => Ok(Demo::Tutor),
            "circles" => Ok(Demo::Circles),
            _ => Err(format!("unknown demo '{s}', expected tutor or circles")),
        }
    }
}

impl Demo {
    pub fn scene_file(self) -> SceneFile {
        match self {
            Demo::Tutor => tutor(),
            Demo::Circles => circles(),
        }
    }
}

fn tutor() -> SceneFile {
    let mut file = SceneFile::new(30, 30);
    file.lines = [
        // rectangle
        ((5, 25), (25, 25)),
        ((5, 5), (25, 5)),
        ((5, 25), (5, 5)),
        ((25, 25), (25, 5)),
        // diagonals
        ((5, 5), (25, 25)),
        ((5, 25), (25, 5)),
        // border lines, the ones touching x or y = 30 are out of range
        ((0, 25), (5, 30)),
        ((30, 25), (25, 30)),
        ((0, 5), (5, 0)),
        ((30, 5), (25, 0)),
        // spokes of the inner circle
        ((9, 12), (21, 18)),
        ((9, 18), (21, 12)),
        ((12, 9), (18, 21)),
        ((18, 9), (12, 21)),
    ]
    .into_iter()
    .map(|(a, b)| Line::new(a, b))
    .collect();

    file.circles = vec![
        Circle::new((15, 15), 7),
        Circle::new((15, 25), 2),
        Circle::new((15, 5), 2),
        Circle::new((5, 15), 2),
        Circle::new((25, 15), 2),
    ];
    file.fills = vec![FillRequest::new((14, 12), FillStrategy::ScanlineSpan)];
    file
}

fn circles() -> SceneFile {
    let mut file = SceneFile::new(30, 30);
    let centers = [Point::new(7, 7), Point::new(21, 7), Point::new(7, 21), Point::new(21, 21)];
    file.circles = centers.iter().map(|c| Circle::new(*c, 5)).collect();
    file.fills = vec![
        FillRequest::new(centers[0], FillStrategy::Recursive),
        FillRequest::new(centers[1], FillStrategy::ScanlineSpan),
        FillRequest::new(centers[2], FillStrategy::BreadthFirstQueue),
        FillRequest::new(centers[3], FillStrategy::DepthFirstStack),
    ];
    file
}
