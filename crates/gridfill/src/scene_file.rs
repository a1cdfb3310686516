use std::{fs, path::Path};

use anyhow::Context;
use gridfill_engine::{Circle, FillRequest, FillStrategy, Grid, Line, Point, Scene};
use serde::{Deserialize, Serialize};

fn default_stroke_width() -> u32 {
    1
}

/// TOML description of a drawing session.
///
/// Primitives are drawn grouped by kind: points, then lines, then circles.
/// Fills run afterwards in file order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SceneFile {
    pub columns: i32,
    pub rows: i32,

    #[serde(default = "default_stroke_width")]
    pub stroke_width: u32,

    #[serde(default)]
    pub points: Vec<Point>,

    #[serde(default)]
    pub lines: Vec<Line>,

    #[serde(default)]
    pub circles: Vec<Circle>,

    #[serde(default)]
    pub fills: Vec<FillRequest>,
}

impl SceneFile {
    pub fn new(columns: i32, rows: i32) -> Self {
        Self {
            columns,
            rows,
            stroke_width: default_stroke_width(),
            points: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            fills: Vec::new(),
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let txt = fs::read_to_string(path).with_context(|| format!("Failed to read scene file '{}'", path.display()))?;
        Self::parse(&txt).with_context(|| format!("Invalid scene file '{}'", path.display()))
    }

    pub fn parse(txt: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Use `strategy` for every fill request.
    pub fn override_strategy(&mut self, strategy: FillStrategy) {
        for request in &mut self.fills {
            request.strategy = strategy;
        }
    }

    /// Create the empty grid and the scene to run on it.
    pub fn build(&self) -> gridfill_engine::Result<(Grid, Scene)> {
        let grid = Grid::new(self.columns, self.rows)?;

        let mut scene = Scene::new().with_stroke_width(self.stroke_width);
        for pt in &self.points {
            scene.add(*pt);
        }
        for line in &self.lines {
            scene.add(*line);
        }
        for circle in &self.circles {
            scene.add(*circle);
        }
        for request in &self.fills {
            scene.add_fill(*request);
        }
        Ok((grid, scene))
    }
}
