use super::Canvas;
use crate::math::Vec2;

/// One recorded drawing operation, in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Closed polygon outline; the last point connects back to the first.
    Polygon {
        points: Vec<Vec2>,
        color: u32,
        width: u32,
    },
    /// Filled reference dot.
    Marker {
        center: Vec2,
        radius: u32,
        color: u32,
    },
}

/// A canvas that records commands instead of touching pixels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Polygon commands only, in draw order.
    pub fn polygons(&self) -> impl Iterator<Item = &[Vec2]> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polygon { points, .. } => Some(points.as_slice()),
            DrawCommand::Marker { .. } => None,
        })
    }

    /// Replays every command onto another canvas.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for command in &self.commands {
            match command {
                DrawCommand::Polygon {
                    points,
                    color,
                    width,
                } => canvas.stroke_polygon(points, *color, *width),
                DrawCommand::Marker {
                    center,
                    radius,
                    color,
                } => canvas.fill_dot(*center, *radius, *color),
            }
        }
    }
}

impl Canvas for DrawList {
    fn stroke_polygon(&mut self, points: &[Vec2], color: u32, width: u32) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn fill_dot(&mut self, center: Vec2, radius: u32, color: u32) {
        self.commands.push(DrawCommand::Marker {
            center,
            radius,
            color,
        });
    }
}
