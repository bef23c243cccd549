//! Surface that records draw calls instead of drawing

use super::{Color, Rect, Surface};

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect(Rect, Color),
    Present,
}

/// Records every call made on it, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames presented so far
    pub fn frames(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Present))
            .count()
    }

    /// Commands of the most recent presented frame (from its clear up to its present)
    pub fn last_frame(&self) -> &[DrawCommand] {
        let end = match self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Present))
        {
            Some(i) => i + 1,
            None => return &[],
        };
        let start = self.commands[..end]
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear(_)))
            .unwrap_or(0);
        &self.commands[start..end]
    }

    pub fn clear_log(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
    }
}
