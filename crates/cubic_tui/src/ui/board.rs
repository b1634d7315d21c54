//! Cube rendering: one bordered grid per layer, side by side.

use cubic_tictactoe::{Cell, Coord, GridSize, Mark, Picker};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::app::App;

/// Terminal columns per cell.
pub const CELL_WIDTH: u16 = 3;
/// Blank columns between layers.
pub const LAYER_GAP: u16 = 2;

/// Screen placement of every cell for a given area and size.
///
/// Rendering and mouse picking share this geometry, so a click lands on
/// the cell drawn under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    x: u16,
    y: u16,
    size: GridSize,
}

impl BoardGeometry {
    /// Centres the layers inside `area`.
    pub fn new(area: Rect, size: GridSize) -> Self {
        let layers = size.get() as u16;
        let total = layers * Self::layer_width(size) + (layers - 1) * LAYER_GAP;
        Self {
            x: area.x + area.width.saturating_sub(total) / 2,
            y: area.y + area.height.saturating_sub(Self::layer_height(size)) / 2,
            size,
        }
    }

    /// Width of one layer including its border.
    pub fn layer_width(size: GridSize) -> u16 {
        size.get() as u16 * CELL_WIDTH + 2
    }

    /// Height of one layer including its border.
    pub fn layer_height(size: GridSize) -> u16 {
        size.get() as u16 + 2
    }

    /// Bordered rectangle of `layer`.
    pub fn layer_rect(&self, layer: usize) -> Rect {
        let width = Self::layer_width(self.size);
        Rect::new(
            self.x + layer as u16 * (width + LAYER_GAP),
            self.y,
            width,
            Self::layer_height(self.size),
        )
    }

    /// Rectangle of the cell at `index`.
    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        let Coord { x, y, z } = Coord::from_index(index, self.size)?;
        let layer = self.layer_rect(y);
        Some(Rect::new(
            layer.x + 1 + x as u16 * CELL_WIDTH,
            layer.y + 1 + z as u16,
            CELL_WIDTH,
            1,
        ))
    }
}

impl Picker for BoardGeometry {
    type Pointer = (u16, u16);

    fn pick(&self, &(column, row): &(u16, u16)) -> Option<usize> {
        (0..self.size.cell_count()).find(|&index| {
            self.cell_rect(index).is_some_and(|r| {
                column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
            })
        })
    }
}

/// Renders every layer of the board.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let engine = app.interaction().engine();
    let size = engine.size();
    let geometry = BoardGeometry::new(area, size);

    for layer in 0..size.get() {
        let rect = geometry.layer_rect(layer).intersection(area);
        if rect.is_empty() {
            continue;
        }
        let title = if rect.width >= 11 {
            format!(" Layer {} ", layer)
        } else {
            format!(" {} ", layer)
        };
        let block = Block::bordered()
            .title(title)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(block, rect);
    }

    let winning = engine.win_result().map(|r| r.positions()).unwrap_or_default();
    let cursor = app.cursor().to_index(size);

    for (index, cell) in engine.board().cells().iter().enumerate() {
        let Some(rect) = geometry.cell_rect(index).map(|r| r.intersection(area)) else {
            continue;
        };
        if rect.is_empty() {
            continue;
        }

        let symbol = match cell {
            Cell::Empty => "·",
            Cell::Occupied(Mark::X) => "X",
            Cell::Occupied(Mark::O) => "O",
        };
        let text = if cursor == Some(index) {
            format!("[{}]", symbol)
        } else {
            format!(" {} ", symbol)
        };

        let mut style = match cell {
            Cell::Empty => Style::default().fg(Color::Gray),
            Cell::Occupied(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            Cell::Occupied(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };
        if app.interaction().highlighted() == Some(index) {
            style = style.bg(Color::Yellow).fg(Color::Black);
        }
        if winning.contains(&index) {
            style = style.bg(Color::Green);
        }

        let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
        f.render_widget(paragraph, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_centres_board() {
        let geometry = BoardGeometry::new(Rect::new(0, 0, 80, 20), GridSize::DEFAULT);
        // Three layers of 11 columns with two gaps of 2: 37 wide, 5 high.
        assert_eq!(geometry.layer_rect(0), Rect::new(21, 7, 11, 5));
        assert_eq!(geometry.layer_rect(2), Rect::new(47, 7, 11, 5));
    }

    #[test]
    fn test_cell_rects_follow_coordinates() {
        let geometry = BoardGeometry::new(Rect::new(0, 0, 80, 20), GridSize::DEFAULT);
        assert_eq!(geometry.cell_rect(0), Some(Rect::new(22, 8, 3, 1)));
        // Index 14: layer 1, row 1, column 2.
        assert_eq!(geometry.cell_rect(14), Some(Rect::new(41, 9, 3, 1)));
        assert_eq!(geometry.cell_rect(27), None);
    }

    #[test]
    fn test_pick_round_trips_through_rects() {
        for s in GridSize::MIN..=GridSize::MAX {
            let size = GridSize::new(s).unwrap();
            let geometry = BoardGeometry::new(Rect::new(0, 0, 120, 30), size);
            for index in 0..size.cell_count() {
                let rect = geometry.cell_rect(index).unwrap();
                assert_eq!(geometry.pick(&(rect.x + 1, rect.y)), Some(index));
            }
        }
    }

    #[test]
    fn test_pick_border_is_none() {
        let geometry = BoardGeometry::new(Rect::new(0, 0, 80, 20), GridSize::DEFAULT);
        let layer = geometry.layer_rect(0);
        assert_eq!(geometry.pick(&(layer.x, layer.y)), None);
        assert_eq!(geometry.pick(&(0, 0)), None);
    }
}
