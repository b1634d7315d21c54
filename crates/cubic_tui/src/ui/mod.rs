//! Stateless UI rendering.

mod board;

pub use board::{BoardGeometry, render_board};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::app::App;

/// Screen regions of the play view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// Title banner.
    pub title: Rect,
    /// Cube layers.
    pub board: Rect,
    /// Turn and result messages.
    pub status: Rect,
    /// Key reference.
    pub help: Rect,
}

/// Splits the frame into its regions.
pub fn areas(area: Rect) -> Areas {
    let [title, board, status, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);
    Areas {
        title,
        board,
        status,
        help,
    }
}

/// Board geometry for a terminal of `area`, as drawn by [`draw`].
pub fn board_geometry(area: Rect, app: &App) -> BoardGeometry {
    BoardGeometry::new(areas(area).board, app.interaction().engine().size())
}

/// Renders the whole play view.
pub fn draw(f: &mut Frame, app: &App) {
    let areas = areas(f.area());
    let size = app.interaction().engine().size();

    let title = Paragraph::new(format!("Cubic Tic-Tac-Toe {0}×{0}×{0}", size))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, areas.title);

    render_board(f, areas.board, app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::bordered());
    f.render_widget(status, areas.status);

    let help = Paragraph::new("←↓↑→/hjkl move  [ ] layer  enter place  r reset  +/- size  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, areas.help);
}
