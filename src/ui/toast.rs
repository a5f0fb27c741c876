use crate::app::App;
use crate::app::notifications::ToastKind;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_HEIGHT: u16 = 3;

/// Stacks notifications bottom-center, just above `anchor`
pub fn render_toasts(frame: &mut Frame, app: &App, anchor: Rect) {
    let mut bottom = anchor.y;

    for toast in app.notifications.visible().iter().rev() {
        if bottom < TOAST_HEIGHT {
            break;
        }
        bottom -= TOAST_HEIGHT;

        let (icon, color) = match toast.kind {
            ToastKind::Success => ("✔ ", Color::Green),
            ToastKind::Error => ("✖ ", Color::Red),
            ToastKind::Blank => ("", Color::White),
        };

        let width = (toast.message.chars().count() as u16 + icon.chars().count() as u16 + 4)
            .min(anchor.width);
        let area = Rect {
            x: anchor.x + (anchor.width - width) / 2,
            y: bottom,
            width,
            height: TOAST_HEIGHT,
        };

        let line = Line::from(vec![
            Span::styled(icon, Style::default().fg(color)),
            Span::raw(toast.message.as_str()),
        ]);
        let toast_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(toast_block);

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}
