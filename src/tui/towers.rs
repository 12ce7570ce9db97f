//! Tower, disk and pointer drawing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use strictly_hanoi::{Disk, GameSession, TowerIndex};

const DISK_COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Rows the widget needs for `disks` disks: hover gap, pole, base, label, pointer.
pub fn required_height(disks: u8) -> u16 {
    u16::from(disks) + 6
}

/// Draws the three towers, their disks, the lifted disk and the pointer.
#[derive(Debug, Clone, Copy)]
pub struct TowersWidget<'a> {
    session: &'a GameSession,
}

impl<'a> TowersWidget<'a> {
    /// Creates a widget for the session's current state.
    pub fn new(session: &'a GameSession) -> Self {
        Self { session }
    }
}

impl Widget for TowersWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 4 || area.width < 9 {
            return;
        }
        let mut canvas = Canvas { area, buf };
        let pole_height = u16::from(self.session.disk_count().get()) + 1;
        let pointer_row = area.bottom() - 1;
        let label_row = area.bottom() - 2;
        let base_row = area.bottom() - 3;
        let pole_top = base_row.saturating_sub(pole_height);
        let hover_row = pole_top.checked_sub(2);

        canvas.put(
            area.left(),
            base_row,
            &"━".repeat(usize::from(area.width)),
            Style::default().fg(Color::White),
        );

        let selection = self.session.selection();
        for tower in TowerIndex::ALL {
            let center = column_center(area, tower);
            for row in pole_top..base_row {
                canvas.put(center, row, "┃", Style::default().fg(Color::DarkGray));
            }
            for (level, disk) in self.session.towers().stack(tower).iter().enumerate() {
                let Some(row) = (base_row - 1).checked_sub(level as u16) else {
                    break;
                };
                canvas.put_disk(center, row, disk);
            }

            match tower {
                TowerIndex::Start | TowerIndex::Finish => {
                    let label = tower.label();
                    let x = center.saturating_sub(label.len() as u16 / 2);
                    canvas.put(x, label_row, label, Style::default().fg(Color::Gray));
                }
                TowerIndex::Middle => {}
            }

            if selection.pointing_at() == tower {
                canvas.put(
                    center,
                    pointer_row,
                    "▲",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                );
                if let (Some(disk), Some(row)) = (selection.lifted(), hover_row) {
                    canvas.put_disk(center, row, &disk);
                }
            }
        }
    }
}

/// Horizontal center of a tower's column.
fn column_center(area: Rect, tower: TowerIndex) -> u16 {
    let column_width = area.width / 3;
    area.left() + column_width * tower.index() as u16 + column_width / 2
}

/// Bounds-checked writes into the widget's area.
struct Canvas<'b> {
    area: Rect,
    buf: &'b mut Buffer,
}

impl Canvas<'_> {
    fn put(&mut self, x: u16, y: u16, text: &str, style: Style) {
        if y < self.area.top() || y >= self.area.bottom() || x < self.area.left() {
            return;
        }
        let Some(room) = self.area.right().checked_sub(x) else {
            return;
        };
        self.buf.set_stringn(x, y, text, usize::from(room), style);
    }

    fn put_disk(&mut self, center: u16, y: u16, disk: &Disk) {
        let size = disk.size();
        let half = u16::from(size);
        let width = usize::from(size) * 2 + 1;
        let color = DISK_COLORS[usize::from(size.saturating_sub(1)) % DISK_COLORS.len()];
        let text = format!("{:█^width$}", size, width = width);
        self.put(
            center.saturating_sub(half),
            y,
            &text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );
    }
}
