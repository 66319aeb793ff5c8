//! GameView: maps a [`RoundSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. The field already carries the
//! active piece and the ghost as stamped cells, so the view only has to
//! paint grids.

use crate::core::{Grid, RoundSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, GameOverChoice, PauseChoice, PieceKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Menu drawn on top of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuOverlay {
    #[default]
    None,
    Pause(PauseChoice),
    GameOver(GameOverChoice),
}

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const HELP: [(&str, &str); 6] = [
    ("←→", "move"),
    ("↑", "rotate"),
    ("↓", "down"),
    ("SPC", "drop"),
    ("P", "menu"),
    ("Q", "quit"),
];

pub struct GameView {
    /// Field cell width in terminal columns
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell keeps cells roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &RoundSnapshot,
        overlay: MenuOverlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let frame_w = snap.field.cols() as u16 * self.cell_w + 2;
        let frame_h = snap.field.rows() as u16 + 2;
        let panel_w = PANEL_W;
        let total_w = frame_w + 2 + panel_w;

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        self.draw_grid(fb, &snap.field, start_x + 1, start_y + 1, true);

        let panel_x = start_x + frame_w + 2;
        self.draw_side_panel(fb, snap, panel_x, start_y);

        match overlay {
            MenuOverlay::None => {}
            MenuOverlay::Pause(selected) => {
                let entries = PauseChoice::ALL.map(|c| (c.label(), c == selected));
                draw_menu(fb, start_x, start_y, frame_w, frame_h, "PAUSED", &entries);
            }
            MenuOverlay::GameOver(selected) => {
                let entries = GameOverChoice::ALL.map(|c| (c.label(), c == selected));
                draw_menu(fb, start_x, start_y, frame_w, frame_h, "GAME OVER", &entries);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RoundSnapshot, overlay: MenuOverlay, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    /// Paint every cell of `grid` with its top-left corner at (x, y)
    fn draw_grid(&self, fb: &mut FrameBuffer, grid: &Grid, x: u16, y: u16, dots: bool) {
        for (r, row) in grid.iter_rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Cell::Block(kind) => ('█', CellStyle::new(kind_color(*kind), FIELD_BG).bold()),
                    Cell::Ghost => ('░', CellStyle::new(Rgb::new(140, 140, 140), FIELD_BG).dim()),
                    Cell::Empty if dots => ('·', CellStyle::new(Rgb::new(90, 90, 100), FIELD_BG).dim()),
                    Cell::Empty => (' ', CellStyle::new(FIELD_BG, PANEL_BG)),
                };
                let px = x + c as u16 * self.cell_w;
                fb.fill_rect(px, y + r as u16, self.cell_w, 1, ch, style);
            }
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &RoundSnapshot, x: u16, y: u16) {
        if x >= fb.width() {
            return;
        }
        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = y;
        fb.put_str(x, y, "NEXT", label);
        y += 1;
        self.draw_grid(fb, &snap.preview, x, y, false);
        y += snap.preview.rows() as u16 + 1;

        for (name, number) in [
            ("LEVEL", snap.level),
            ("SCORE", snap.score),
            ("ROWS", snap.cleared_rows),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, number, value);
            y += 3;
        }

        fb.put_str(x, y, "GHOST", label);
        if snap.ghost_enabled {
            fb.put_str(x, y + 1, "ON", value);
        } else {
            fb.put_str(x, y + 1, "OFF  x2", value);
        }
        y += 3;

        for (key, action) in HELP {
            fb.put_str(x, y, key, label);
            fb.put_str(x + 4, y, action, hint);
            y += 1;
        }
    }
}

/// Width reserved right of the field for the side panel
const PANEL_W: u16 = 12;

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Boxed menu centred on the field; the selected entry is marked and bold
fn draw_menu(
    fb: &mut FrameBuffer,
    field_x: u16,
    field_y: u16,
    field_w: u16,
    field_h: u16,
    title: &str,
    entries: &[(&str, bool)],
) {
    let inner_w = entries
        .iter()
        .map(|(label, _)| label.chars().count() + 2)
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0) as u16
        + 2;
    let w = inner_w + 2;
    let h = entries.len() as u16 + 4;
    let x = field_x + field_w.saturating_sub(w) / 2;
    let y = field_y + field_h.saturating_sub(h) / 2;

    let frame = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG);
    fb.fill_rect(x, y, w, h, ' ', frame);
    draw_border(fb, x, y, w, h, frame);

    let title_x = x + (w.saturating_sub(title.chars().count() as u16)) / 2;
    fb.put_str(title_x, y + 1, title, frame.bold());

    for (i, (label, selected)) in entries.iter().enumerate() {
        let row = y + 3 + i as u16;
        if *selected {
            fb.put_str(x + 2, row, "> ", frame.bold());
            fb.put_str(x + 4, row, label, frame.bold());
        } else {
            fb.put_str(x + 4, row, label, frame.dim());
        }
    }
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::F => Rgb::new(220, 80, 80),
        PieceKind::FMirror => Rgb::new(240, 130, 110),
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::LMirror => Rgb::new(80, 120, 220),
        PieceKind::N => Rgb::new(100, 220, 120),
        PieceKind::NMirror => Rgb::new(60, 170, 90),
        PieceKind::P => Rgb::new(240, 220, 80),
        PieceKind::PMirror => Rgb::new(200, 180, 60),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::U => Rgb::new(230, 100, 170),
        PieceKind::W => Rgb::new(150, 200, 255),
        PieceKind::Y => Rgb::new(170, 140, 255),
        PieceKind::YMirror => Rgb::new(130, 100, 210),
        PieceKind::IShort => Rgb::new(180, 180, 180),
    }
}
