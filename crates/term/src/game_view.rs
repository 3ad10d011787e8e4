//! GameView: maps a [`GameSnapshot`] plus frontend state into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, COLS, ROWS};

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

/// Frontend state drawn around the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView<'a> {
    /// Current hint line.
    pub hint: &'a str,
    /// Border flash standing in for a vibration.
    pub flash: bool,
    /// How-to-play overlay.
    pub show_guide: bool,
    pub touch_lock: bool,
    pub voice: bool,
    pub kid_mode: bool,
}

impl Default for HudView<'_> {
    fn default() -> Self {
        Self {
            hint: "",
            flash: false,
            show_guide: false,
            touch_lock: true,
            voice: true,
            kid_mode: true,
        }
    }
}

const BIG_CELL: (u16, u16) = (4, 2);
const SMALL_CELL: (u16, u16) = (2, 1);
const PANEL_W: u16 = 20;
const PANEL_GAP: u16 = 2;

const BOARD_BG: Rgb = Rgb::hex(0xeef5fb);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const GUIDE_LINES: [&str; 8] = [
    "HOW TO PLAY",
    "",
    "Left / Right   move",
    "Up             turn",
    "Down           go faster",
    "Space          drop",
    "P pause   R new round",
    "Press Enter to start",
];

pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::hex(0x62dafb),
        PieceKind::O => Rgb::hex(0xffcb4d),
        PieceKind::T => Rgb::hex(0xd49cff),
        PieceKind::L => Rgb::hex(0xff9d68),
        PieceKind::J => Rgb::hex(0x7ea6ff),
        PieceKind::S => Rgb::hex(0x86e39f),
        PieceKind::Z => Rgb::hex(0xff8b92),
    }
}

/// Board renderer with a configurable block size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(SMALL_CELL.0, SMALL_CELL.1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Big blocks in kid mode, unless the terminal is too small for them.
    pub fn for_viewport(kid_mode: bool, viewport: Viewport) -> Self {
        let big = Self::new(BIG_CELL.0, BIG_CELL.1);
        if kid_mode && big.fits(viewport) {
            big
        } else {
            Self::default()
        }
    }

    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_w, self.cell_h)
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            COLS as u16 * self.cell_w + 2,
            ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Whether board, side panel and hint line all fit.
    pub fn fits(&self, viewport: Viewport) -> bool {
        let (frame_w, frame_h) = self.frame_size();
        frame_w + PANEL_GAP + PANEL_W <= viewport.width && frame_h + 1 <= viewport.height
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let total_w = frame_w + PANEL_GAP + PANEL_W;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        let border = if hud.flash {
            CellStyle::new(Rgb::hex(0xffcb4d), SCREEN_BG).bold()
        } else {
            CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG)
        };
        fb.draw_box(start_x, start_y, frame_w, frame_h, border);

        let empty = CellStyle::new(Rgb::hex(0xc8d6e3), BOARD_BG);
        for y in 0..ROWS as usize {
            for x in 0..COLS as usize {
                match snap.cell(x, y) {
                    Some(kind) => self.draw_block(fb, start_x, start_y, x as i8, y as i8, kind),
                    None => {
                        self.fill_cell(fb, start_x, start_y, x as i8, y as i8, '·', empty.dim())
                    }
                }
            }
        }

        if let Some(active) = snap.active {
            if let Some(ghost_y) = snap.ghost_y.filter(|&gy| gy != active.y) {
                let ghost = CellStyle::new(piece_color(active.kind), BOARD_BG).dim();
                for (dx, dy) in active.shape.cells() {
                    self.fill_cell(fb, start_x, start_y, active.x + dx, ghost_y + dy, '░', ghost);
                }
            }
            for (x, y) in active.cells() {
                self.draw_block(fb, start_x, start_y, x, y, active.kind);
            }
        }

        self.draw_side_panel(fb, snap, hud, start_x + frame_w + PANEL_GAP, start_y);

        let hint_y = (start_y + frame_h).min(viewport.height.saturating_sub(1));
        let hint_style = CellStyle::new(Rgb::new(240, 240, 240), SCREEN_BG);
        fb.put_str_centered(0, hint_y, viewport.width, hud.hint, hint_style);

        if hud.show_guide {
            self.draw_guide(fb, start_x, start_y, frame_w, frame_h);
        } else if snap.paused {
            let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
            fb.put_str_centered(start_x, start_y + frame_h / 2, frame_w, " PAUSED ", style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, sx: u16, sy: u16, x: i8, y: i8, kind: PieceKind) {
        let color = piece_color(kind);
        self.fill_cell(fb, sx, sy, x, y, '█', CellStyle::new(color, color));
    }

    /// Fill one board cell; cells outside the grid (e.g. above row 0) are skipped.
    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        sx: u16,
        sy: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if !(0..COLS as i8).contains(&x) || !(0..ROWS as i8).contains(&y) {
            return;
        }
        let px = sx + 1 + x as u16 * self.cell_w;
        let py = sy + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        x: u16,
        start_y: u16,
    ) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = start_y;
        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(x, y, "LINES", label);
        fb.put_u32(x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        if let Some(kind) = snap.next {
            let shape = Shape::template(kind);
            let color = piece_color(kind);
            for (dx, dy) in shape.cells() {
                let px = x + 2 + dx as u16 * 2;
                fb.fill_rect(px, y + dy as u16, 2, 1, '█', CellStyle::new(color, color));
            }
        }
        y += 5;

        let dim = value.dim();
        for (name, on) in [
            ("Touch lock", hud.touch_lock),
            ("Voice", hud.voice),
            ("Big blocks", hud.kid_mode),
        ] {
            let end = fb.put_str(x, y, name, dim);
            fb.put_str(end + 1, y, if on { "on" } else { "off" }, value);
            y += 1;
        }
        y += 1;
        fb.put_str(x, y, "T V B toggle", dim);
        fb.put_str(x, y + 1, "G guide  Q quit", dim);
    }

    fn draw_guide(&self, fb: &mut FrameBuffer, sx: u16, sy: u16, frame_w: u16, frame_h: u16) {
        let box_w = GUIDE_LINES
            .iter()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0)
            + 4;
        let box_h = GUIDE_LINES.len() as u16 + 2;
        let bx = sx + frame_w.saturating_sub(box_w) / 2;
        let by = sy + frame_h.saturating_sub(box_h) / 2;

        let style = CellStyle::new(Rgb::new(40, 40, 60), Rgb::new(255, 250, 235));
        fb.fill_rect(bx, by, box_w, box_h, ' ', style);
        fb.draw_box(bx, by, box_w, box_h, style.bold());
        for (i, line) in GUIDE_LINES.iter().enumerate() {
            let line_style = if i == 0 { style.bold() } else { style };
            fb.put_str(bx + 2, by + 1 + i as u16, line, line_style);
        }
    }
}
