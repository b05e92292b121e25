//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{EndReason, GameSnapshot, Phase};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Player, Position, BOARD_SIZE, TURN_LIMIT};

/// Columns reserved left of the board frame for row numbers.
const ROW_LABEL_W: u16 = 3;

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const HALF_ONE_BG: Rgb = Rgb::new(42, 30, 32);
const HALF_TWO_BG: Rgb = Rgb::new(28, 32, 46);
const CURSOR_BG: Rgb = Rgb::new(210, 200, 90);
const SELECTED_BG: Rgb = Rgb::new(70, 140, 80);
const CAPTURE_BG: Rgb = Rgb::new(150, 50, 50);
const PLAYER_ONE_FG: Rgb = Rgb::new(235, 95, 85);
const PLAYER_TWO_FG: Rgb = Rgb::new(95, 145, 245);

const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const AXIS: CellStyle = CellStyle::new(Rgb::new(150, 150, 160), SCREEN_BG);
const HINT: CellStyle = CellStyle::new(Rgb::new(240, 180, 90), SCREEN_BG);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the pieces of one frame go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    origin_x: u16,
    origin_y: u16,
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// A lightweight terminal renderer for the Stratégos board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::blank(CellStyle::default()));

        let layout = self.layout(viewport);

        self.draw_axes(fb, &layout);
        self.draw_border(
            fb,
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            BORDER,
        );

        for y in 0..BOARD_SIZE as i8 {
            for x in 0..BOARD_SIZE as i8 {
                self.draw_square(fb, &layout, snap, Position::new(x, y));
            }
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if let Some(reason) = snap.last_rejection {
            fb.put_fmt(
                layout.frame_x,
                layout.frame_y + layout.frame_h,
                format_args!("{reason}"),
                HINT,
            );
        }

        if let Some(outcome) = snap.outcome {
            let headline = match outcome.winner {
                Some(Player::One) => "PLAYER 1 WINS",
                Some(Player::Two) => "PLAYER 2 WINS",
                None => "DRAW",
            };
            let detail = match outcome.reason {
                EndReason::KingCaptured => "king captured",
                EndReason::TurnLimit => "turn limit reached",
            };
            self.draw_overlay(fb, &layout, &[headline, detail, "F5 new game  q quit"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Start screen with the key table.
    pub fn render_title_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::blank(CellStyle::default()));

        const LINES: [&str; 10] = [
            "arrows / w a s d   move cursor",
            "space              select piece",
            "enter / m          move selected piece",
            "esc / x            cancel selection",
            "k n b r o          place king, knight,",
            "                   bishop, rook, stone",
            "F5 / ctrl-r        new game",
            "q                  quit",
            "",
            "press any key to start",
        ];

        let block_h = LINES.len() as u16 + 3;
        let mut y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        };

        let title = "S T R A T E G O S";
        let title_x = viewport.width.saturating_sub(title.len() as u16) / 2;
        fb.put_str(title_x, y, title, LABEL.on(SCREEN_BG));
        y = y.saturating_add(1);
        let sub = "chess moves, go territory";
        fb.put_str(
            viewport.width.saturating_sub(sub.len() as u16) / 2,
            y,
            sub,
            AXIS,
        );
        y = y.saturating_add(2);

        let text_w = LINES.iter().map(|l| l.len()).max().unwrap_or(0) as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        for line in LINES {
            fb.put_str(x, y, line, VALUE);
            y = y.saturating_add(1);
        }
    }

    pub fn render_title(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_title_into(viewport, &mut fb);
        fb
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = (BOARD_SIZE as u16) * self.cell_w + 2;
        let frame_h = (BOARD_SIZE as u16) * self.cell_h + 2;
        // Column labels above, hint line below.
        let block_w = ROW_LABEL_W + frame_w;
        let block_h = 1 + frame_h + 1;

        let origin_x = viewport.width.saturating_sub(block_w) / 2;
        let origin_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            origin_x,
            origin_y,
            frame_x: origin_x + ROW_LABEL_W,
            frame_y: origin_y + 1,
            frame_w,
            frame_h,
        }
    }

    /// Top-left terminal cell of board square `pos`.
    fn square_origin(&self, layout: &Layout, pos: Position) -> (u16, u16) {
        (
            layout.frame_x + 1 + pos.x as u16 * self.cell_w,
            layout.frame_y + 1 + pos.y as u16 * self.cell_h,
        )
    }

    fn draw_axes(&self, fb: &mut FrameBuffer, layout: &Layout) {
        for i in 0..BOARD_SIZE {
            let (px, py) = self.square_origin(layout, Position::new(i as i8, i as i8));
            fb.put_char(px, layout.origin_y, (b'A' + i) as char, AXIS);
            fb.put_fmt(layout.origin_x, py, format_args!("{:>2}", i + 1), AXIS);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_square(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        snap: &GameSnapshot,
        pos: Position,
    ) {
        let mut bg = match pos.owner() {
            Player::One => HALF_ONE_BG,
            Player::Two => HALF_TWO_BG,
        };
        if pos.is_central() {
            bg = bg.lighten(14);
        }

        let piece = snap.cell(pos);
        let mut style = match piece {
            Some(_) => CellStyle::new(owner_color(pos.owner()), bg).bold(),
            None => CellStyle::new(Rgb::new(95, 95, 105), bg).dim(),
        };
        let mut ch = piece.map_or('·', glyph);

        if snap.is_destination(pos) {
            if piece.is_some() {
                style.bg = CAPTURE_BG;
            } else {
                ch = '•';
                style = CellStyle::new(Rgb::new(130, 225, 130), bg).bold();
            }
        }
        if snap.selection == Some(pos) {
            style.bg = SELECTED_BG;
        }
        if snap.cursor == pos {
            style.bg = CURSOR_BG;
            if piece.is_none() {
                style.fg = Rgb::new(20, 20, 20);
            }
        }

        let (px, py) = self.square_origin(layout, pos);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let panel_x = layout
            .frame_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let player = snap.current_player;
        let player_style = CellStyle::new(owner_color(player), SCREEN_BG).bold();

        let mut y = layout.origin_y;
        let x = fb.put_str(panel_x, y, "TURN ", LABEL);
        let turn = snap.turn_count.min(TURN_LIMIT);
        fb.put_fmt(x, y, format_args!("{turn}/{TURN_LIMIT}"), VALUE);
        y = y.saturating_add(1);

        let x = fb.put_str(panel_x, y, "PLAYER ", LABEL);
        fb.put_u32(x, y, player.number() as u32, player_style);
        y = y.saturating_add(1);

        let x = fb.put_str(panel_x, y, "MODE ", LABEL);
        let mode = match snap.phase {
            Phase::AwaitingSelection => "SELECT",
            Phase::AwaitingTarget => "TARGET",
        };
        fb.put_str(x, y, mode, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", LABEL);
        y = y.saturating_add(1);
        for p in [Player::One, Player::Two] {
            let style = CellStyle::new(owner_color(p), SCREEN_BG);
            let x = fb.put_fmt(panel_x, y, format_args!("P{} ", p.number()), style);
            fb.put_u32(x, y, snap.score(p), VALUE);
            y = y.saturating_add(1);
        }
        y = y.saturating_add(1);

        let x = fb.put_str(panel_x, y, "STOCK ", LABEL);
        fb.put_fmt(x, y, format_args!("P{}", player.number()), player_style);
        y = y.saturating_add(1);
        for (kind, left) in snap.inventory(player).iter() {
            if y >= viewport.height {
                break;
            }
            let style = if left == 0 { VALUE.dim() } else { VALUE };
            let x = fb.put_fmt(panel_x, y, format_args!("{} ", kind.letter()), style);
            fb.put_u32(x, y, left as u32, style);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &Layout, lines: &[&str]) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let top = (layout.frame_y + layout.frame_h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = layout.frame_x + layout.frame_w.saturating_sub(text_w) / 2;
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}

fn owner_color(player: Player) -> Rgb {
    match player {
        Player::One => PLAYER_ONE_FG,
        Player::Two => PLAYER_TWO_FG,
    }
}

fn glyph(kind: PieceKind) -> char {
    match kind {
        PieceKind::Stone => '●',
        other => other.letter(),
    }
}
