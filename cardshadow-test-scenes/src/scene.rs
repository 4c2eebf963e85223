use cardshadow::{Bounds, Color, RecordingCanvas, ShadowConfig, ShadowGeometryEngine};

use crate::expectations::{CommandExpectation, CommandKind, TileRegion};

// ── Grid layout constants ────────────────────────────────────────────────────

const TILE_WIDTH: i32 = 260;
const TILE_HEIGHT: i32 = 180;
const TILE_PADDING: i32 = 20;
const COLUMNS: i32 = 3;
const ROWS: i32 = 2;

pub const CANVAS_WIDTH: i32 = TILE_WIDTH * COLUMNS;
pub const CANVAS_HEIGHT: i32 = TILE_HEIGHT * ROWS;

/// Returns the pixel origin (top-left corner) of tile number `n` (1-based).
fn tile_origin(tile_number: i32) -> (i32, i32) {
    let index = tile_number - 1;
    let column = index % COLUMNS;
    let row = index / COLUMNS;
    (column * TILE_WIDTH, row * TILE_HEIGHT)
}

pub fn tile_region(tile_number: i32) -> TileRegion {
    let (x, y) = tile_origin(tile_number);
    TileRegion::new(x, y, TILE_WIDTH, TILE_HEIGHT)
}

/// One card of the main scene: card bounds are relative to the tile's padded origin.
#[derive(Debug, Clone, Copy)]
pub struct CardScene {
    pub label: &'static str,
    pub width: i32,
    pub height: i32,
    pub radius: f32,
    pub elevation: u32,
    pub shadow_color: Color,
    pub background: Color,
}

impl CardScene {
    pub fn bounds_in_tile(&self, tile_number: i32) -> Bounds {
        let (x, y) = tile_origin(tile_number);
        let left = x + TILE_PADDING;
        let top = y + TILE_PADDING;
        Bounds::new(left, top, left + self.width, top + self.height)
    }

    pub fn engine(&self) -> ShadowGeometryEngine {
        let mut engine = ShadowGeometryEngine::new(
            self.radius,
            self.shadow_color,
            self.elevation,
            ShadowConfig::default(),
        );
        engine.set_background(self.background.into());
        engine
    }
}

pub const ELEVATED_CARD: CardScene = CardScene {
    label: "elevated_card",
    width: 200,
    height: 100,
    radius: 16.0,
    elevation: 8,
    shadow_color: Color::GRAY,
    background: Color::WHITE,
};

pub const FLAT_CARD: CardScene = CardScene {
    label: "flat_card",
    width: 120,
    height: 80,
    radius: 16.0,
    elevation: 0,
    shadow_color: Color::GRAY,
    background: Color::WHITE,
};

/// Content is exactly two corner insets wide: no room for horizontal edges.
pub const NARROW_CARD: CardScene = CardScene {
    label: "narrow_card",
    width: 58,
    height: 120,
    radius: 16.0,
    elevation: 8,
    shadow_color: Color::GRAY,
    background: Color::WHITE,
};

/// One pixel wider than [`NARROW_CARD`].
pub const JUST_WIDE_CARD: CardScene = CardScene {
    label: "just_wide_card",
    width: 59,
    height: 120,
    radius: 16.0,
    elevation: 8,
    shadow_color: Color::GRAY,
    background: Color::WHITE,
};

pub const TINY_CARD: CardScene = CardScene {
    label: "tiny_card",
    width: 40,
    height: 40,
    radius: 16.0,
    elevation: 8,
    shadow_color: Color::GRAY,
    background: Color::WHITE,
};

pub const SQUARE_CARD: CardScene = CardScene {
    label: "square_card",
    width: 140,
    height: 140,
    radius: 12.0,
    elevation: 6,
    shadow_color: Color::BLACK,
    background: Color::rgb(250, 250, 250),
};

/// Draws `scene` into `canvas` inside tile `tile_number` and returns its engine.
pub fn draw_card(
    canvas: &mut RecordingCanvas,
    scene: &CardScene,
    tile_number: i32,
) -> ShadowGeometryEngine {
    let mut engine = scene.engine();
    engine.set_bounds(scene.bounds_in_tile(tile_number));
    engine.draw(canvas);
    engine
}

/// Draws every card of the main scene into `canvas` and returns the expectations the
/// recorded commands must meet.
pub fn build_main_scene(canvas: &mut RecordingCanvas) -> Vec<CommandExpectation> {
    let mut expectations: Vec<CommandExpectation> = Vec::new();

    expectations.extend(tile_01_elevated_card(canvas));
    expectations.extend(tile_02_flat_card(canvas));
    expectations.extend(tile_03_narrow_card(canvas));
    expectations.extend(tile_04_just_wide_card(canvas));
    expectations.extend(tile_05_tiny_card(canvas));
    expectations.extend(tile_06_square_card(canvas));

    expectations
}

fn full_card(tile: i32, label: &'static str, blur: usize) -> Vec<CommandExpectation> {
    let region = tile_region(tile);
    let mut expectations = vec![
        CommandExpectation::new(region, CommandKind::AmbientBlur, None, blur, label),
        CommandExpectation::new(region, CommandKind::CardFill, None, 1, label),
    ];
    for turns in 0..4 {
        expectations.push(CommandExpectation::new(
            region,
            CommandKind::CornerSector,
            Some(turns),
            1,
            label,
        ));
    }
    expectations
}

fn edges(
    tile: i32,
    label: &'static str,
    horizontal: usize,
    vertical: usize,
) -> Vec<CommandExpectation> {
    let region = tile_region(tile);
    vec![
        CommandExpectation::new(region, CommandKind::EdgeBand, Some(0), horizontal, label),
        CommandExpectation::new(region, CommandKind::EdgeBand, Some(2), horizontal, label),
        CommandExpectation::new(region, CommandKind::EdgeBand, Some(1), vertical, label),
        CommandExpectation::new(region, CommandKind::EdgeBand, Some(3), vertical, label),
    ]
}

fn tile_01_elevated_card(canvas: &mut RecordingCanvas) -> Vec<CommandExpectation> {
    draw_card(canvas, &ELEVATED_CARD, 1);
    let mut expectations = full_card(1, ELEVATED_CARD.label, 1);
    expectations.extend(edges(1, ELEVATED_CARD.label, 1, 1));
    expectations
}

fn tile_02_flat_card(canvas: &mut RecordingCanvas) -> Vec<CommandExpectation> {
    draw_card(canvas, &FLAT_CARD, 2);
    // No blur pass without elevation; sectors and bands are still issued.
    let mut expectations = full_card(2, FLAT_CARD.label, 0);
    expectations.extend(edges(2, FLAT_CARD.label, 1, 1));
    expectations
}

fn tile_03_narrow_card(canvas: &mut RecordingCanvas) -> Vec<CommandExpectation> {
    draw_card(canvas, &NARROW_CARD, 3);
    let mut expectations = full_card(3, NARROW_CARD.label, 1);
    expectations.extend(edges(3, NARROW_CARD.label, 0, 1));
    expectations
}

fn tile_04_just_wide_card(canvas: &mut RecordingCanvas) -> Vec<CommandExpectation> {
    draw_card(canvas, &JUST_WIDE_CARD, 4);
    let mut expectations = full_card(4, JUST_WIDE_CARD.label, 1);
    expectations.extend(edges(4, JUST_WIDE_CARD.label, 1, 1));
    expectations
}

fn tile_05_tiny_card(canvas: &mut RecordingCanvas) -> Vec<CommandExpectation> {
    draw_card(canvas, &TINY_CARD, 5);
    let mut expectations = full_card(5, TINY_CARD.label, 1);
    expectations.extend(edges(5, TINY_CARD.label, 0, 0));
    expectations
}

fn tile_06_square_card(canvas: &mut RecordingCanvas) -> Vec<CommandExpectation> {
    draw_card(canvas, &SQUARE_CARD, 6);
    let mut expectations = full_card(6, SQUARE_CARD.label, 1);
    expectations.extend(edges(6, SQUARE_CARD.label, 1, 1));
    expectations
}
