pub mod expectations;
pub mod scene;

pub use expectations::{check_commands, CommandExpectation, CommandKind, TileRegion};
pub use scene::{
    build_main_scene, draw_card, tile_region, CardScene, CANVAS_HEIGHT, CANVAS_WIDTH,
};
