use cardshadow::DrawCommand;
use lyon::math::Point;

/// What role a recorded draw plays in a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// The outer-blurred rounded rect behind the card.
    AmbientBlur,
    /// A rotated quarter-ring sector.
    CornerSector,
    /// A straight gradient band between two corners.
    EdgeBand,
    /// The card surface.
    CardFill,
}

impl CommandKind {
    pub fn classify(command: &DrawCommand) -> Self {
        match command {
            DrawCommand::Path { .. } => CommandKind::CornerSector,
            DrawCommand::Rect { .. } => CommandKind::EdgeBand,
            DrawCommand::RoundRect { paint, .. } if paint.mask_filter.is_some() => {
                CommandKind::AmbientBlur
            }
            DrawCommand::RoundRect { .. } => CommandKind::CardFill,
        }
    }
}

/// A rectangular area of the scene canvas owned by one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl TileRegion {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x as f32
            && point.y >= self.y as f32
            && point.x < (self.x + self.width) as f32
            && point.y < (self.y + self.height) as f32
    }

    /// Whether the device-space center of `command` falls inside this region.
    pub fn owns(&self, command: &DrawCommand) -> bool {
        command
            .device_bounds()
            .is_some_and(|bounds| self.contains(bounds.center()))
    }
}

/// How many draws of one kind a card must issue inside its tile.
pub struct CommandExpectation {
    pub region: TileRegion,
    pub kind: CommandKind,
    /// Required rotation of the drawing frame, or `None` to accept any.
    pub quarter_turns: Option<u8>,
    pub count: usize,
    /// Human-readable label for failure messages.
    pub label: &'static str,
}

impl CommandExpectation {
    pub fn new(
        region: TileRegion,
        kind: CommandKind,
        quarter_turns: Option<u8>,
        count: usize,
        label: &'static str,
    ) -> Self {
        Self {
            region,
            kind,
            quarter_turns,
            count,
            label,
        }
    }

    pub fn matches(&self, command: &DrawCommand) -> bool {
        CommandKind::classify(command) == self.kind
            && self
                .quarter_turns
                .map_or(true, |turns| command.quarter_turns() == Some(turns))
            && self.region.owns(command)
    }
}

/// Validates command expectations against the draws recorded for a scene.
///
/// Returns a list of human-readable failure descriptions. An empty list means
/// all expectations passed.
pub fn check_commands(commands: &[DrawCommand], expectations: &[CommandExpectation]) -> Vec<String> {
    let mut failures = Vec::new();

    for expectation in expectations {
        let actual = commands
            .iter()
            .filter(|command| expectation.matches(command))
            .count();
        if actual != expectation.count {
            failures.push(format!(
                "[{}] expected {} {:?} draw(s) at {:?} quarter turns, got {}",
                expectation.label,
                expectation.count,
                expectation.kind,
                expectation.quarter_turns,
                actual,
            ));
        }
    }

    for command in commands {
        let owned = expectations
            .iter()
            .any(|expectation| expectation.region.owns(command));
        if !owned {
            failures.push(format!(
                "draw centered outside every tile: {:?}",
                command.device_bounds()
            ));
        }
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::{check_commands, CommandExpectation, CommandKind, TileRegion};
    use cardshadow::{BlurMaskFilter, BlurStyle, Canvas, Color, Paint, RecordingCanvas};
    use lyon::math::{point, Box2D};

    #[test]
    fn classify_separates_blur_from_fill() {
        let mut canvas = RecordingCanvas::new();
        let rect = Box2D::new(point(10.0, 10.0), point(50.0, 30.0));
        canvas.draw_round_rect(
            rect,
            4.0,
            &Paint::new(Color::GRAY)
                .with_mask_filter(BlurMaskFilter::new(4.0, BlurStyle::Outer)),
        );
        canvas.draw_round_rect(rect, 4.0, &Paint::new(Color::WHITE));

        let kinds: Vec<_> = canvas
            .commands()
            .iter()
            .map(CommandKind::classify)
            .collect();
        assert_eq!(kinds, vec![CommandKind::AmbientBlur, CommandKind::CardFill]);
    }

    #[test]
    fn count_mismatch_is_reported() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_rect(
            Box2D::new(point(0.0, 0.0), point(10.0, 10.0)),
            &Paint::new(Color::BLACK),
        );
        let region = TileRegion::new(0, 0, 100, 100);

        let passing = [CommandExpectation::new(
            region,
            CommandKind::EdgeBand,
            Some(0),
            1,
            "band",
        )];
        assert!(check_commands(canvas.commands(), &passing).is_empty());

        let failing = [CommandExpectation::new(
            region,
            CommandKind::EdgeBand,
            Some(1),
            1,
            "band",
        )];
        assert_eq!(check_commands(canvas.commands(), &failing).len(), 1);
    }
}
