use bevy::prelude::*;

/// Placement context handed to every modifier stage: `x`/`y` are the ring
/// and instance indices, `width`/`height` the ring and instance counts.
/// Texture-driven stages sample at the normalized [`uv`](Self::uv).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementCell {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl PlacementCell {
    pub fn uv(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 / self.width.max(1) as f32,
            self.y as f32 / self.height.max(1) as f32,
        )
    }
}

/// A pluggable placement stage. Both capabilities default to pass-through,
/// so a stage may veto, displace, both, or neither.
pub trait RingModifier: Send + Sync {
    /// Whether the candidate instance should be emitted at all.
    fn condition(&self, _cell: PlacementCell) -> bool {
        true
    }

    /// Displaced local position for an instance that passed every condition.
    fn position_offset(&self, position: Vec3, _cell: PlacementCell) -> Vec3 {
        position
    }
}

/// Ordered modifier stages. Registration order is evaluation order; stages
/// are not required to commute.
#[derive(Default)]
pub struct ModifierPipeline {
    stages: Vec<Box<dyn RingModifier>>,
}

impl ModifierPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stage(mut self, stage: impl RingModifier + 'static) -> Self {
        self.push(stage);
        self
    }

    pub fn push(&mut self, stage: impl RingModifier + 'static) {
        self.stages.push(Box::new(stage));
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Logical AND over every stage, short-circuiting on the first veto.
    /// An empty pipeline accepts everything.
    pub fn evaluate_condition(&self, cell: PlacementCell) -> bool {
        self.stages.iter().all(|stage| stage.condition(cell))
    }

    /// Folds the position through every stage in registration order.
    pub fn apply_position_offsets(&self, position: Vec3, cell: PlacementCell) -> Vec3 {
        self.stages
            .iter()
            .fold(position, |position, stage| stage.position_offset(position, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Veto;
    impl RingModifier for Veto {
        fn condition(&self, _cell: PlacementCell) -> bool {
            false
        }
    }

    struct Accept;
    impl RingModifier for Accept {}

    struct Shift(Vec3);
    impl RingModifier for Shift {
        fn position_offset(&self, position: Vec3, _cell: PlacementCell) -> Vec3 {
            position + self.0
        }
    }

    struct Double;
    impl RingModifier for Double {
        fn position_offset(&self, position: Vec3, _cell: PlacementCell) -> Vec3 {
            position * 2.0
        }
    }

    fn cell() -> PlacementCell {
        PlacementCell { x: 0, y: 0, width: 4, height: 4 }
    }

    #[test]
    fn empty_pipeline_accepts() {
        assert!(ModifierPipeline::new().evaluate_condition(cell()));
    }

    #[test]
    fn single_veto_rejects_regardless_of_other_stages() {
        let pipeline = ModifierPipeline::new()
            .with_stage(Accept)
            .with_stage(Veto)
            .with_stage(Accept);
        assert!(!pipeline.evaluate_condition(cell()));
    }

    #[test]
    fn offsets_fold_in_registration_order() {
        let shifted_then_doubled = ModifierPipeline::new()
            .with_stage(Shift(Vec3::X))
            .with_stage(Double)
            .apply_position_offsets(Vec3::ZERO, cell());
        assert_eq!(shifted_then_doubled, Vec3::new(2.0, 0.0, 0.0));

        let doubled_then_shifted = ModifierPipeline::new()
            .with_stage(Double)
            .with_stage(Shift(Vec3::X))
            .apply_position_offsets(Vec3::ZERO, cell());
        assert_eq!(doubled_then_shifted, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn cell_uv_is_normalized() {
        let uv = PlacementCell { x: 2, y: 1, width: 4, height: 2 }.uv();
        assert_eq!(uv, Vec2::new(0.5, 0.5));
    }
}
