//! Tests for regen step direction.

#[cfg(test)]
mod tests {
    use super::super::regen::regen_step;
    use crate::stamina::components::{StaminaState, ThresholdLevel};

    fn state_at(value: f32) -> StaminaState {
        let mut state = StaminaState::new();
        state.apply_delta(value - state.current());
        state
    }

    #[test]
    fn test_above_energetic_drains() {
        let mut state = state_at(900.0);
        let regen = state.actual_regen();

        assert_eq!(regen_step(&mut state), Some(-regen));
        assert_eq!(state.current(), 900.0 - regen);
    }

    #[test]
    fn test_below_energetic_restores() {
        let mut state = state_at(400.0);
        let regen = state.actual_regen();

        assert_eq!(regen_step(&mut state), Some(regen));
        assert_eq!(state.current(), 400.0 + regen);
    }

    #[test]
    fn test_stimulated_only_consumes() {
        let mut state = state_at(400.0);
        state.stimulated = true;

        regen_step(&mut state);
        assert_eq!(state.current(), 395.0);
    }

    #[test]
    fn test_no_regen_ticks_skip_steps() {
        let mut state = state_at(400.0);
        state.no_regen_ticks = 2;

        assert_eq!(regen_step(&mut state), None);
        assert_eq!(regen_step(&mut state), None);
        assert_eq!(state.no_regen_ticks, 0);
        assert_eq!(state.current(), 400.0);

        assert!(regen_step(&mut state).is_some());
        assert_eq!(state.current(), 405.0);
    }

    #[test]
    fn test_regen_clamps_at_zero() {
        let mut state = state_at(2.0);
        state.stimulated = true;

        regen_step(&mut state);
        assert_eq!(state.current(), 0.0);
        assert_eq!(state.threshold(), ThresholdLevel::Collapsed);
    }

    #[test]
    fn test_rest_settles_at_energetic_edge() {
        // Без dispatch actual_regen = 5: обе стороны сходятся к границе Energetic
        let edge = ThresholdLevel::Energetic.min_stamina();
        let mut low = state_at(100.0);
        let mut high = state_at(950.0);
        for _ in 0..200 {
            regen_step(&mut low);
            regen_step(&mut high);
        }
        for state in [&low, &high] {
            assert!(state.current() >= edge - 5.0 && state.current() <= edge);
        }
    }
}
