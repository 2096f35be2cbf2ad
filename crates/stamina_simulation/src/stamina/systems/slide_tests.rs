//! Tests for SlideController.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::prelude::*;

    use super::super::effects::dispatch_effects;
    use super::super::mocks::{test_entity, Call, MockWorld};
    use super::super::slide::*;
    use crate::config::StaminaConfig;
    use crate::stamina::collaborators::BodyMode;
    use crate::stamina::components::{StaminaState, ThresholdLevel};

    const SWEEP: Duration = Duration::from_millis(100);

    #[test]
    fn test_slide_duration_from_post_scaling_velocity() {
        let entity = test_entity();
        let config = StaminaConfig::default();
        let mut state = StaminaState::new();
        // (0.75, 1.0) × 4 = (3, 4)
        let mut ports = MockWorld::default();

        let started = try_start_slide(entity, &mut state, &mut ports, &config).unwrap();
        assert_eq!(started.velocity, Vec2::new(3.0, 4.0));
        assert_eq!(started.duration, Duration::from_secs(7));
        assert_eq!(state.slide_remaining_secs(), 7.0);
        assert!(state.is_sliding());
    }

    #[test]
    fn test_slide_start_requests_all_collaborators() {
        let entity = test_entity();
        let config = StaminaConfig::default();
        let mut state = StaminaState::new();
        let mut ports = MockWorld::default();

        try_start_slide(entity, &mut state, &mut ports, &config).unwrap();
        assert_eq!(
            ports.calls,
            vec![
                Call::ScaleVelocity(entity, 4.0),
                Call::Damping(entity, 1.5),
                Call::BodyMode(entity, BodyMode::Dynamic),
                Call::ForceDown(entity),
                Call::Weightless(entity, true),
            ]
        );
    }

    #[test]
    fn test_slide_lifecycle_restores_exactly_once() {
        let entity = test_entity();
        let config = StaminaConfig::default();
        let mut state = StaminaState::new();
        let mut ports = MockWorld::default();
        try_start_slide(entity, &mut state, &mut ports, &config).unwrap();
        ports.calls.clear();

        let mut ended = 0;
        for _ in 0..70 {
            if tick_slide(entity, &mut state, &mut ports, SWEEP, &config) {
                ended += 1;
            }
        }
        assert_eq!(ended, 1);
        assert_eq!(state.slide_remaining(), Duration::ZERO);
        assert!(!state.is_sliding());

        // Лишние sweep'ы ничего не делают
        for _ in 0..10 {
            assert!(!tick_slide(entity, &mut state, &mut ports, SWEEP, &config));
        }
        assert_eq!(ports.count(|c| *c == Call::Weightless(entity, false)), 1);
        assert_eq!(ports.count(|c| *c == Call::StandUp(entity)), 1);
        assert_eq!(ports.count(|c| *c == Call::Damping(entity, -1.5)), 1);
        assert_eq!(ports.count(|c| *c == Call::BodyMode(entity, BodyMode::Kinematic)), 1);
    }

    #[test]
    fn test_slide_still_running_before_expiry() {
        let entity = test_entity();
        let config = StaminaConfig::default();
        let mut state = StaminaState::new();
        let mut ports = MockWorld::default();
        try_start_slide(entity, &mut state, &mut ports, &config).unwrap();

        for _ in 0..69 {
            assert!(!tick_slide(entity, &mut state, &mut ports, SWEEP, &config));
        }
        assert!(state.is_sliding());
        assert_eq!(state.slide_remaining(), SWEEP);
    }

    #[test]
    fn test_slide_cost_and_single_dispatch() {
        let entity = test_entity();
        let config = StaminaConfig::default();
        let mut state = StaminaState::new().with_slide_cost(200);
        let mut ports = MockWorld::default();
        dispatch_effects(entity, &mut state, &mut ports);
        ports.calls.clear();

        try_start_slide(entity, &mut state, &mut ports, &config).unwrap();
        assert_eq!(state.current(), 300.0);
        assert_eq!(state.threshold(), ThresholdLevel::Tired);

        dispatch_effects(entity, &mut state, &mut ports);
        dispatch_effects(entity, &mut state, &mut ports);
        assert_eq!(ports.count(|c| matches!(c, Call::ShowAlert(..))), 1);
        assert_eq!(state.last_dispatched_threshold(), Some(ThresholdLevel::Tired));
    }

    #[test]
    fn test_reentrant_attempts_rejected() {
        let entity = test_entity();
        let config = StaminaConfig::default();
        let mut state = StaminaState::new();
        let mut ports = MockWorld::default();
        try_start_slide(entity, &mut state, &mut ports, &config).unwrap();
        let stamina = state.current();
        let calls = ports.calls.len();

        for _ in 0..5 {
            assert_eq!(
                try_start_slide(entity, &mut state, &mut ports, &config),
                Err(SlideError::AlreadySliding)
            );
        }
        assert_eq!(state.current(), stamina);
        assert_eq!(ports.calls.len(), calls);
        assert_eq!(state.slide_remaining_secs(), 7.0);
    }

    #[test]
    fn test_preconditions_reject_without_mutation() {
        let entity = test_entity();
        let config = StaminaConfig::default();

        let cases: [(fn(&mut StaminaState, &mut MockWorld), SlideError); 4] = [
            (|s, _| s.can_slide = false, SlideError::Disabled),
            (|_, w| w.flying = true, SlideError::Flying),
            (|_, w| w.has_body = false, SlideError::NoPhysicalBody),
            (|_, w| w.knockable = false, SlideError::CannotBeKnockedDown),
        ];

        for (setup, expected) in cases {
            let mut state = StaminaState::new();
            let mut ports = MockWorld::default();
            setup(&mut state, &mut ports);
            let before = state.clone();

            assert_eq!(
                try_start_slide(entity, &mut state, &mut ports, &config),
                Err(expected)
            );
            assert_eq!(state, before);
            assert!(ports.calls.is_empty());
        }
    }

    #[test]
    fn test_insufficient_stamina_does_not_gate() {
        let entity = test_entity();
        let config = StaminaConfig::default();
        let mut state = StaminaState::new().with_slide_cost(255);
        state.apply_delta(-400.0);
        let mut ports = MockWorld::default();

        assert!(try_start_slide(entity, &mut state, &mut ports, &config).is_ok());
        assert_eq!(state.current(), 0.0);
        assert_eq!(state.threshold(), ThresholdLevel::Collapsed);
    }

    #[test]
    fn test_zero_velocity_slide_restores_immediately() {
        let entity = test_entity();
        let config = StaminaConfig::default();
        let mut state = StaminaState::new();
        let mut ports = MockWorld {
            velocity: Vec2::ZERO,
            ..Default::default()
        };

        let started = try_start_slide(entity, &mut state, &mut ports, &config).unwrap();
        assert_eq!(started.duration, Duration::ZERO);
        assert!(!state.is_sliding());
        assert_eq!(ports.calls.last(), Some(&Call::BodyMode(entity, BodyMode::Kinematic)));
        assert!(ports.calls.contains(&Call::Weightless(entity, false)));
    }

    #[test]
    fn test_slide_duration_rejects_garbage() {
        assert_eq!(slide_duration(Vec2::new(-3.0, 4.0)), Duration::from_secs(7));
        assert_eq!(slide_duration(Vec2::new(f32::NAN, 1.0)), Duration::ZERO);
        assert_eq!(slide_duration(Vec2::new(f32::INFINITY, 1.0)), Duration::ZERO);
    }

    #[test]
    fn test_huge_velocity_saturates_duration() {
        assert_eq!(slide_duration(Vec2::new(f32::MAX, 0.0)), Duration::MAX);

        let entity = test_entity();
        let config = StaminaConfig::default();
        let mut state = StaminaState::new();
        let mut ports = MockWorld {
            velocity: Vec2::new(f32::MAX / 8.0, 0.0),
            ..Default::default()
        };

        let started = try_start_slide(entity, &mut state, &mut ports, &config).unwrap();
        assert_eq!(started.duration, Duration::MAX);
        assert!(state.is_sliding());
        assert!(!tick_slide(entity, &mut state, &mut ports, SWEEP, &config));
    }
}
