//! Tests for shared memory, behaviors, and the orchestrator.

use ap_core::{AgentRole, Mode, Point2D, SimConfig};
use ap_path::homing_path;

use crate::{AgentSpec, Behavior, NoopObserver, Recorder, RunOutcome, SimBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn run(config: SimConfig, roster: Vec<AgentSpec>) -> (RunOutcome, Recorder) {
    let mut sim = SimBuilder::new(config).roster(roster).build().unwrap();
    let mut rec = Recorder::new();
    let outcome = sim.run(&mut rec);
    (outcome, rec)
}

fn run_default(seed: u64) -> (RunOutcome, Recorder) {
    run(SimConfig::seeded(seed), crate::default_roster())
}

// ── SharedMemory ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod memory_tests {
    use super::*;
    use crate::SharedMemory;

    #[test]
    fn empty_before_publish() {
        let mem = SharedMemory::empty();
        assert!(mem.read().is_none());
        assert!(!mem.is_available());
        assert_eq!(mem.publish_count(), 0);
    }

    #[test]
    fn read_returns_published_trail_unchanged() {
        let mut mem = SharedMemory::empty();
        let trail = homing_path(Point2D::ORIGIN, Point2D::new(3.0, 4.0), 50);
        mem.publish(trail.clone());
        assert_eq!(mem.read(), Some(&trail));
        // Reads do not consume or alter the slot.
        assert_eq!(mem.read(), Some(&trail));
        assert_eq!(mem.publish_count(), 1);
    }

    #[test]
    fn last_writer_wins() {
        let mut mem = SharedMemory::empty();
        mem.publish(homing_path(Point2D::ORIGIN, Point2D::new(1.0, 1.0), 10));
        let second = homing_path(Point2D::ORIGIN, Point2D::new(-2.0, 5.0), 10);
        mem.publish(second.clone());
        assert_eq!(mem.read(), Some(&second));
        assert_eq!(mem.publish_count(), 2);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn defaults_to_three_agent_roster() {
        let sim = SimBuilder::new(SimConfig::seeded(1)).build().unwrap();
        let roles: Vec<_> = sim.roster.iter().map(|s| s.role).collect();
        assert_eq!(roles, [AgentRole::Scout, AgentRole::Learner, AgentRole::Lost]);
        assert_eq!(sim.roster[2].behavior, Behavior::FollowTrailUnlessFaulted { sensor_fault: true });
        assert_eq!(sim.seed(), 1);
    }

    #[test]
    fn empty_roster_errors() {
        let result = SimBuilder::new(SimConfig::seeded(1)).roster(vec![]).build();
        assert!(matches!(result, Err(SimError::EmptyRoster)));
    }

    #[test]
    fn non_finite_step_size_errors() {
        let config = SimConfig { step_size: f64::NAN, ..SimConfig::seeded(1) };
        let result = SimBuilder::new(config).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn unseeded_config_resolves_a_seed() {
        let sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        let mut sim2 = SimBuilder::new(SimConfig::seeded(sim.seed())).build().unwrap();
        let mut sim = sim;
        assert_eq!(sim.run(&mut NoopObserver), sim2.run(&mut NoopObserver));
    }
}

// ── End-to-end scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    /// Scenario A: default roster, Lost agent has a sensor fault.
    #[test]
    fn happy_path_lengths_and_trail() {
        let (outcome, _) = run_default(42);
        assert_eq!(outcome.agents.len(), 3);

        let scout = outcome.agent(AgentRole::Scout).unwrap();
        assert_eq!(scout.mode, Mode::Explored);
        assert_eq!(scout.path.len(), 150 + 1 + 50);
        assert_eq!(scout.exploration().len(), 151);
        assert_eq!(scout.homing().len(), 50);
        assert_eq!(scout.path.first(), Point2D::ORIGIN);
        assert_eq!(scout.path.last(), Point2D::ORIGIN);

        let food = scout.discovery.unwrap();
        assert_eq!(outcome.food, Some(food));
        assert_eq!(outcome.nest, Point2D::ORIGIN);
        assert_eq!(scout.exploration()[150], food);
        assert_eq!(scout.homing()[0], food);

        let learner = outcome.agent(AgentRole::Learner).unwrap();
        assert_eq!(learner.mode, Mode::DirectNavigation);
        assert_eq!(learner.path.len(), 50);
        assert_eq!(learner.exploration_len, 0);
        assert_eq!(learner.discovery, None);
        assert_eq!(&learner.path, homing_path(Point2D::ORIGIN, food, 50).path());

        let lost = outcome.agent(AgentRole::Lost).unwrap();
        assert_eq!(lost.mode, Mode::FallbackSearch);
        assert_eq!(lost.path.len(), 151 + 50);
        assert_ne!(lost.exploration(), scout.exploration());
        assert_ne!(lost.discovery, Some(food));
    }

    #[test]
    fn published_trail_left_in_memory() {
        let mut sim = SimBuilder::new(SimConfig::seeded(3)).build().unwrap();
        let outcome = sim.run(&mut NoopObserver);
        let trail = sim.memory.read().unwrap();
        assert_eq!(trail.start(), Point2D::ORIGIN);
        assert_eq!(Some(trail.end()), outcome.food);
        assert_eq!(sim.memory.publish_count(), 1);
    }

    /// Scenario B: no sensor fault, Lost takes the Learner's branch.
    #[test]
    fn lost_without_fault_matches_learner() {
        let roster = vec![AgentSpec::scout(), AgentSpec::learner(), AgentSpec::lost(false)];
        let (outcome, _) = run(SimConfig::seeded(42), roster);
        let learner = outcome.agent(AgentRole::Learner).unwrap();
        let lost = outcome.agent(AgentRole::Lost).unwrap();
        assert_eq!(lost.mode, Mode::DirectNavigation);
        assert_eq!(lost.path, learner.path);
    }

    /// Scenario C: the Scout never publishes.
    #[test]
    fn learner_falls_back_without_trail() {
        let roster = vec![
            AgentSpec::new(AgentRole::Scout, Behavior::Explore { publish: false }),
            AgentSpec::learner(),
        ];
        let (outcome, rec) = run(SimConfig::seeded(42), roster);

        let learner = outcome.agent(AgentRole::Learner).unwrap();
        assert_eq!(learner.mode, Mode::FallbackSearch);
        assert_eq!(learner.path.len(), 151);
        assert_eq!(learner.exploration_len, 151);
        assert!(learner.homing().is_empty());
        assert_eq!(learner.path.first(), Point2D::ORIGIN);

        assert!(!rec.labels().contains(&"trail_published"));
        // Food marker falls back to the Scout's discovery.
        assert_eq!(outcome.food, outcome.agents[0].discovery);
    }

    #[test]
    fn lost_without_trail_and_without_fault_still_round_trips() {
        let roster = vec![AgentSpec::lost(false)];
        let (outcome, rec) = run(SimConfig::seeded(5), roster);
        let lost = &outcome.agents[0];
        assert_eq!(lost.mode, Mode::FallbackSearch);
        assert_eq!(lost.path.len(), 201);
        assert_eq!(lost.path.last(), Point2D::ORIGIN);
        assert!(rec.events.iter().any(|e| matches!(
            e,
            crate::SimEvent::FallbackSearch { reason: crate::FallbackReason::MemoryEmpty, .. }
        )));
    }

    #[test]
    fn fourth_agent_is_a_roster_entry() {
        let mut roster = crate::default_roster();
        roster.push(AgentSpec::learner());
        let (outcome, _) = run(SimConfig::seeded(8), roster);
        assert_eq!(outcome.agents.len(), 4);
        assert_eq!(outcome.agents[3].mode, Mode::DirectNavigation);
        assert_eq!(outcome.agents[3].path, outcome.agents[1].path);
    }

    #[test]
    fn zero_steps_degenerate_run() {
        let config = SimConfig { steps: 0, homing_samples: 1, ..SimConfig::seeded(2) };
        let (outcome, _) = run(config, crate::default_roster());
        let scout = &outcome.agents[0];
        assert_eq!(scout.path.points(), &[Point2D::ORIGIN, Point2D::ORIGIN]);
        assert_eq!(outcome.food, Some(Point2D::ORIGIN));
        let learner = &outcome.agents[1];
        assert_eq!(learner.path.points(), &[Point2D::ORIGIN]);
    }
}

// ── Ordering / determinism ────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;
    use crate::SimEvent;

    #[test]
    fn event_sequence_is_canonical() {
        let (_, rec) = run_default(42);
        assert_eq!(
            rec.labels(),
            [
                "run_started",
                "searching",
                "food_found",
                "trail_published",
                "agent_finished",
                "memory_checked",
                "trail_followed",
                "agent_finished",
                "memory_checked",
                "fallback_search",
                "agent_finished",
            ]
        );
        let roles: Vec<_> = rec.events.iter().filter_map(SimEvent::role).collect();
        assert_eq!(roles[..4], [AgentRole::Scout; 4]);
        assert_eq!(roles[4..7], [AgentRole::Learner; 3]);
        assert_eq!(roles[7..], [AgentRole::Lost; 3]);
        assert_eq!(rec.runs, 1);
        assert_eq!(rec.finished.len(), 3);
    }

    #[test]
    fn lost_agent_sees_trail_but_reports_fault() {
        let (_, rec) = run_default(42);
        let check = rec
            .events
            .iter()
            .filter(|e| e.role() == Some(AgentRole::Lost))
            .find(|e| matches!(e, SimEvent::MemoryChecked { .. }))
            .unwrap();
        assert!(matches!(
            check,
            SimEvent::MemoryChecked { available: true, sensor_fault: true, .. }
        ));
    }

    #[test]
    fn food_found_matches_outcome() {
        let (outcome, rec) = run_default(11);
        let at = rec.events.iter().find_map(|e| match e {
            SimEvent::FoodFound { at, .. } => Some(*at),
            _ => None,
        });
        assert_eq!(at, outcome.food);
    }

    #[test]
    fn same_seed_same_outcome() {
        let (a, _) = run_default(1234);
        let (b, _) = run_default(1234);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_different_discoveries() {
        let (a, _) = run_default(1);
        let (b, _) = run_default(2);
        assert_ne!(a.food, b.food);
    }

    #[test]
    fn rerun_resets_memory() {
        let mut sim = SimBuilder::new(SimConfig::seeded(77)).build().unwrap();
        let first = sim.run(&mut NoopObserver);
        let second = sim.run(&mut NoopObserver);
        assert_eq!(first, second);
        assert_eq!(sim.memory.publish_count(), 1);
    }

    #[test]
    fn observer_pair_fans_out() {
        let mut sim = SimBuilder::new(SimConfig::seeded(9)).build().unwrap();
        let mut pair = (Recorder::new(), Recorder::new());
        sim.run(&mut pair);
        assert_eq!(pair.0.events, pair.1.events);
        assert_eq!(pair.0.finished.len(), 3);
    }

    #[test]
    fn log_observer_runs() {
        let outcome = crate::run_colony(20, 0.5).unwrap();
        assert_eq!(outcome.agents.len(), 3);
        assert_eq!(outcome.agents[0].path.len(), 21 + 50);
    }
}
