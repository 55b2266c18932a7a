//! # Teardown Flows
//!
//! Bodies removed through a session, from description flags and from the
//! host, with deferred work driven by the tick loop.
//!
//! ## Flows Tested:
//!
//! 1. **Stock cascades**: Brittle Hollow takes the White Hole and its stations
//! 2. **Cycles**: mutual primaries terminate with a recorded cycle
//! 3. **Stars**: retired before deactivation
//! 4. **Proxies**: orbiter proxy deactivated, distant proxies removed on a
//!    later tick by the runtime loop
//! 5. **Shared session**: ticking from another thread
//! 6. **Registry after teardown**: custom names outlive their body

#[cfg(test)]
mod tests {
    use orr_01_signal_registry::{IdentifierKind, ResolutionOrigin, SignalRegistryApi};
    use orr_02_body_teardown::SceneEvent;
    use orrery_runtime::{
        Runtime, RuntimeConfig, Session, SessionConfig, StopReason, SystemDescription,
    };
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn loaded(json: &str) -> Session {
        let mut session = Session::new(SessionConfig::default()).unwrap();
        let desc = SystemDescription::from_json(json).unwrap();
        session.load_system(&desc);
        session
    }

    const HEARTHIAN_SYSTEM: &str = r#"{
        "bodies": [
            { "name": "Sun_Body", "stock": "Sun" },
            { "name": "BrittleHollow_Body", "stock": "BrittleHollow", "primaryBody": "Sun_Body",
              "orbiterProxy": true, "distantProxies": [{}] },
            { "name": "VolcanicMoon_Body", "stock": "VolcanicMoon", "primaryBody": "BrittleHollow_Body" },
            { "name": "WhiteHole_Body", "stock": "WhiteHole",
              "auxiliary": ["WhiteholeStation", "WhiteholeStationSuperstructure"] },
            { "name": "TowerTwin_Body", "stock": "TowerTwin", "primaryBody": "Sun_Body",
              "auxiliary": ["TimeLoopRing"], "distantProxies": [{}, {"clone": true}] },
            { "name": "TimberHearth_Body", "stock": "TimberHearth", "primaryBody": "Sun_Body" }
        ]
    }"#;

    // =============================================================================
    // CASCADES AND CYCLES
    // =============================================================================

    #[test]
    fn test_brittle_hollow_cascades_to_white_hole() {
        let mut session = loaded(HEARTHIAN_SYSTEM);
        let white_hole = session.body_id("WhiteHole_Body").unwrap();
        let moon = session.body_id("VolcanicMoon_Body").unwrap();

        let report = session.remove_by_name("BrittleHollow_Body").unwrap();

        assert!(report.deactivated.contains(&white_hole));
        assert!(report.deactivated.contains(&moon));
        assert_eq!(report.auxiliary.len(), 2);
        assert_eq!(report.deactivated.len(), 3);

        // Brittle Hollow goes last, after its cascade and its moon.
        let brittle = session.body_id("BrittleHollow_Body").unwrap();
        assert_eq!(report.deactivated.last(), Some(&brittle));
    }

    #[test]
    fn test_cascade_target_removed_earlier_is_skipped() {
        let mut session = loaded(HEARTHIAN_SYSTEM);
        session.remove_by_name("WhiteHole_Body").unwrap();

        let report = session.remove_by_name("BrittleHollow_Body").unwrap();
        let white_hole = session.body_id("WhiteHole_Body").unwrap();
        assert_eq!(report.skipped, vec![white_hole]);
        assert!(!report.deactivated.contains(&white_hole));
    }

    #[test]
    fn test_mutual_primaries_terminate() {
        let mut session = loaded(
            r#"{"bodies": [
                { "name": "Left", "primaryBody": "Right" },
                { "name": "Right", "primaryBody": "Left" }
            ]}"#,
        );
        let left = session.body_id("Left").unwrap();

        let report = session.remove_by_name("Left").unwrap();
        assert_eq!(report.deactivated.len(), 2);
        assert_eq!(report.cycles, vec![left]);
        assert!(session.live_bodies().is_empty());
    }

    #[test]
    fn test_self_primary_removed_once() {
        let mut session = loaded(r#"{"bodies": [{ "name": "Ouroboros", "primaryBody": "Ouroboros" }]}"#);
        let report = session.remove_by_name("Ouroboros").unwrap();
        assert_eq!(report.deactivated.len(), 1);
    }

    #[test]
    fn test_destroy_flag_on_star_takes_whole_system() {
        let mut session = Session::new(SessionConfig::default()).unwrap();
        let mut desc = SystemDescription::from_json(HEARTHIAN_SYSTEM).unwrap();
        desc.bodies[0].destroy = true;

        let report = session.load_system(&desc);
        assert_eq!(report.removals.len(), 1);

        let removal = &report.removals[0];
        assert_eq!(removal.deactivated.len(), 6);
        assert_eq!(removal.deactivated.last().copied(), session.body_id("Sun_Body"));
        // The White Hole goes with Brittle Hollow's cascade.
        assert!(session.live_bodies().is_empty());
    }

    // =============================================================================
    // SCENE SIDE EFFECTS
    // =============================================================================

    #[test]
    fn test_star_retired_before_deactivation() {
        let mut session = loaded(r#"{"bodies": [{ "name": "Sun_Body", "stock": "Sun" }]}"#);
        session.remove_by_name("Sun_Body").unwrap();

        let events = session.bodies().scene().events();
        let retired = events
            .iter()
            .position(|e| matches!(e, SceneEvent::StarRetired(_)))
            .unwrap();
        let deactivated = events
            .iter()
            .position(|e| matches!(e, SceneEvent::Deactivated(_)))
            .unwrap();
        assert!(retired < deactivated);
    }

    #[test]
    fn test_orbiter_proxy_deactivated_with_body() {
        let mut session = loaded(HEARTHIAN_SYSTEM);
        let report = session.remove_by_name("BrittleHollow_Body").unwrap();

        assert_eq!(report.orbiter_proxies.len(), 1);
        assert!(!session.bodies().scene().is_active(report.orbiter_proxies[0]));
    }

    #[test]
    fn test_clone_purged_and_distant_proxies_removed_next_tick() {
        let mut session = loaded(HEARTHIAN_SYSTEM);
        // One clone purged on load, two canonical proxies left.
        assert_eq!(session.bodies().proxies().distant().len(), 2);

        let report = session.remove_by_name("TowerTwin_Body").unwrap();
        assert_eq!(report.auxiliary.len(), 1);
        assert_eq!(session.bodies().proxies().distant().len(), 2);

        let tick = session.tick();
        assert_eq!(tick.tasks_run, 1);
        assert_eq!(tick.proxies_destroyed.len(), 1);

        let remaining = session.bodies().proxies().distant();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].key, "BrittleHollow");
    }

    // =============================================================================
    // RUNTIME LOOP
    // =============================================================================

    #[tokio::test]
    async fn test_runtime_loop_runs_deferred_removal() {
        let mut session = loaded(HEARTHIAN_SYSTEM);
        session.remove_by_name("BrittleHollow_Body").unwrap();
        let shared = session.into_shared();

        let config = RuntimeConfig {
            tick_interval_ms: 1,
            max_ticks: Some(3),
            ..Default::default()
        };
        let summary = Runtime::new(Arc::clone(&shared), &config).run().await;

        assert_eq!(summary.reason, StopReason::TickLimit);
        assert_eq!(summary.ticks, 3);
        let session = shared.lock();
        assert_eq!(session.bodies().scheduler().pending(), 0);
        assert!(session
            .bodies()
            .proxies()
            .distant()
            .iter()
            .all(|p| p.key != "BrittleHollow"));
    }

    #[test]
    fn test_shared_session_ticked_from_another_thread() {
        let mut session = loaded(HEARTHIAN_SYSTEM);
        session.remove_by_name("TowerTwin_Body").unwrap();
        let shared = session.into_shared();

        let worker = {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || shared.lock().tick().tasks_run)
        };
        assert_eq!(worker.join().unwrap(), 1);
        assert_eq!(shared.lock().bodies().scheduler().pending(), 0);
    }

    // =============================================================================
    // REGISTRY AFTER TEARDOWN
    // =============================================================================

    #[test]
    fn test_custom_names_survive_body_removal() {
        let mut session = loaded(
            r#"{"audioClips": ["Hum"], "bodies": [{
                "name": "Beacon_Body",
                "signals": [{ "name": "Lighthouse", "frequency": "Deep Space Radio", "audioClip": "Hum" }]
            }]}"#,
        );
        let plan = session.plans()[0].plan.clone();
        let reserved_before = session.signals().registry().pool().reserved_remaining();

        let report = session.remove_by_name("Beacon_Body").unwrap();
        assert_eq!(report.deactivated.len(), 1);

        assert_eq!(session.signals().name_of(plan.name), Some("Lighthouse"));
        assert_eq!(session.signals().name_of(plan.frequency), Some("Deep Space Radio"));

        let signal = session
            .signals_mut()
            .resolve("Lighthouse", IdentifierKind::SignalIdentity);
        assert_eq!(signal.origin, ResolutionOrigin::Recorded);
        assert_eq!(signal.identifier, plan.name);

        let frequency = session
            .signals_mut()
            .resolve("Deep Space Radio", IdentifierKind::FrequencyChannel);
        assert_eq!(frequency.origin, ResolutionOrigin::Recorded);
        assert_eq!(frequency.identifier, plan.frequency);

        assert_eq!(
            session.signals().registry().pool().reserved_remaining(),
            reserved_before
        );
    }
}
