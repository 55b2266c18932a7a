//! # Signal Loading Flows
//!
//! System descriptions with signals loaded through `orrery-runtime`, checked
//! against the registry and the signalscope buffer it drives.
//!
//! ## Flows Tested:
//!
//! 1. **Description -> Session -> Registry**: custom names minted once, shared
//!    across bodies, reverse lookups intact
//! 2. **Registry -> Signalscope buffer**: one resize per minted channel
//! 3. **Audio assets**: host clips, content files, missing assets skipped
//! 4. **Exhaustion**: frequency space filled through a description

#[cfg(test)]
mod tests {
    use orr_01_signal_registry::{
        BuiltinCatalog, IdentifierKind, ResolutionOrigin, SignalRegistryApi,
    };
    use orrery_runtime::{Session, SessionConfig, SystemDescription};
    use std::path::Path;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn session_at(root: &Path) -> Session {
        let config = SessionConfig {
            content_root: root.to_path_buf(),
            ..Default::default()
        };
        Session::new(config).unwrap()
    }

    fn load(session: &mut Session, json: &str) -> orrery_runtime::LoadReport {
        let desc = SystemDescription::from_json(json).unwrap();
        session.load_system(&desc)
    }

    const BEACON_SYSTEM: &str = r#"{
        "audioClips": ["TH_RadioSignal", "DB_Harmonica"],
        "bodies": [
            {
                "name": "Beacon_Body",
                "signals": [
                    { "name": "Lighthouse", "frequency": "Deep Space Radio", "audioClip": "TH_RadioSignal" },
                    { "name": "Traveler_Esker", "frequency": "Traveler", "audioClip": "DB_Harmonica" }
                ]
            },
            {
                "name": "Relay_Body",
                "primaryBody": "Beacon_Body",
                "signals": [
                    { "name": "Relay", "frequency": "Deep Space Radio", "audioClip": "TH_RadioSignal",
                      "sourceRadius": 5, "detectionRadius": 0 },
                    { "name": "Ghost", "frequency": "Whispers", "audioClip": "NoSuchClip" }
                ]
            }
        ]
    }"#;

    // =============================================================================
    // REGISTRY THROUGH A SESSION
    // =============================================================================

    #[test]
    fn test_custom_frequency_minted_once_across_bodies() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_at(dir.path());
        let report = load(&mut session, BEACON_SYSTEM);

        assert_eq!(report.signals_planned, 3);
        assert_eq!(report.signals_skipped, 1);

        let plans = session.plans();
        let radio = plans[0].plan.frequency;
        assert_eq!(radio.value(), 256);
        assert_eq!(plans[2].plan.frequency, radio);
        assert_eq!(session.signals().name_of(radio), Some("Deep Space Radio"));

        // The skipped signal still minted its frequency.
        assert_eq!(session.signals().stats().frequencies_minted, 2);
    }

    #[test]
    fn test_builtin_names_stay_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_at(dir.path());
        load(&mut session, BEACON_SYSTEM);

        let esker = &session.plans()[1].plan;
        assert_eq!(esker.name.value(), 1);
        assert_eq!(esker.frequency.value(), 2);
        assert!(session.signals().registry().is_builtin(esker.name));
        assert!(!esker.prevent_identification);
    }

    #[test]
    fn test_detection_radius_padding_applied() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_at(dir.path());
        load(&mut session, BEACON_SYSTEM);

        let relay = &session.plans()[2].plan;
        assert_eq!(relay.source_radius, 5.0);
        assert_eq!(relay.detection_radius, 35.0);
    }

    #[test]
    fn test_buffer_grows_once_per_minted_channel() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_at(dir.path());
        load(&mut session, BEACON_SYSTEM);

        let buffer = session.signals().buffer();
        assert_eq!(buffer.resizes(), 2);
        assert_eq!(buffer.slots(), 11);
    }

    #[test]
    fn test_reload_in_same_session_resolves_recorded_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_at(dir.path());
        load(&mut session, BEACON_SYSTEM);

        let res = session
            .signals_mut()
            .resolve("Lighthouse", IdentifierKind::SignalIdentity);
        assert_eq!(res.origin, ResolutionOrigin::Recorded);
        assert_eq!(res.identifier, session.plans()[0].plan.name);
    }

    #[test]
    fn test_fresh_session_starts_from_stock() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = session_at(dir.path());
        load(&mut first, BEACON_SYSTEM);

        let mut second = session_at(dir.path());
        let res = second
            .signals_mut()
            .resolve("Deep Space Radio", IdentifierKind::FrequencyChannel);
        assert_eq!(res.origin, ResolutionOrigin::Minted);
        assert_eq!(res.identifier.value(), 256);
    }

    // =============================================================================
    // AUDIO ASSETS
    // =============================================================================

    #[test]
    fn test_audio_file_loaded_from_content_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("audio")).unwrap();
        std::fs::write(dir.path().join("audio/hum.wav"), b"RIFF").unwrap();

        let mut session = session_at(dir.path());
        let report = load(
            &mut session,
            r#"{"bodies": [{
                "name": "Hum_Body",
                "signals": [
                    { "name": "Hum", "frequency": "Radio", "audioFilePath": "audio/hum.wav" },
                    { "name": "Hum Echo", "frequency": "Radio", "audioFilePath": "audio/hum.wav" },
                    { "name": "Lost", "frequency": "Radio", "audioFilePath": "audio/lost.wav" }
                ]
            }]}"#,
        );

        assert_eq!(report.signals_planned, 2);
        assert_eq!(report.signals_skipped, 1);
        assert_eq!(session.plans()[0].plan.clip, session.plans()[1].plan.clip);
        assert_eq!(session.signals().audio().loaded_files(), 1);
    }

    #[test]
    fn test_signal_without_any_asset_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_at(dir.path());
        let report = load(
            &mut session,
            r#"{"bodies": [{"name": "Mute_Body", "signals": [{"name": "Mute", "frequency": "Radio"}]}]}"#,
        );
        assert_eq!(report.signals_planned, 0);
        assert_eq!(report.signals_skipped, 1);
    }

    #[test]
    fn test_default_signal_cannot_be_identified() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_at(dir.path());
        load(
            &mut session,
            r#"{"audioClips": ["Static"], "bodies": [{"name": "Noise_Body",
                "signals": [{"name": "Default", "frequency": "Default", "audioClip": "Static"}]}]}"#,
        );
        assert!(session.plans()[0].plan.prevent_identification);
    }

    // =============================================================================
    // EXHAUSTION
    // =============================================================================

    #[test]
    fn test_frequency_exhaustion_through_description() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_at(dir.path());

        let signals: Vec<serde_json::Value> = (0..24)
            .map(|i| {
                serde_json::json!({
                    "name": format!("Signal {i}"),
                    "frequency": format!("Band {i}"),
                    "audioClip": "Hiss"
                })
            })
            .collect();
        let json = serde_json::json!({
            "audioClips": ["Hiss"],
            "bodies": [{ "name": "Array_Body", "signals": signals }]
        })
        .to_string();

        let report = load(&mut session, &json);
        assert_eq!(report.signals_planned, 24);

        let plans = session.plans();
        assert_eq!(plans[22].plan.frequency.value(), 1 << 30);
        assert_eq!(plans[23].plan.frequency, BuiltinCatalog::default_frequency());

        let stats = session.signals().stats();
        assert_eq!(stats.frequencies_minted, 23);
        assert_eq!(stats.frequency_exhaustions, 1);
        assert_eq!(session.signals().buffer().slots(), 32);
    }

    #[test]
    fn test_signal_identities_overflow_after_reserved() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_at(dir.path());

        let mut values = Vec::new();
        for i in 0..36 {
            let res = session
                .signals_mut()
                .resolve(&format!("Custom {i}"), IdentifierKind::SignalIdentity);
            values.push(res.identifier.value());
        }

        assert_eq!(values[0], 69);
        assert_eq!(&values[34..], &[200, 201]);
        let mut unique = values.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), values.len());
    }

    #[test]
    fn test_metrics_exported_after_load() {
        orrery_telemetry::register_metrics().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_at(dir.path());
        load(&mut session, BEACON_SYSTEM);

        let text = orrery_telemetry::encode_metrics().unwrap();
        assert!(text.contains("orr_registry_identifiers_minted_total"));
        assert!(text.contains("orr_registry_missing_assets_total"));
    }
}
