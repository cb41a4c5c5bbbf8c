// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use pggate_engine::{
	Feature, FeatureGate, Gateway, MapEnv, ProcessingMode,
	config::{DISTRIBUTED_MODE_VAR, NO_RESTART_FLAG_PATH_VAR, STACK_TRACE_ON_ERROR_VAR, TRANSACTIONS_ENABLED_VAR},
};
use pggate_testing::{BackendEvent, MockBackend, tempdir::temp_file};
use pggate_type::ErrorKind;

fn gateway(env: MapEnv) -> (Arc<MockBackend>, Gateway<Arc<MockBackend>>) {
	let backend = Arc::new(MockBackend::new());
	let gateway = Gateway::new(backend.clone(), FeatureGate::with_source(env));
	(backend, gateway)
}

fn distributed() -> MapEnv {
	MapEnv::new().with(DISTRIBUTED_MODE_VAR, "1")
}

#[test]
fn test_non_distributed_initializes_engine_only() {
	let (backend, mut gateway) = gateway(MapEnv::new());

	gateway.initialize("postgres", Some("mydb"), None).unwrap();

	assert!(!gateway.is_enabled());
	assert_eq!(backend.events(), vec![BackendEvent::Init("postgres".to_string())]);
}

#[test]
fn test_session_uses_database_name() {
	let (backend, mut gateway) = gateway(distributed());

	gateway.initialize("postgres", Some("mydb"), Some("alice")).unwrap();

	assert!(gateway.is_enabled());
	assert_eq!(backend.count(&BackendEvent::CreateSession("mydb".to_string())), 1);
	assert_eq!(backend.live_handles().sessions, 1);
}

#[test]
fn test_session_falls_back_to_user_name() {
	let (backend, mut gateway) = gateway(distributed());

	gateway.initialize("postgres", None, Some("alice")).unwrap();

	assert_eq!(backend.count(&BackendEvent::CreateSession("alice".to_string())), 1);
}

#[test]
fn test_no_session_without_database_or_user() {
	let (backend, mut gateway) = gateway(distributed());

	gateway.initialize("postgres", None, None).unwrap();

	assert!(!gateway.is_enabled());
	assert_eq!(backend.count(&BackendEvent::InitGateway), 1);
	assert_eq!(backend.live_handles().sessions, 0);
}

#[test]
fn test_init_failure_is_backend_error() {
	let (backend, mut gateway) = gateway(distributed());
	backend.fail_init("cannot load shared memory");

	let err = gateway.initialize("postgres", Some("mydb"), None).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::InternalBackend);
	assert_eq!(err.message(), "cannot load shared memory");
	assert_eq!(backend.count(&BackendEvent::InitGateway), 0);
	assert!(backend.live_handles().is_empty());
}

#[test]
fn test_session_creation_failure() {
	let (backend, mut gateway) = gateway(distributed());
	backend.fail_session_creation("database mydb does not exist");

	let err = gateway.initialize("postgres", Some("mydb"), None).unwrap_err();
	assert_eq!(err.code(), "BACKEND_002");
	assert_eq!(err.message(), "database mydb does not exist");
	assert!(!gateway.is_enabled());
	assert!(backend.live_handles().is_empty());
}

#[test]
#[should_panic(expected = "double initialization")]
fn test_double_initialization_is_fatal() {
	let (_backend, mut gateway) = gateway(distributed());

	gateway.initialize("postgres", Some("mydb"), None).unwrap();
	let _ = gateway.initialize("postgres", Some("mydb"), None);
}

#[test]
fn test_shutdown_is_idempotent() {
	let (backend, mut gateway) = gateway(distributed());
	gateway.initialize("postgres", Some("mydb"), None).unwrap();

	gateway.shutdown();
	gateway.shutdown();
	drop(gateway);

	assert_eq!(backend.count(&BackendEvent::DestroyGateway), 1);
	assert_eq!(
		backend.events().iter().filter(|e| matches!(e, BackendEvent::DestroySession(_))).count(),
		1
	);
	assert!(backend.live_handles().is_empty());
}

#[test]
fn test_reinitialized_gateway_is_torn_down_again() {
	let (backend, mut gateway) = gateway(distributed());

	for _ in 0..2 {
		gateway.initialize("postgres", None, None).unwrap();
		assert!(!gateway.sessions().is_shut_down());
		gateway.shutdown();
		gateway.shutdown();
	}
	drop(gateway);

	assert_eq!(backend.count(&BackendEvent::InitGateway), 2);
	assert_eq!(backend.count(&BackendEvent::DestroyGateway), 2);
}

#[test]
fn test_reinitialized_session_is_closed_again() {
	let (backend, mut gateway) = gateway(distributed());

	gateway.initialize("postgres", Some("mydb"), None).unwrap();
	gateway.shutdown();
	gateway.initialize("postgres", Some("mydb"), None).unwrap();
	assert!(gateway.is_enabled());
	gateway.shutdown();

	assert_eq!(backend.count(&BackendEvent::CreateSession("mydb".to_string())), 2);
	assert_eq!(backend.count(&BackendEvent::DestroyGateway), 2);
	assert!(backend.live_handles().is_empty());
}

#[test]
fn test_stack_trace_flag_reaches_every_translator() {
	let (backend, mut gateway) = gateway(distributed().with(STACK_TRACE_ON_ERROR_VAR, "1"));

	gateway.initialize("postgres", Some("mydb"), None).unwrap();
	assert!(gateway.features().is_resolved(Feature::StackTraceOnError));
	assert!(gateway.translator().logs_stack_trace());

	backend.fail_next_commit("conflict");
	assert!(!gateway.commit());
	let err = gateway.report_if_failed().unwrap_err();
	assert_eq!(err.kind(), ErrorKind::SerializationFailure);
	assert_eq!(backend.live_handles().statuses, 0);
}

#[test]
fn test_drop_shuts_down() {
	let (backend, mut gateway) = gateway(distributed());
	gateway.initialize("postgres", Some("mydb"), None).unwrap();

	drop(gateway);

	assert_eq!(backend.count(&BackendEvent::DestroyGateway), 1);
	assert!(backend.live_handles().is_empty());
}

#[test]
fn test_only_normal_mode_is_enabled() {
	let (_backend, mut gateway) = gateway(distributed());
	gateway.initialize("postgres", Some("mydb"), None).unwrap();

	gateway.set_processing_mode(ProcessingMode::Bootstrap);
	assert!(!gateway.is_enabled());
	gateway.set_processing_mode(ProcessingMode::Init);
	assert!(!gateway.is_enabled());
	gateway.set_processing_mode(ProcessingMode::Normal);
	assert!(gateway.is_enabled());
}

#[test]
fn test_locking_follows_transactions_flag() {
	let (_backend, mut gateway) = gateway(distributed());
	gateway.initialize("postgres", Some("mydb"), None).unwrap();
	assert!(!gateway.transactions_enabled());
	assert!(gateway.is_locking_required());

	let (_backend, mut gateway) = self::gateway(distributed().with(TRANSACTIONS_ENABLED_VAR, "1"));
	assert!(gateway.is_locking_required());
	gateway.initialize("postgres", Some("mydb"), None).unwrap();
	assert!(gateway.transactions_enabled());
	assert!(!gateway.is_locking_required());
}

#[test]
fn test_restart_children_outside_distributed_mode() {
	let (_backend, gateway) = gateway(MapEnv::new().with(NO_RESTART_FLAG_PATH_VAR, "/"));
	assert!(gateway.should_restart_all_children_if_one_crashes());
}

#[test]
fn test_restart_children_flag_file() {
	let env = Arc::new(distributed());
	let backend = MockBackend::new();
	let gateway = Gateway::new(backend, FeatureGate::with_source(env.clone()));
	assert!(gateway.should_restart_all_children_if_one_crashes());

	temp_file(|path| {
		env.set(NO_RESTART_FLAG_PATH_VAR, path.to_string_lossy());
		assert!(!gateway.should_restart_all_children_if_one_crashes());
	})
	.unwrap();

	assert!(gateway.should_restart_all_children_if_one_crashes());
}

#[test]
fn test_preparing_templates_marker() {
	let (_backend, mut gateway) = gateway(MapEnv::new());
	assert!(!gateway.is_preparing_templates());
	gateway.set_preparing_templates();
	assert!(gateway.is_preparing_templates());
}

#[test]
fn test_feature_unsupported_report() {
	let (_backend, gateway) = gateway(MapEnv::new());
	let err = gateway.report_feature_unsupported("ALTER TABLE ... SET TABLESPACE");
	assert_eq!(err.kind(), ErrorKind::FeatureUnsupported);
	assert_eq!(err.message(), "ALTER TABLE ... SET TABLESPACE");
}
