// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pggate_engine::{FeatureGate, MapEnv, StatusOrigin, StatusTranslator, config::STACK_TRACE_ON_ERROR_VAR};
use pggate_testing::{BackendEvent, MockBackend};
use pggate_type::ErrorKind;

#[test]
fn test_check_without_status_is_ok() {
	let backend = MockBackend::new();
	let translator = StatusTranslator::new(&backend);

	assert!(translator.check(None).is_ok());
	assert!(backend.events().is_empty());
}

#[test]
fn test_backend_failure_keeps_message() {
	let backend = MockBackend::new();
	let translator = StatusTranslator::new(&backend);
	let status = backend.status("tablet server unavailable");

	let err = translator.check(Some(status)).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::InternalBackend);
	assert_eq!(err.message(), "tablet server unavailable");
	assert!(backend.live_handles().is_empty());
}

#[test]
fn test_commit_origin_is_serialization_failure() {
	let backend = MockBackend::new();
	let translator = StatusTranslator::new(&backend);
	let status = backend.status("conflict on key k1");

	let err = translator.raise(status, StatusOrigin::Commit, None, None);
	assert_eq!(err.kind(), ErrorKind::SerializationFailure);
	assert_eq!(err.message(), "Error during commit: conflict on key k1");
	assert!(err.kind().is_retryable());
}

#[test]
fn test_handles_released_before_status() {
	let backend = MockBackend::new();
	let translator = StatusTranslator::new(&backend);
	let statement = backend.alloc_statement();
	let table_desc = backend.alloc_table_desc();
	let (statement_raw, desc_raw) = (statement.raw(), table_desc.raw());
	let status = backend.status("");
	let status_raw = status.raw();

	let err = translator.raise(status, StatusOrigin::Backend, Some(statement), Some(table_desc));
	assert_eq!(err.message(), "");
	assert_eq!(
		backend.events(),
		vec![
			BackendEvent::DeleteStatement(statement_raw),
			BackendEvent::DeleteTableDesc(desc_raw),
			BackendEvent::FreeStatus(status_raw),
		]
	);
	assert!(backend.live_handles().is_empty());
}

#[test]
fn test_check_statement_returns_handle_on_success() {
	let backend = MockBackend::new();
	let translator = StatusTranslator::new(&backend);
	let statement = backend.alloc_statement();
	let raw = statement.raw();

	let statement = translator.check_statement(None, statement).unwrap();
	assert_eq!(statement.raw(), raw);
	assert_eq!(backend.live_handles().statements, 1);
	assert!(backend.events().is_empty());
}

#[test]
fn test_check_statement_releases_on_failure() {
	let backend = MockBackend::new();
	let translator = StatusTranslator::new(&backend);
	let statement = backend.alloc_statement();
	let status = backend.status("could not prepare");

	let err = translator.check_statement(Some(status), statement).unwrap_err();
	assert_eq!(err.message(), "could not prepare");
	assert!(backend.live_handles().is_empty());
}

#[test]
fn test_check_table_desc_releases_on_failure() {
	let backend = MockBackend::new();
	let translator = StatusTranslator::new(&backend);
	let table_desc = backend.alloc_table_desc();
	let status = backend.status("table was dropped");

	let err = translator.check_table_desc(Some(status), table_desc).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::InternalBackend);
	assert!(backend.live_handles().is_empty());
}

#[test]
fn test_failed_release_does_not_replace_error() {
	let backend = MockBackend::new();
	let translator = StatusTranslator::new(&backend);
	let statement = backend.alloc_statement();
	let status = backend.status("primary failure");
	backend.fail_statement_release("release failed");

	let err = translator.raise(status, StatusOrigin::Backend, Some(statement), None);
	assert_eq!(err.message(), "primary failure");
	assert_eq!(backend.live_handles().statuses, 0);
	assert_eq!(backend.live_handles().statements, 0);
}

#[test]
fn test_stack_trace_logging_still_raises() {
	let backend = MockBackend::new();
	let translator = StatusTranslator::new(&backend).with_stack_trace(true);
	let status = backend.status("boom");

	let err = translator.check(Some(status)).unwrap_err();
	assert_eq!(err.message(), "boom");
	assert!(backend.live_handles().is_empty());
}

#[test]
fn test_stack_trace_follows_feature_flag() {
	let backend = MockBackend::new();

	let on = FeatureGate::with_source(MapEnv::new().with(STACK_TRACE_ON_ERROR_VAR, "1"));
	assert!(StatusTranslator::for_features(&backend, &on).logs_stack_trace());

	let off = FeatureGate::with_source(MapEnv::new());
	assert!(!StatusTranslator::for_features(&backend, &off).logs_stack_trace());
}
