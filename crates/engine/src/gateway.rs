// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pggate_type::{Error, Result, error::diagnostic::feature::unsupported};
use tracing::{info, instrument};

use crate::{
	backend::Backend,
	config::{Feature, FeatureGate},
	session::{ProcessingMode, SessionManager},
	status::StatusTranslator,
	transaction::TransactionCoordinator,
};

/// Process context of the gateway: the backend, the feature flags, the single
/// session and the single pending commit failure.
///
/// One value is built at start-up and passed by reference to everything that
/// needs it. Dropping it shuts the backend down.
pub struct Gateway<B: Backend> {
	backend: B,
	features: FeatureGate,
	mode: ProcessingMode,
	sessions: SessionManager,
	transactions: TransactionCoordinator,
	preparing_templates: bool,
}

impl<B: Backend> Gateway<B> {
	pub fn new(backend: B, features: FeatureGate) -> Self {
		Self {
			backend,
			features,
			mode: ProcessingMode::default(),
			sessions: SessionManager::new(),
			transactions: TransactionCoordinator::new(),
			preparing_templates: false,
		}
	}

	pub fn backend(&self) -> &B {
		&self.backend
	}

	pub fn features(&self) -> &FeatureGate {
		&self.features
	}

	pub fn processing_mode(&self) -> ProcessingMode {
		self.mode
	}

	pub fn set_processing_mode(&mut self, mode: ProcessingMode) {
		self.mode = mode;
	}

	pub fn translator(&self) -> StatusTranslator<'_, B> {
		StatusTranslator::for_features(&self.backend, &self.features)
	}

	/// See [`SessionManager::initialize`].
	pub fn initialize(&mut self, program_name: &str, database: Option<&str>, user: Option<&str>) -> Result<()> {
		let translator = StatusTranslator::for_features(&self.backend, &self.features);
		self.sessions.initialize(&translator, &self.features, program_name, database, user)
	}

	/// Frees an unreported commit failure, closes the session and tears the
	/// gateway down. Only the first call has any effect.
	pub fn shutdown(&mut self) {
		if self.sessions.is_shut_down() {
			return;
		}
		self.transactions.discard(&self.backend);
		self.sessions.shutdown(&self.backend);
	}

	pub fn is_enabled(&self) -> bool {
		self.sessions.is_enabled(self.mode)
	}

	pub fn sessions(&self) -> &SessionManager {
		&self.sessions
	}

	/// First half of the commit protocol. See [`TransactionCoordinator::commit`].
	pub fn commit(&mut self) -> bool {
		let enabled = self.is_enabled();
		self.transactions.commit(&self.backend, enabled)
	}

	/// Second half of the commit protocol. Raises the failure of the last
	/// rejected commit exactly once.
	pub fn report_if_failed(&mut self) -> Result<()> {
		let translator = StatusTranslator::for_features(&self.backend, &self.features);
		self.transactions.report_if_failed(&translator)
	}

	pub fn has_pending_failure(&self) -> bool {
		self.transactions.has_pending_failure()
	}

	pub fn transactions_enabled(&self) -> bool {
		self.is_enabled() && self.features.resolve(Feature::Transactions)
	}

	/// The host's own locking is needed unless the backend runs the
	/// transactions.
	pub fn is_locking_required(&self) -> bool {
		!self.transactions_enabled()
	}

	/// Whether every child process is restarted after one of them crashed.
	/// Outside distributed mode the answer is always yes. In distributed mode
	/// an existing file at the configured flag path turns it off.
	#[instrument(name = "gateway::restart_policy", level = "debug", skip(self))]
	pub fn should_restart_all_children_if_one_crashes(&self) -> bool {
		if !self.features.resolve(Feature::DistributedMode) {
			info!("distributed mode is off, restarting all children after a crash");
			return true;
		}

		match self.features.no_restart_flag_path() {
			None => true,
			Some(path) => !path.exists(),
		}
	}

	pub fn should_log_stack_trace_on_error(&self) -> bool {
		self.features.resolve(Feature::StackTraceOnError)
	}

	pub fn report_enabled(&self) {
		if self.features.resolve(Feature::DistributedMode) {
			info!("distributed mode is ENABLED");
		} else {
			info!("distributed mode is NOT ENABLED -- running as a vanilla host");
		}
	}

	pub fn set_preparing_templates(&mut self) {
		self.preparing_templates = true;
	}

	pub fn is_preparing_templates(&self) -> bool {
		self.preparing_templates
	}

	pub fn report_feature_unsupported(&self, message: impl Into<String>) -> Error {
		Error(unsupported(message))
	}
}

impl<B: Backend> Drop for Gateway<B> {
	fn drop(&mut self) {
		self.shutdown();
	}
}
