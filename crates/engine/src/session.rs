// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pggate_type::{
	Error, Result,
	error::diagnostic::{backend::session_creation_failed, config::double_initialization},
};
use tracing::{debug, error, info, instrument};

use crate::{
	FeatureGate,
	backend::{Backend, SessionHandle},
	config::Feature,
	status::{StatusOrigin, StatusTranslator},
};

/// Lifecycle phase of the host process. Only `Normal` processing talks to the
/// distributed backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingMode {
	Bootstrap,
	Init,
	#[default]
	Normal,
}

/// Owns the one backend session of this process.
#[derive(Debug, Default)]
pub struct SessionManager {
	session: Option<SessionHandle>,
	shutdown_done: bool,
}

impl SessionManager {
	pub fn new() -> Self {
		Self::default()
	}

	/// Initializes the backend and, in distributed mode, opens the session.
	///
	/// The session is opened for `database`, falling back to `user`. With
	/// neither, no session is created.
	///
	/// # Panics
	///
	/// Panics with a configuration error when a session is already open.
	/// This is process-fatal.
	#[instrument(name = "session::initialize", level = "debug", skip(self, translator, features))]
	pub fn initialize<B: Backend + ?Sized>(
		&mut self,
		translator: &StatusTranslator<'_, B>,
		features: &FeatureGate,
		program_name: &str,
		database: Option<&str>,
		user: Option<&str>,
	) -> Result<()> {
		let backend = translator.backend();
		translator.check(backend.init(program_name))?;

		if !features.resolve(Feature::DistributedMode) {
			debug!("distributed mode is off, no backend session");
			return Ok(());
		}

		backend.init_gateway();
		// a gateway brought up again after shutdown needs its own teardown
		self.shutdown_done = false;

		if self.session.is_some() {
			let err = Error(double_initialization());
			error!(code = %err.code, "{}", err.message);
			panic!("{}", err);
		}

		let Some(target) = database.or(user) else {
			debug!("no database or user given, no backend session");
			return Ok(());
		};

		match backend.create_session(target) {
			Ok(session) => {
				info!(database = target, session = session.raw(), "backend session opened");
				self.session = Some(session);
				Ok(())
			}
			Err(status) => {
				let err = translator.raise(status, StatusOrigin::Backend, None, None);
				Err(Error(session_creation_failed(target, err.0.message)))
			}
		}
	}

	/// Closes the session and tears the gateway down. Later calls do nothing
	/// until the gateway is initialized again.
	#[instrument(name = "session::shutdown", level = "debug", skip_all)]
	pub fn shutdown<B: Backend + ?Sized>(&mut self, backend: &B) {
		if self.shutdown_done {
			return;
		}

		if let Some(session) = self.session.take() {
			debug!(session = session.raw(), "closing backend session");
			backend.destroy_session(session);
		}
		backend.destroy_gateway();
		self.shutdown_done = true;
	}

	/// `true` when a session is open and the process is in normal processing.
	pub fn is_enabled(&self, mode: ProcessingMode) -> bool {
		self.session.is_some() && mode == ProcessingMode::Normal
	}

	pub fn has_session(&self) -> bool {
		self.session.is_some()
	}

	pub fn session(&self) -> Option<&SessionHandle> {
		self.session.as_ref()
	}

	pub fn is_shut_down(&self) -> bool {
		self.shutdown_done
	}
}
