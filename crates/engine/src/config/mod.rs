// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Process-wide feature flags.
//!
//! Each flag is read from its environment variable the first time it is
//! needed and then cached for the rest of the process. A flag is on only when
//! its variable is exactly `1`.

mod env;

use std::{
	fmt::{Debug, Formatter},
	path::PathBuf,
	sync::OnceLock,
};

pub use env::{EnvSource, MapEnv, ProcessEnv};
use tracing::debug;

pub const DISTRIBUTED_MODE_VAR: &str = "PGGATE_DISTRIBUTED_MODE";
pub const TRANSACTIONS_ENABLED_VAR: &str = "PGGATE_TRANSACTIONS_ENABLED";
pub const STACK_TRACE_ON_ERROR_VAR: &str = "PGGATE_STACK_TRACE_ON_ERROR";
/// Path of a file whose presence disables restarting every child process
/// after one of them crashed. Read on every check, never cached.
pub const NO_RESTART_FLAG_PATH_VAR: &str = "PGGATE_NO_RESTART_ALL_CHILDREN_ON_CRASH_FLAG_PATH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
	DistributedMode,
	Transactions,
	StackTraceOnError,
}

impl Feature {
	pub const ALL: [Feature; 3] = [Feature::DistributedMode, Feature::Transactions, Feature::StackTraceOnError];

	pub const fn env_var(&self) -> &'static str {
		match self {
			Feature::DistributedMode => DISTRIBUTED_MODE_VAR,
			Feature::Transactions => TRANSACTIONS_ENABLED_VAR,
			Feature::StackTraceOnError => STACK_TRACE_ON_ERROR_VAR,
		}
	}
}

/// `true` only when `name` is set to exactly `1`.
pub fn is_env_var_true(source: &dyn EnvSource, name: &str) -> bool {
	source.var(name).as_deref() == Some("1")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureSnapshot {
	pub distributed_mode: bool,
	pub transactions: bool,
	pub stack_trace_on_error: bool,
}

pub struct FeatureGate {
	source: Box<dyn EnvSource>,
	distributed_mode: OnceLock<bool>,
	transactions: OnceLock<bool>,
	stack_trace_on_error: OnceLock<bool>,
}

impl Default for FeatureGate {
	fn default() -> Self {
		Self::from_env()
	}
}

impl Debug for FeatureGate {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FeatureGate")
			.field("distributed_mode", &self.distributed_mode.get())
			.field("transactions", &self.transactions.get())
			.field("stack_trace_on_error", &self.stack_trace_on_error.get())
			.finish()
	}
}

impl FeatureGate {
	pub fn from_env() -> Self {
		Self::with_source(ProcessEnv)
	}

	pub fn with_source(source: impl EnvSource + 'static) -> Self {
		Self {
			source: Box::new(source),
			distributed_mode: OnceLock::new(),
			transactions: OnceLock::new(),
			stack_trace_on_error: OnceLock::new(),
		}
	}

	/// Value of `feature`, read from the environment on first use only.
	pub fn resolve(&self, feature: Feature) -> bool {
		*self.cell(feature).get_or_init(|| {
			let enabled = is_env_var_true(self.source.as_ref(), feature.env_var());
			debug!(?feature, var = feature.env_var(), enabled, "resolved feature flag");
			enabled
		})
	}

	pub fn is_resolved(&self, feature: Feature) -> bool {
		self.cell(feature).get().is_some()
	}

	/// Resolves every flag at once, typically at process start.
	pub fn resolve_all(&self) -> FeatureSnapshot {
		FeatureSnapshot {
			distributed_mode: self.resolve(Feature::DistributedMode),
			transactions: self.resolve(Feature::Transactions),
			stack_trace_on_error: self.resolve(Feature::StackTraceOnError),
		}
	}

	pub fn no_restart_flag_path(&self) -> Option<PathBuf> {
		self.source.var(NO_RESTART_FLAG_PATH_VAR).filter(|path| !path.is_empty()).map(PathBuf::from)
	}

	fn cell(&self, feature: Feature) -> &OnceLock<bool> {
		match feature {
			Feature::DistributedMode => &self.distributed_mode,
			Feature::Transactions => &self.transactions,
			Feature::StackTraceOnError => &self.stack_trace_on_error,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::{
		DISTRIBUTED_MODE_VAR, Feature, FeatureGate, FeatureSnapshot, MapEnv, NO_RESTART_FLAG_PATH_VAR,
		STACK_TRACE_ON_ERROR_VAR, TRANSACTIONS_ENABLED_VAR, is_env_var_true,
	};

	#[test]
	fn test_only_exactly_one_is_true() {
		let env = MapEnv::new()
			.with("ONE", "1")
			.with("TRUE", "true")
			.with("PADDED", " 1")
			.with("TWO", "11")
			.with("EMPTY", "");

		assert!(is_env_var_true(&env, "ONE"));
		assert!(!is_env_var_true(&env, "TRUE"));
		assert!(!is_env_var_true(&env, "PADDED"));
		assert!(!is_env_var_true(&env, "TWO"));
		assert!(!is_env_var_true(&env, "EMPTY"));
		assert!(!is_env_var_true(&env, "UNSET"));
	}

	#[test]
	fn test_flags_are_memoized() {
		let env = Arc::new(MapEnv::new().with(DISTRIBUTED_MODE_VAR, "1"));
		let gate = FeatureGate::with_source(env.clone());

		assert!(!gate.is_resolved(Feature::DistributedMode));
		assert!(gate.resolve(Feature::DistributedMode));
		assert!(gate.is_resolved(Feature::DistributedMode));

		env.set(DISTRIBUTED_MODE_VAR, "0");
		assert!(gate.resolve(Feature::DistributedMode));

		env.remove(TRANSACTIONS_ENABLED_VAR);
		assert!(!gate.resolve(Feature::Transactions));
		env.set(TRANSACTIONS_ENABLED_VAR, "1");
		assert!(!gate.resolve(Feature::Transactions));
	}

	#[test]
	fn test_resolve_all() {
		let gate = FeatureGate::with_source(
			MapEnv::new().with(DISTRIBUTED_MODE_VAR, "1").with(STACK_TRACE_ON_ERROR_VAR, "1"),
		);

		assert_eq!(
			gate.resolve_all(),
			FeatureSnapshot {
				distributed_mode: true,
				transactions: false,
				stack_trace_on_error: true,
			}
		);
		for feature in Feature::ALL {
			assert!(gate.is_resolved(feature));
		}
	}

	#[test]
	fn test_flag_path_is_not_cached() {
		let env = Arc::new(MapEnv::new());
		let gate = FeatureGate::with_source(env.clone());
		assert_eq!(gate.no_restart_flag_path(), None);

		env.set(NO_RESTART_FLAG_PATH_VAR, "/tmp/no-restart");
		assert_eq!(gate.no_restart_flag_path().unwrap().to_str(), Some("/tmp/no-restart"));

		env.set(NO_RESTART_FLAG_PATH_VAR, "");
		assert_eq!(gate.no_restart_flag_path(), None);
	}
}
