// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

/// Where feature flags are read from.
pub trait EnvSource: Send + Sync {
	fn var(&self, name: &str) -> Option<String>;
}

/// The process environment. Values that are not valid unicode count as unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
	fn var(&self, name: &str) -> Option<String> {
		std::env::var(name).ok()
	}
}

/// In-memory environment for embedders and tests.
#[derive(Debug, Default)]
pub struct MapEnv {
	vars: RwLock<HashMap<String, String>>,
}

impl MapEnv {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(name, value);
		self
	}

	pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
		self.vars.write().insert(name.into(), value.into());
	}

	pub fn remove(&self, name: &str) {
		self.vars.write().remove(name);
	}
}

impl EnvSource for MapEnv {
	fn var(&self, name: &str) -> Option<String> {
		self.vars.read().get(name).cloned()
	}
}

impl<E: EnvSource + ?Sized> EnvSource for Arc<E> {
	fn var(&self, name: &str) -> Option<String> {
		(**self).var(name)
	}
}
