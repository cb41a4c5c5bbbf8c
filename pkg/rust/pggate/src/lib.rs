// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Boundary layer between a SQL host and a distributed storage backend.
//!
//! ```ignore
//! let mut gateway = pggate::start(backend, FeatureGate::from_env(), "postgres", Some("mydb"), None)?;
//!
//! let command = pggate::sql::compile("DROP TABLE IF EXISTS ghost", &SemContext::new(&catalog))?;
//!
//! if !gateway.commit() {
//!     // release host-side resources first
//! }
//! gateway.report_if_failed()?;
//! ```

pub use pggate_catalog as catalog;
pub use pggate_engine as engine;
pub use pggate_engine::{Backend, FeatureGate, Gateway, MapEnv, ProcessEnv, ProcessingMode};
pub use pggate_sql as sql;
pub use pggate_sql::{DdlCommand, SemContext, compile};
pub use pggate_sub_tracing as tracing_setup;
pub use pggate_type as r#type;
pub use pggate_type::{Error, ErrorKind, Result, error_level_name, type_oid_name};
use tracing::{info, instrument};

/// Builds the process context and initializes the backend.
///
/// Every feature flag is resolved here, before the first statement runs, so
/// later reads never touch the environment.
#[instrument(name = "pggate::start", level = "info", skip(backend, features))]
pub fn start<B: Backend>(
	backend: B,
	features: FeatureGate,
	program_name: &str,
	database: Option<&str>,
	user: Option<&str>,
) -> Result<Gateway<B>> {
	let snapshot = features.resolve_all();
	info!(?snapshot, "feature flags resolved");

	let mut gateway = Gateway::new(backend, features);
	gateway.report_enabled();
	gateway.initialize(program_name, database, user)?;
	Ok(gateway)
}
