// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Process lifecycle of the gateway between the SQL host and the distributed
//! storage backend.

pub mod backend;
pub mod config;
mod gateway;
mod session;
mod status;
mod transaction;

pub use backend::{Backend, SessionHandle, StatementHandle, StatusHandle, TableDescHandle};
pub use config::{EnvSource, Feature, FeatureGate, FeatureSnapshot, MapEnv, ProcessEnv};
pub use gateway::Gateway;
pub use session::{ProcessingMode, SessionManager};
pub use status::{StatusOrigin, StatusTranslator};
pub use transaction::TransactionCoordinator;
