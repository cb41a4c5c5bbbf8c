// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod backend;
pub mod tempdir;
pub mod testscript;

pub use backend::{BackendEvent, LiveHandles, MockBackend};
