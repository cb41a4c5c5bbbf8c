// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Log output of the gateway process.

mod builder;

pub use builder::{LogFormat, TracingBuilder, TracingConfigurator};
