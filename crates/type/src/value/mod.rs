// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod level;
pub mod oid;
