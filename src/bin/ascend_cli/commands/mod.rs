// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors
// ABOUTME: Command modules for ascend-cli
// ABOUTME: Lookup, registry, distribution and wealth subcommands

pub mod distribution;
pub mod lookup;
pub mod registry;
pub mod wealth;
