// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ascend Contributors
// ABOUTME: Helper modules for ascend-cli
// ABOUTME: Output formatting shared by the subcommands

pub mod display;
