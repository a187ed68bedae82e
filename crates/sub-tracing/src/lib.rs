// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod builder;
pub mod factory;

pub use builder::{Format, TracingBuilder, TracingSubsystem};
pub use factory::{TracingConfigurator, TracingSubsystemFactory};
