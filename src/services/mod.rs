// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod lookup;

pub use lookup::{CuratorService, InvestorService, LookupService};
