// *******************************************************************************
// Copyright (c) 2026 Contributors to the Eclipse Foundation
//
// See the NOTICE file(s) distributed with this work for additional
// information regarding copyright ownership.
//
// This program and the accompanying materials are made available under the
// terms of the Apache License Version 2.0 which is available at
// <https://www.apache.org/licenses/LICENSE-2.0>
//
// SPDX-License-Identifier: Apache-2.0
// *******************************************************************************
use crate::cit::multiple_bindings::multiple_bindings_group;
use crate::cit::nop_fallback::nop_fallback_group;
use test_scenarios_rust::scenario::{ScenarioGroup, ScenarioGroupImpl};

mod multiple_bindings;
mod nop_fallback;

/// Create a group containing scenarios for CITs.
pub fn cit_scenario_group() -> Box<dyn ScenarioGroup> {
    Box::new(ScenarioGroupImpl::new(
        "cit",
        vec![],
        vec![multiple_bindings_group(), nop_fallback_group()],
    ))
}
