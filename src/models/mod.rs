// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Core data types: resolved clips and label assignments.

pub mod clip;
pub mod labels;
