// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: folder scanning, video decoding and label files.

pub mod media;
pub mod scan;
pub mod serialization;
