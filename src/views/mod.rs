// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Page views

mod reader;

pub use reader::reader_page;
