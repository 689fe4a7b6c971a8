// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nup` command handlers

pub mod down;
pub mod logs;
pub mod status;
pub mod up;
