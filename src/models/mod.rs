// SPDX-License-Identifier: MIT

//! Domain layer: pure data types and validation rules shared between the UI
//! and the submission logic.

pub mod field;
