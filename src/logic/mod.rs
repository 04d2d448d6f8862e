// SPDX-License-Identifier: MIT

//! Business logic for validating and serializing field definitions.

pub mod submit;
