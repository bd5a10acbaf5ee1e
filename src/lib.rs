//
// Copyright (c) 2025 Tudor Caloian
//
pub mod data;
pub mod domain;
pub mod preso;
