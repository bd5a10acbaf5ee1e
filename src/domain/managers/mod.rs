//
// Copyright (c) 2025 Tudor Caloian
//
pub mod consent;
