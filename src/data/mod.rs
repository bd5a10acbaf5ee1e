//
// Copyright (c) 2025 Tudor Caloian
//
pub mod repositories;
pub mod sources;
