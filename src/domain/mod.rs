//
// Copyright (c) 2025 Tudor Caloian
//
pub mod entities;
pub mod managers;
pub mod repositories;
