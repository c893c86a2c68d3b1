//! UI components.

pub mod city_map;
