//! Game implementations built on the `RulesEngine` trait.

pub mod war;
