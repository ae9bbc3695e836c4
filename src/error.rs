//! Configuration errors.
//!
//! Every check runs before the first random draw, so a rejected input never
//! reaches the sampling code.

use std::fmt::Display;

/// A catalog or search configuration that cannot be optimized.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The catalog has no rooms to draw from.
    NoRooms,
    /// The catalog has no teachers to draw from.
    NoTeachers,
    /// Two courses share the same code.
    DuplicateCourse(String),
    /// Two rooms share the same id.
    DuplicateRoom(u32),
    /// The teacher list names the same teacher twice.
    DuplicateTeacher(String),
    /// The planning horizon is zero days.
    ZeroHorizon,
    /// The iteration budget is zero.
    ZeroIterations,
    /// The cooling rate is not in `(0, 1]`.
    CoolingRate(f64),
    /// The initial temperature is not a positive finite number.
    InitialTemperature(f64),
    /// A preferred-order family prefix is empty.
    EmptyFamilyPrefix,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoRooms => write!(f, "catalog contains no rooms"),
            ConfigError::NoTeachers => write!(f, "catalog contains no teachers"),
            ConfigError::DuplicateCourse(code) => write!(f, "duplicate course code {code}"),
            ConfigError::DuplicateRoom(id) => write!(f, "duplicate room id {id}"),
            ConfigError::DuplicateTeacher(name) => write!(f, "duplicate teacher {name}"),
            ConfigError::ZeroHorizon => write!(f, "horizon must be at least one day"),
            ConfigError::ZeroIterations => write!(f, "max_iterations must be positive"),
            ConfigError::CoolingRate(rate) => {
                write!(f, "cooling rate must be in (0, 1], got {rate}")
            }
            ConfigError::InitialTemperature(t) => {
                write!(f, "initial temperature must be positive and finite, got {t}")
            }
            ConfigError::EmptyFamilyPrefix => {
                write!(f, "preferred-order family prefixes must be non-empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
