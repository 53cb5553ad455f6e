// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Engine configuration for structured workout compilation and device scheduling

use crate::constants::{compiler, scheduling};
use crate::models::TimeOfDay;
use crate::workout::units::UnitSystem;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "stride_config.toml";

/// Main engine configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub compiler: CompilerSettings,
    pub scheduling: SchedulingSettings,
}

/// Interval compiler parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerSettings {
    pub unit_system: UnitSystem,
    pub warmup_minutes: f64,
    pub cooldown_minutes: f64,
    /// Flat tolerance added on either side of the target speed
    pub speed_tolerance: f64,
    /// Half width of the pace range for a simple run, min/km
    pub simple_run_pace_half_width: f64,
    /// Pace drop between progressive segments, min/km
    pub progressive_pace_increment: f64,
    pub progressive_pace_half_width: f64,
    pub default_interval: DefaultIntervalSettings,
}

/// Repeat structure used for planned interval sessions without run/walk minutes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultIntervalSettings {
    pub repeats: u32,
    pub work_meters: f64,
    pub recovery_seconds: f64,
}

/// Start hours for each preferred time of day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingSettings {
    pub morning_hour: u32,
    pub afternoon_hour: u32,
    pub evening_hour: u32,
}

impl EngineConfig {
    /// Load engine configuration from file or use defaults.
    ///
    /// Lookup order: explicit path, `stride_config.toml` in the working
    /// directory, `<config dir>/stride-planner/config.toml`, embedded defaults.
    pub fn load(path: Option<String>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(&config_path);
        }

        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::load_from_file(DEFAULT_CONFIG_FILE);
        }

        if let Some(user_config) = Self::user_config_path().filter(|p| p.exists()) {
            return Self::load_from_file(&user_config.to_string_lossy());
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config file: {}", path))?;

        let config: EngineConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse engine config file: {}", path))?;

        Ok(config)
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stride-planner").join("config.toml"))
    }
}

impl SchedulingSettings {
    pub fn start_hour(&self, time_of_day: TimeOfDay) -> u32 {
        match time_of_day {
            TimeOfDay::Morning => self.morning_hour,
            TimeOfDay::Afternoon => self.afternoon_hour,
            TimeOfDay::Evening => self.evening_hour,
        }
    }
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Imperial,
            warmup_minutes: compiler::DEFAULT_WARMUP_MINUTES,
            cooldown_minutes: compiler::DEFAULT_COOLDOWN_MINUTES,
            speed_tolerance: compiler::SPEED_TOLERANCE,
            simple_run_pace_half_width: compiler::SIMPLE_RUN_PACE_HALF_WIDTH,
            progressive_pace_increment: compiler::PROGRESSIVE_PACE_INCREMENT,
            progressive_pace_half_width: compiler::PROGRESSIVE_PACE_HALF_WIDTH,
            default_interval: DefaultIntervalSettings::default(),
        }
    }
}

impl Default for DefaultIntervalSettings {
    fn default() -> Self {
        Self {
            repeats: compiler::DEFAULT_INTERVAL_REPEATS,
            work_meters: compiler::DEFAULT_INTERVAL_WORK_METERS,
            recovery_seconds: compiler::DEFAULT_INTERVAL_RECOVERY_SECONDS,
        }
    }
}

impl Default for SchedulingSettings {
    fn default() -> Self {
        Self {
            morning_hour: scheduling::MORNING_START_HOUR,
            afternoon_hour: scheduling::AFTERNOON_START_HOUR,
            evening_hour: scheduling::EVENING_START_HOUR,
        }
    }
}
