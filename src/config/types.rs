use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub agent: AgentConfig,
    #[serde(default)]
    pub robot: RobotConfig,
    pub bnet: BnetConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Identity announced to bnet, e.g. "AMR-123".
    pub id: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_agent_port")]
    pub port: u16,
    /// Expected task execution time, in seconds, per task id.
    /// Task ids missing from the table complete instantly.
    #[serde(default = "default_exec_times")]
    pub exec_times_sec: HashMap<String, u64>,
    #[serde(default = "default_battery_decay")]
    pub battery_decay_per_sec: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_robot_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BnetConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_bnet_port")]
    pub port: u16,
    /// Place the agent subscription token is inserted at.
    pub place_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl AgentConfig {
    pub fn exec_times(&self) -> HashMap<String, Duration> {
        self.exec_times_sec
            .iter()
            .map(|(task, secs)| (task.clone(), Duration::from_secs(*secs)))
            .collect()
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_robot_port(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_agent_port() -> u16 {
    8081
}

fn default_robot_port() -> u16 {
    8090
}

fn default_bnet_port() -> u16 {
    8080
}

fn default_exec_times() -> HashMap<String, u64> {
    HashMap::from([
        ("goto_fast".to_string(), 5),
        ("goto_medium".to_string(), 10),
        ("goto_slow".to_string(), 20),
        ("charge".to_string(), 20),
    ])
}

fn default_battery_decay() -> f64 {
    0.005
}

fn default_log_level() -> String {
    "info".to_string()
}
