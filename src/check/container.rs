//! 数据模型：容器描述符与生命周期 / 健康检查状态

use serde::{Deserialize, Serialize};

/// Docker 报告的粗粒度容器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    Created,
    Running,
    Paused,
    Restarting,
    Removing,
    Exited,
    Dead,
    Unknown,
}

impl LifecycleState {
    pub fn parse(s: &str) -> Self {
        match s {
            "created"    => LifecycleState::Created,
            "running"    => LifecycleState::Running,
            "paused"     => LifecycleState::Paused,
            "restarting" => LifecycleState::Restarting,
            "removing"   => LifecycleState::Removing,
            "exited"     => LifecycleState::Exited,
            "dead"       => LifecycleState::Dead,
            _            => LifecycleState::Unknown,
        }
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LifecycleState::Created    => "created",
            LifecycleState::Running    => "running",
            LifecycleState::Paused     => "paused",
            LifecycleState::Restarting => "restarting",
            LifecycleState::Removing   => "removing",
            LifecycleState::Exited     => "exited",
            LifecycleState::Dead       => "dead",
            LifecycleState::Unknown    => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// 容器自带 healthcheck 探针的结果，与生命周期状态相互独立
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Unhealthy,
    Starting,
    None,
}

impl HealthState {
    /// inspect 里没有 .State.Health 的容器（未定义 healthcheck）归入 None
    pub fn parse(s: Option<&str>) -> Self {
        match s {
            Some("healthy")   => HealthState::Healthy,
            Some("unhealthy") => HealthState::Unhealthy,
            Some("starting")  => HealthState::Starting,
            _                 => HealthState::None,
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HealthState::Healthy   => "healthy",
            HealthState::Unhealthy => "unhealthy",
            HealthState::Starting  => "starting",
            HealthState::None      => "none",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerDescriptor {
    pub id: String,
    pub name: String,
    pub image: String,
    pub created: String,            // 截断到日历日期
    pub state: LifecycleState,
    pub health: HealthState,
    pub pid: i64,
    pub restart_count: i64,
    pub ports: Vec<PortMapping>,
    pub resource_usage: Option<ResourceUsage>,
    pub health_log: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortMapping {
    pub host_port: String,
    pub container_port: String,
    pub protocol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub cpu_percent: f64,
    pub memory_usage: u64,
    pub memory_limit: u64,
    pub memory_percent: f64,
    pub net_rx: u64,
    pub net_tx: u64,
}
