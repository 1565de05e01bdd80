//! Docker CLI 查询实现
//! 来源：docker version / docker ps / docker inspect / docker stats

use std::process::Command;

use crate::check::container::{
    ContainerDescriptor, HealthState, LifecycleState, PortMapping, ResourceUsage,
};
use crate::runtime::ContainerRuntime;
use crate::utils::{DockpulseError, Result};

pub struct DockerCli;

impl DockerCli {
    pub fn new() -> Self {
        DockerCli
    }
}

impl ContainerRuntime for DockerCli {
    fn ping(&self) -> Result<()> {
        let out = Command::new("docker")
            .args(&["version", "--format", "{{.Server.Version}}"])
            .output()
            .map_err(|e| DockpulseError::Docker(format!("docker not found: {}", e)))?;

        if !out.status.success() {
            return Err(DockpulseError::Docker(
                "docker daemon unreachable — is Docker running?".to_string(),
            ));
        }
        Ok(())
    }

    fn list_running(&self) -> Result<Vec<String>> {
        let out = Command::new("docker")
            .args(&["ps", "--format", "{{.ID}}"])
            .output()
            .map_err(|e| DockpulseError::Docker(format!("docker ps failed: {}", e)))?;

        if !out.status.success() {
            return Err(DockpulseError::Docker("docker ps failed".to_string()));
        }

        Ok(String::from_utf8_lossy(&out.stdout)
            .lines()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect())
    }

    fn inspect(&self, id: &str) -> Result<ContainerDescriptor> {
        let out = Command::new("docker")
            .args(&["inspect", id])
            .output()
            .map_err(|e| DockpulseError::Docker(format!("docker inspect failed: {}", e)))?;

        if !out.status.success() {
            log::debug!("docker inspect {}: {}", id, String::from_utf8_lossy(&out.stderr));
            return Err(DockpulseError::NotFound(id.to_string()));
        }

        let arr: serde_json::Value = serde_json::from_slice(&out.stdout)
            .map_err(|e| DockpulseError::Parse(format!("inspect JSON: {}", e)))?;

        let c = arr
            .as_array()
            .and_then(|a| a.first())
            .ok_or_else(|| DockpulseError::Parse("empty inspect result".to_string()))?;

        Ok(parse_inspect(c))
    }

    fn sample_stats(&self, id: &str) -> Option<ResourceUsage> {
        let out = Command::new("docker")
            .args(&["stats", "--no-stream", "--format", "{{json .}}", id])
            .output()
            .ok()?;

        if !out.status.success() {
            log::debug!("docker stats {}: {}", id, String::from_utf8_lossy(&out.stderr));
            return None;
        }

        let j: serde_json::Value = serde_json::from_slice(&out.stdout).ok()?;
        Some(parse_stats(&j))
    }

    fn health_log_tail(&self, id: &str, lines: usize) -> Option<Vec<String>> {
        let out = Command::new("docker")
            .args(&["inspect", "--format", "{{json .State.Health.Log}}", id])
            .output()
            .ok()?;

        if !out.status.success() {
            log::debug!("health log {}: {}", id, String::from_utf8_lossy(&out.stderr));
            return None;
        }

        let log: serde_json::Value = serde_json::from_slice(&out.stdout).ok()?;
        let entries = log.as_array()?;

        // Log 条目按时间顺序排列，取所有探针输出的最后 N 行
        let mut all = Vec::new();
        for e in entries {
            if let Some(output) = e["Output"].as_str() {
                all.extend(
                    output
                        .lines()
                        .map(|l| l.trim_end().to_string())
                        .filter(|l| !l.is_empty()),
                );
            }
        }
        let start = all.len().saturating_sub(lines);
        Some(all[start..].to_vec())
    }
}

// ── inspect 解析 ────────────────────────────────────────────────────────────

fn parse_inspect(c: &serde_json::Value) -> ContainerDescriptor {
    let id = c["Id"].as_str().unwrap_or("").chars().take(12).collect();
    let name = c["Name"].as_str().unwrap_or("")
        .trim_start_matches('/').to_string();
    let image = c["Config"]["Image"].as_str().unwrap_or("").to_string();

    let state  = LifecycleState::parse(c["State"]["Status"].as_str().unwrap_or(""));
    let health = HealthState::parse(c["State"]["Health"]["Status"].as_str());

    ContainerDescriptor {
        id,
        name,
        image,
        created: created_date(c["Created"].as_str().unwrap_or("")),
        state,
        health,
        pid: c["State"]["Pid"].as_i64().unwrap_or(0),
        restart_count: c["RestartCount"].as_i64().unwrap_or(0),
        ports: parse_ports(c),
        resource_usage: None,
        health_log: None,
    }
}

/// 创建时间截断到日历日期："2024-03-05T08:12:33.123456789Z" → "2024-03-05"
fn created_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.split('T').next().unwrap_or("").to_string())
}

fn parse_ports(c: &serde_json::Value) -> Vec<PortMapping> {
    let mut ports = Vec::new();
    if let Some(bindings) = c["HostConfig"]["PortBindings"].as_object() {
        for (container_port, bindings_arr) in bindings {
            let (cport, proto) = container_port
                .split_once('/')
                .map(|(p, r)| (p.to_string(), r.to_string()))
                .unwrap_or_else(|| (container_port.clone(), "tcp".to_string()));

            if let Some(arr) = bindings_arr.as_array() {
                for b in arr {
                    ports.push(PortMapping {
                        host_port:      b["HostPort"].as_str().unwrap_or("").to_string(),
                        container_port: cport.clone(),
                        protocol:       proto.clone(),
                    });
                }
            }
        }
    }
    ports
}

// ── docker stats 解析 ───────────────────────────────────────────────────────

// docker stats json 的字段值都是展示字符串，如 "1.5GiB / 3.8GiB"
fn parse_stats(j: &serde_json::Value) -> ResourceUsage {
    let (memory_usage, memory_limit) = parse_pair(j["MemUsage"].as_str().unwrap_or(""));
    let (net_rx, net_tx) = parse_pair(j["NetIO"].as_str().unwrap_or(""));

    ResourceUsage {
        cpu_percent:    parse_pct(j["CPUPerc"].as_str().unwrap_or("")),
        memory_usage,
        memory_limit,
        memory_percent: parse_pct(j["MemPerc"].as_str().unwrap_or("")),
        net_rx,
        net_tx,
    }
}

/// 解析 "1.5%" → f64
fn parse_pct(s: &str) -> f64 {
    s.trim().trim_end_matches('%').parse().unwrap_or(0.0)
}

/// 解析 "1.5MiB / 2.3MiB" → (left_bytes, right_bytes)
fn parse_pair(s: &str) -> (u64, u64) {
    let mut parts = s.splitn(2, '/');
    let a = parts.next().map(|v| parse_size(v.trim())).unwrap_or(0);
    let b = parts.next().map(|v| parse_size(v.trim())).unwrap_or(0);
    (a, b)
}

/// 解析 "1.5GiB" → bytes（"--" 和空串归 0）
fn parse_size(s: &str) -> u64 {
    let s = s.trim();
    if s.is_empty() || s == "0B" || s == "--" {
        return 0;
    }
    let split = s.find(|c: char| c.is_alphabetic()).unwrap_or(s.len());
    let (num_part, unit) = s.split_at(split);
    let num: f64 = num_part.trim().parse().unwrap_or(0.0);
    match unit.to_uppercase().trim_end_matches('B') {
        "KI" | "K" => (num * 1024.0) as u64,
        "MI" | "M" => (num * 1024.0 * 1024.0) as u64,
        "GI" | "G" => (num * 1024.0 * 1024.0 * 1024.0) as u64,
        "TI" | "T" => (num * 1024.0 * 1024.0 * 1024.0 * 1024.0) as u64,
        _ => num as u64,
    }
}
