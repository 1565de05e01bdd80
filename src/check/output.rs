//! 输出层：逐容器渲染报告块，末尾渲染汇总
//! 渲染只做展示，永远不改变分级结果，也不会让整轮巡检失败

use crate::check::classify::RunSummary;
use crate::check::container::{
    ContainerDescriptor, HealthState, LifecycleState, PortMapping, ResourceUsage,
};
use crate::utils::DockpulseError;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

const NA: &str = "n/a";

pub struct Report {
    use_color: bool,
}

impl Report {
    pub fn new(use_color: bool) -> Self {
        Report { use_color }
    }

    pub fn container(&self, c: &ContainerDescriptor) {
        print!("{}", container_block(c, self.use_color));
    }

    pub fn fetch_failure(&self, id: &str, err: &DockpulseError) {
        print!("{}", failure_block(id, err, self.use_color));
    }

    pub fn no_containers(&self) {
        println!("No running containers to check.");
    }

    pub fn summary(&self, s: &RunSummary) {
        print!("{}", summary_block(s, self.use_color));
    }
}

// ── 字符串构建 ──────────────────────────────────────────────────────────────

fn paint(text: &str, color: &str, on: bool) -> String {
    if on {
        format!("{}{}{}", color, text, RESET)
    } else {
        text.to_string()
    }
}

fn status_icon(state: LifecycleState) -> &'static str {
    match state {
        LifecycleState::Running => "●",
        LifecycleState::Paused  => "⏸",
        _                       => "○",
    }
}

fn state_label(state: LifecycleState, on: bool) -> String {
    let color = match state {
        LifecycleState::Running => GREEN,
        LifecycleState::Paused  => YELLOW,
        _                       => DIM,
    };
    paint(&state.to_string(), color, on)
}

fn health_label(health: HealthState, on: bool) -> String {
    let color = match health {
        HealthState::Healthy   => GREEN,
        HealthState::Unhealthy => RED,
        HealthState::Starting  => YELLOW,
        HealthState::None      => DIM,
    };
    paint(&health.to_string(), color, on)
}

fn container_block(c: &ContainerDescriptor, color: bool) -> String {
    let mut s = String::new();
    s.push_str(&format!(
        "  {} {} [{}]\n",
        status_icon(c.state),
        c.name,
        state_label(c.state, color)
    ));
    s.push_str(&format!("      ID         : {}\n", c.id));
    s.push_str(&format!("      Image      : {}\n", c.image));
    s.push_str(&format!("      Created    : {}\n", c.created));
    s.push_str(&format!("      Health     : {}\n", health_label(c.health, color)));
    s.push_str(&format!("      PID        : {}\n", c.pid));
    s.push_str(&format!("      Restarts   : {}\n", c.restart_count));
    s.push_str(&resource_lines(c.resource_usage.as_ref()));
    s.push_str(&format!("      Ports      : {}\n", ports_summary(&c.ports)));
    if c.health == HealthState::Unhealthy {
        s.push_str(&health_log_lines(c.health_log.as_deref()));
    }
    s.push('\n');
    s
}

fn resource_lines(u: Option<&ResourceUsage>) -> String {
    match u {
        Some(u) => format!(
            "      CPU        : {:.2}%\n      Memory     : {} / {} ({:.1}%)\n      Net I/O    : rx={} tx={}\n",
            u.cpu_percent,
            fmt_bytes(u.memory_usage),
            fmt_bytes(u.memory_limit),
            u.memory_percent,
            fmt_bytes(u.net_rx),
            fmt_bytes(u.net_tx),
        ),
        None => format!(
            "      CPU        : {na}\n      Memory     : {na}\n      Net I/O    : {na}\n",
            na = NA
        ),
    }
}

fn ports_summary(ports: &[PortMapping]) -> String {
    if ports.is_empty() {
        return "(none)".to_string();
    }
    ports
        .iter()
        .map(|p| format!("{} → {}/{}", p.host_port, p.container_port, p.protocol))
        .collect::<Vec<_>>()
        .join(", ")
}

fn health_log_lines(log: Option<&[String]>) -> String {
    match log {
        Some(lines) if !lines.is_empty() => {
            let mut s = format!("      Health log (last {}):\n", lines.len());
            for line in lines {
                s.push_str(&format!("        {}\n", line));
            }
            s
        }
        _ => "      Health log : (no output)\n".to_string(),
    }
}

fn failure_block(id: &str, err: &DockpulseError, color: bool) -> String {
    format!("  {} {}: {}\n\n", paint("✗", RED, color), id, err)
}

fn summary_block(s: &RunSummary, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "─".repeat(60)));
    out.push_str("  SUMMARY\n");
    out.push_str(&format!("{}\n", "─".repeat(60)));
    out.push_str(&format!("  Checked    : {}\n", s.total));
    if s.healthy > 0 {
        out.push_str(&format!("  {} Healthy  : {}\n", paint("✓", GREEN, color), s.healthy));
    }
    if s.warnings > 0 {
        out.push_str(&format!("  {} Warnings : {}\n", paint("⚠", YELLOW, color), s.warnings));
    }
    if s.problems > 0 {
        out.push_str(&format!("  {} Problems : {}\n", paint("✗", RED, color), s.problems));
    }
    out
}

// ── 格式化工具 ───────────────────────────────────────────────────────────────

fn fmt_bytes(b: u64) -> String {
    if b >= 1 << 30 {
        format!("{:.1}GiB", b as f64 / (1u64 << 30) as f64)
    } else if b >= 1 << 20 {
        format!("{:.1}MiB", b as f64 / (1u64 << 20) as f64)
    } else if b >= 1 << 10 {
        format!("{:.1}KiB", b as f64 / (1u64 << 10) as f64)
    } else {
        format!("{}B", b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(state: LifecycleState, health: HealthState) -> ContainerDescriptor {
        ContainerDescriptor {
            id: "0123456789ab".to_string(),
            name: "web".to_string(),
            image: "nginx:1.25".to_string(),
            created: "2024-03-05".to_string(),
            state,
            health,
            pid: 4321,
            restart_count: 1,
            ports: vec![],
            resource_usage: None,
            health_log: None,
        }
    }

    #[test]
    fn ports_render_as_host_to_container_pairs() {
        let ports = vec![
            PortMapping {
                host_port: "8080".to_string(),
                container_port: "80".to_string(),
                protocol: "tcp".to_string(),
            },
            PortMapping {
                host_port: "8443".to_string(),
                container_port: "443".to_string(),
                protocol: "tcp".to_string(),
            },
        ];
        assert_eq!(ports_summary(&ports), "8080 → 80/tcp, 8443 → 443/tcp");
    }

    #[test]
    fn empty_ports_render_none_marker() {
        assert_eq!(ports_summary(&[]), "(none)");
    }

    #[test]
    fn missing_stats_render_na_markers() {
        let block = container_block(&descriptor(LifecycleState::Running, HealthState::Healthy), false);
        assert!(block.contains("CPU        : n/a"));
        assert!(block.contains("Memory     : n/a"));
        assert!(block.contains("Net I/O    : n/a"));
    }

    #[test]
    fn sampled_stats_render_formatted_values() {
        let mut c = descriptor(LifecycleState::Running, HealthState::Healthy);
        c.resource_usage = Some(ResourceUsage {
            cpu_percent: 1.52,
            memory_usage: 120 * 1024 * 1024,
            memory_limit: 1024 * 1024 * 1024,
            memory_percent: 11.7,
            net_rx: 1024,
            net_tx: 2048,
        });
        let block = container_block(&c, false);
        assert!(block.contains("CPU        : 1.52%"));
        assert!(block.contains("Memory     : 120.0MiB / 1.0GiB (11.7%)"));
        assert!(block.contains("Net I/O    : rx=1.0KiB tx=2.0KiB"));
    }

    #[test]
    fn no_color_output_has_no_escape_codes() {
        let mut c = descriptor(LifecycleState::Running, HealthState::Unhealthy);
        c.health_log = Some(vec!["probe failed".to_string()]);
        let block = container_block(&c, false);
        assert!(!block.contains('\x1b'));

        let colored = container_block(&c, true);
        assert!(colored.contains('\x1b'));
    }

    #[test]
    fn unhealthy_block_includes_log_excerpt_or_placeholder() {
        let mut c = descriptor(LifecycleState::Running, HealthState::Unhealthy);
        c.health_log = Some(vec!["curl: (7) connection refused".to_string()]);
        let block = container_block(&c, false);
        assert!(block.contains("Health log (last 1):"));
        assert!(block.contains("curl: (7) connection refused"));

        c.health_log = None;
        let block = container_block(&c, false);
        assert!(block.contains("Health log : (no output)"));
    }

    #[test]
    fn healthy_block_has_no_log_section() {
        let block = container_block(&descriptor(LifecycleState::Running, HealthState::Healthy), false);
        assert!(!block.contains("Health log"));
    }

    #[test]
    fn summary_omits_zero_buckets() {
        let s = RunSummary {
            total: 2,
            healthy: 2,
            warnings: 0,
            problems: 0,
        };
        let block = summary_block(&s, false);
        assert!(block.contains("Checked    : 2"));
        assert!(block.contains("Healthy"));
        assert!(!block.contains("Warnings"));
        assert!(!block.contains("Problems"));
    }

    #[test]
    fn summary_shows_every_nonzero_bucket() {
        let s = RunSummary {
            total: 3,
            healthy: 1,
            warnings: 1,
            problems: 1,
        };
        let block = summary_block(&s, false);
        assert!(block.contains("Healthy  : 1"));
        assert!(block.contains("Warnings : 1"));
        assert!(block.contains("Problems : 1"));
    }

    #[test]
    fn failure_block_names_the_target() {
        let err = DockpulseError::NotFound("ghost".to_string());
        let block = failure_block("ghost", &err, false);
        assert!(block.contains("ghost"));
        assert!(block.contains("not found"));
    }

    #[test]
    fn byte_formatting_picks_sensible_units() {
        assert_eq!(fmt_bytes(512), "512B");
        assert_eq!(fmt_bytes(2048), "2.0KiB");
        assert_eq!(fmt_bytes(3 * 1024 * 1024), "3.0MiB");
        assert_eq!(fmt_bytes(5 * 1024 * 1024 * 1024), "5.0GiB");
    }
}
