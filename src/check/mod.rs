//! 健康巡检：pre-flight → 目标解析 → 逐个采集分级 → 渲染 → 汇总

pub mod classify;
pub mod container;
pub mod output;

use crate::check::classify::{classify, Outcome, RunSummary};
use crate::check::container::{HealthState, LifecycleState};
use crate::check::output::Report;
use crate::runtime::ContainerRuntime;
use crate::utils::Result;

pub fn run_check<R: ContainerRuntime>(
    runtime: &R,
    targets: &[String],
    log_tail: usize,
    use_color: bool,
) -> Result<RunSummary> {
    // daemon 不可达直接终止，不输出任何报告
    runtime.ping()?;

    let report = Report::new(use_color);

    let ids: Vec<String> = if targets.is_empty() {
        runtime.list_running()?
    } else {
        targets.to_vec()
    };

    if ids.is_empty() {
        report.no_containers();
        return Ok(RunSummary::default());
    }

    let mut summary = RunSummary::default();
    for id in &ids {
        let outcome = check_one(runtime, id, log_tail, &report);
        summary.record(outcome);
    }

    report.summary(&summary);
    Ok(summary)
}

fn check_one<R: ContainerRuntime>(
    runtime: &R,
    id: &str,
    log_tail: usize,
    report: &Report,
) -> Outcome {
    let mut c = match runtime.inspect(id) {
        Ok(c) => c,
        Err(e) => {
            // 单个目标失败不终止整轮巡检
            report.fetch_failure(id, &e);
            return Outcome::Problem;
        }
    };

    // 资源采样与健康日志都是尽力而为，拿不到不影响分级
    if c.state == LifecycleState::Running {
        c.resource_usage = runtime.sample_stats(id);
    }
    if c.health == HealthState::Unhealthy {
        c.health_log = runtime.health_log_tail(id, log_tail);
    }

    let outcome = classify(c.state, c.health);
    report.container(&c);
    outcome
}
