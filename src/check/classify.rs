//! 判定核心：生命周期 + 健康检查 → 三级结论，再折叠进汇总计数

use crate::check::container::{HealthState, LifecycleState};

/// 单个容器的巡检结论
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Healthy,
    Warning,
    Problem,
}

pub fn classify(state: LifecycleState, health: HealthState) -> Outcome {
    match (state, health) {
        (LifecycleState::Running, HealthState::Unhealthy) => Outcome::Warning,
        (LifecycleState::Running, _)                      => Outcome::Healthy,
        // 非 running 一律 Problem，健康检查状态不参与
        (_, _)                                            => Outcome::Problem,
    }
}

/// 整轮巡检的计数，按目标顺序逐个 record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub healthy: usize,
    pub warnings: usize,
    pub problems: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Healthy => self.healthy += 1,
            Outcome::Warning => self.warnings += 1,
            Outcome::Problem => self.problems += 1,
        }
    }

    /// 退出码映射：warning 和 problem 同样算失败
    pub fn all_clear(&self) -> bool {
        self.warnings == 0 && self.problems == 0
    }
}
