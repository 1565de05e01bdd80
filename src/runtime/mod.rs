//! 容器运行时查询接口
//! check 层只通过这个 trait 访问运行时，便于用合成描述符做测试

pub mod docker;

pub use docker::DockerCli;

use crate::check::container::{ContainerDescriptor, ResourceUsage};
use crate::utils::Result;

pub trait ContainerRuntime {
    /// Pre-flight 连通性检查
    fn ping(&self) -> Result<()>;

    /// 当前 running 容器的 ID 列表
    fn list_running(&self) -> Result<Vec<String>>;

    /// 按名称或 ID 取完整描述符
    fn inspect(&self, id: &str) -> Result<ContainerDescriptor>;

    /// 即时资源采样，尽力而为（None 表示不可用，不是错误）
    fn sample_stats(&self, id: &str) -> Option<ResourceUsage>;

    /// 最近的健康检查输出行，尽力而为
    fn health_log_tail(&self, id: &str, lines: usize) -> Option<Vec<String>>;
}
