//! # 批量执行器
//!
//! 在 rayon 线程池上并行归一化多个计分表。
//!
//! ## 功能
//! - 每个计分表相互独立，可任意并行
//! - 进度条显示
//! - 失败不影响其他文件，最终汇总
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon`, `num_cpus`

use crate::utils::progress;

use rayon::prelude::*;
use std::path::PathBuf;
use tallynorm::{Result, TallyError};

/// 单个计分表的处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 已写出归一化结果
    Success,
    /// 跳过（输出已存在）
    Skipped,
    /// 失败 (文件路径, 错误信息)
    Failed(String, String),
}

/// 批量处理统计
#[derive(Debug, Default)]
pub struct BatchResult {
    pub success: usize,
    pub skipped: usize,
    pub failed: usize,
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success => self.success += 1,
            ProcessResult::Skipped => self.skipped += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    jobs: usize,
}

impl BatchRunner {
    /// `jobs == 0` 时使用全部 CPU 核心
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行处理计分表列表
    pub fn run<F>(&self, tables: &[PathBuf], processor: F) -> Result<BatchResult>
    where
        F: Fn(&PathBuf) -> ProcessResult + Sync + Send,
    {
        let pb = progress::create_progress_bar(tables.len() as u64, "Normalizing");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| TallyError::InvalidArgument(format!("thread pool: {}", e)))?;

        let results: Vec<ProcessResult> = pool.install(|| {
            tables
                .par_iter()
                .map(|table| {
                    let result = processor(table);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut summary = BatchResult::default();
        for result in results {
            summary.merge(result);
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_counts() {
        let mut summary = BatchResult::default();
        summary.merge(ProcessResult::Success);
        summary.merge(ProcessResult::Skipped);
        summary.merge(ProcessResult::Failed("c.csv".into(), "bad unit".into()));
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.failures, vec![("c.csv".to_string(), "bad unit".to_string())]);
    }

    #[test]
    fn test_run_visits_every_table() {
        let tables: Vec<PathBuf> = (0..16).map(|i| PathBuf::from(format!("run_{}.csv", i))).collect();
        let summary = BatchRunner::new(2)
            .run(&tables, |p| {
                if p.to_string_lossy().ends_with("3.csv") {
                    ProcessResult::Failed(p.display().to_string(), "boom".into())
                } else {
                    ProcessResult::Success
                }
            })
            .unwrap();
        // run_3 和 run_13
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.success, 14);
    }
}
