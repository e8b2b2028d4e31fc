//! # 计分表收集器
//!
//! 根据输入目录和文件名模式收集待归一化的计分表。
//!
//! ## 功能
//! - 逗号分隔的多个 glob 模式（支持 `*` 和 `?`）
//! - 可选递归
//! - 排除已生成的输出文件（按文件名后缀）
//! - 结果按路径排序，保证批量输出顺序稳定
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 调用
//! - 使用 `walkdir` 遍历目录

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 计分表收集器
pub struct TableCollector {
    root: PathBuf,
    patterns: Vec<String>,
    exclude_suffix: Option<String>,
    skip_dir: Option<PathBuf>,
    recursive: bool,
}

impl TableCollector {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            patterns: vec!["*.csv".to_string()],
            exclude_suffix: None,
            skip_dir: None,
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        let patterns: Vec<String> = pattern
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !patterns.is_empty() {
            self.patterns = patterns;
        }
        self
    }

    /// 跳过文件名以该后缀结尾的文件
    pub fn excluding(mut self, suffix: &str) -> Self {
        self.exclude_suffix = Some(suffix.to_string());
        self
    }

    /// 不进入该目录（通常是输出目录）
    pub fn skipping_dir(mut self, dir: &Path) -> Self {
        self.skip_dir = Some(dir.to_path_buf());
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的计分表
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.root.is_file() {
            return vec![self.root.clone()];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut tables: Vec<PathBuf> = WalkDir::new(&self.root)
            .max_depth(max_depth)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || self.skip_dir.as_deref() != Some(e.path()))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.accepts(e.path()))
            .map(|e| e.into_path())
            .collect();

        tables.sort();
        tables
    }

    fn accepts(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        if let Some(ref suffix) = self.exclude_suffix {
            if filename.ends_with(suffix.as_str()) {
                return false;
            }
        }

        self.patterns.iter().any(|p| glob_match(p, filename))
    }
}

/// 简单 glob 匹配（`*` 任意串，`?` 单字符）
fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern = pattern.as_bytes();
    let text = text.as_bytes();

    let (mut p, mut t) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some(b'*') => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(&c) if c == b'?' || c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                // 让上一个 * 多吞一个字符
                Some((star_p, star_t)) => {
                    p = star_p + 1;
                    t = star_t + 1;
                    backtrack = Some((star_p, star_t + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == b'*')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("*.csv", "tallies.csv"));
        assert!(glob_match("*.csv", "run-030kW.csv"));
        assert!(!glob_match("*.csv", "tallies.h5"));
        assert!(glob_match("run_*", "run_"));
        assert!(glob_match("run_*.csv", "run_001.csv"));
        assert!(glob_match("run?.csv", "run1.csv"));
        assert!(!glob_match("run?.csv", "run12.csv"));
        assert!(glob_match("*a*b", "xxaxxb"));
    }

    #[test]
    fn test_collect_excludes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.csv", "b.csv", "a_normalized.csv", "notes.txt"] {
            fs::write(dir.path().join(name), "tally,score,mean,std_dev,unit\n").unwrap();
        }
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.csv"), "").unwrap();

        let flat = TableCollector::new(dir.path().to_path_buf())
            .excluding("_normalized.csv")
            .collect();
        let names: Vec<_> = flat
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);

        let deep = TableCollector::new(dir.path().to_path_buf())
            .with_pattern("*.csv, *.txt")
            .excluding("_normalized.csv")
            .recursive(true)
            .collect();
        assert_eq!(deep.len(), 4);

        let skipped = TableCollector::new(dir.path().to_path_buf())
            .excluding("_normalized.csv")
            .skipping_dir(&dir.path().join("sub"))
            .recursive(true)
            .collect();
        assert_eq!(skipped.len(), 2);
    }
}
