//! # 计分表 CSV 解析器
//!
//! 读取由输运程序结果导出的计分表，每行一个 (计数器, 计分) 组合：
//!
//! ```text
//! tally,score,mean,std_dev,unit
//! core,heating-local,7.623e7,1.1e5,eV
//! core,fission,0.3955335940378975,0.0012,count
//! ```
//!
//! 所有数值均为每源粒子量。以 `#` 开头的行为注释。
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs`, `commands/check.rs` 使用
//! - 使用 `models/` 数据模型，实现 `TallySource`
//! - 使用 `csv` + `serde` 反序列化

use crate::error::{Result, TallyError};
use crate::models::{TallyResult, TallySource, TransportMode};
use crate::units::Unit;

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// CSV 原始行
#[derive(Debug, Deserialize)]
struct TallyRow {
    tally: String,
    score: String,
    mean: f64,
    std_dev: f64,
    unit: String,
}

/// 计分表中的一项
#[derive(Debug, Clone)]
pub struct TallyEntry {
    /// 计数器名称
    pub tally: String,
    /// 计分名称
    pub score: String,
    /// 每源粒子结果
    pub result: TallyResult,
}

/// 一次模拟的全部计分结果
#[derive(Debug, Clone)]
pub struct TallySet {
    pub source: String,
    pub mode: TransportMode,
    pub entries: Vec<TallyEntry>,
}

impl TallySet {
    pub fn new(source: impl Into<String>, mode: TransportMode) -> Self {
        TallySet {
            source: source.into(),
            mode,
            entries: Vec::new(),
        }
    }

    /// 添加一项
    pub fn push(&mut self, tally: impl Into<String>, score: impl Into<String>, result: TallyResult) {
        self.entries.push(TallyEntry {
            tally: tally.into(),
            score: score.into(),
            result,
        });
    }

    /// 查找计分项（计数器未指定时取第一个匹配）
    pub fn find_entry(&self, score: &str, tally: Option<&str>) -> Result<&TallyEntry> {
        self.entries
            .iter()
            .find(|e| e.score == score && tally.map_or(true, |t| e.tally == t))
            .ok_or_else(|| TallyError::TallyNotFound {
                score: score.to_string(),
                tally: tally.map(str::to_string),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TallySource for TallySet {
    fn transport_mode(&self) -> TransportMode {
        self.mode
    }

    fn find(&self, score: &str, tally: Option<&str>) -> Result<&TallyResult> {
        self.find_entry(score, tally).map(|e| &e.result)
    }

    fn results(&self) -> Vec<&TallyResult> {
        self.entries.iter().map(|e| &e.result).collect()
    }
}

/// 解析计分表文件
pub fn parse_tally_csv(path: &Path, mode: TransportMode) -> Result<TallySet> {
    let file = File::open(path).map_err(|e| TallyError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_tally_reader(file, &path.display().to_string(), mode)
}

/// 从任意读取器解析计分表
pub fn parse_tally_reader<R: Read>(reader: R, source: &str, mode: TransportMode) -> Result<TallySet> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut set = TallySet::new(source, mode);

    for (i, row) in rdr.deserialize::<TallyRow>().enumerate() {
        // 表头占第 1 行
        let line = i + 2;
        let row = row.map_err(|e| TallyError::ParseError {
            path: source.to_string(),
            reason: format!("row {}: {}", line, e),
        })?;

        let unit: Unit = row.unit.parse().map_err(|e: TallyError| TallyError::ParseError {
            path: source.to_string(),
            reason: format!("row {}: {}", line, e),
        })?;

        let name = format!("{}/{}", row.tally, row.score);
        let result = TallyResult::new(name, row.mean, row.std_dev, unit).map_err(
            |e| TallyError::ParseError {
                path: source.to_string(),
                reason: format!("row {}: {}", line, e),
            },
        )?;

        set.push(row.tally, row.score, result);
    }

    if set.is_empty() {
        return Err(TallyError::ParseError {
            path: source.to_string(),
            reason: "no tally rows found".to_string(),
        });
    }

    Ok(set)
}
