//! # convert 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 tallynorm 的 `units`

use crate::cli::convert::ConvertArgs;
use crate::utils::output;

use tallynorm::units;
use tallynorm::Result;

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    let converted = units::convert(args.value, args.from, args.to)?;
    output::print_success(&format!(
        "{} {} = {:.10e} {}",
        args.value, args.from, converted, args.to
    ));
    Ok(())
}
