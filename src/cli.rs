//! CLI 定义模块：仅负责命令行参数结构体与解析
//! 将 clap 的声明与业务逻辑解耦，便于在其它模块中复用参数。

use clap::Parser;

/// 顶层 CLI 入口
#[derive(Parser, Debug)]
#[command(name = "huggable", about = "用 Claude 从一句描述生成可运行的网页应用", version)]
pub(crate) struct Cli {
    /// Anthropic API Key，缺省读取环境变量 ANTHROPIC_API_KEY
    #[arg(long, value_name = "KEY")]
    pub(crate) api_key: Option<String>,
    /// 应用名称（用于生成项目目录名）
    #[arg(long, value_name = "NAME")]
    pub(crate) name: String,
    /// 应用功能描述
    #[arg(long, value_name = "DESC")]
    pub(crate) description: String,
    /// 风格偏好（例如 "Dark mode, neon colors, cyberpunk"）
    #[arg(long, value_name = "STYLE", default_value = "")]
    pub(crate) style: String,
    /// 创建完成后不启动本地预览服务
    #[arg(long)]
    pub(crate) no_run: bool,
    /// 本地预览服务端口
    #[arg(long, value_name = "PORT", default_value_t = 8080)]
    pub(crate) port: u16,
}
