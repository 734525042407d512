//! 命令调度模块：
//! - 解析 API Key 与环境变量覆盖，计算"有效参数"
//! - 按 提示词 → 生成 → 清洗 → 存储 → 预览 的顺序串联各模块

use anyhow::{bail, Context, Result};
use std::{env, path::Path, sync::{Arc, Mutex}};

use crate::{
    cli::Cli,
    client::{self, Client},
    preview::{self, ServerSlot},
    prompt, sanitize, store,
};

/// 执行一次创建流程
pub(crate) fn run(cli: Cli) -> Result<()> {
    let Cli { api_key, name, description, style, no_run, port } = cli;

    // API Key：命令行优先，其次环境变量；两者都没有则在任何网络请求前退出
    let Some(api_key) = api_key.or_else(|| env_opt_string("ANTHROPIC_API_KEY")) else {
        bail!("未提供 API Key！请设置 ANTHROPIC_API_KEY 环境变量，或使用 --api-key 参数");
    };

    // 中断处理：预览服务启动前按下 Ctrl+C 直接道别退出，
    // 启动后则改为解除服务的阻塞，走优雅停止路径
    let server_slot: ServerSlot = Arc::new(Mutex::new(None));
    {
        let slot = server_slot.clone();
        ctrlc::set_handler(move || {
            let serving = slot.lock().ok().and_then(|guard| guard.clone());
            match serving {
                Some(server) => server.unblock(),
                None => {
                    println!("\n\n👋 再见！");
                    std::process::exit(0);
                }
            }
        })
        .context("注册 Ctrl+C 处理器失败")?;
    }

    println!("\n🎨 开始创建网页应用: {}", name);
    println!("📝 描述: {}\n", description);

    // 环境变量覆盖（模型与接口地址）
    let model = env_opt_string("HUGGABLE_MODEL").unwrap_or_else(|| client::DEFAULT_MODEL.to_string());
    let api_url =
        env_opt_string("HUGGABLE_API_URL").unwrap_or_else(|| client::DEFAULT_API_URL.to_string());
    let client = Client::new(api_key, model, api_url);

    let instruction = prompt::build_prompt(&description, &style);
    println!("🤖 正在调用 {} 生成网页应用...", client.model());
    let raw = client.generate(&instruction).context("调用生成接口失败")?;

    let html = sanitize::sanitize(&raw);
    let entry = store::save(&html, &name, Path::new(store::OUTPUT_DIR))?;
    println!("✅ 应用已保存: {}", entry.display());
    println!("\n✨ 网页应用创建完成！");

    let app_dir = entry.parent().unwrap_or(Path::new("."));
    if no_run {
        println!("\n📁 应用目录: {}", app_dir.display());
        println!(
            "💡 手动预览: 进入该目录后运行任意静态文件服务，例如 python3 -m http.server {}",
            port
        );
        return Ok(());
    }

    preview::serve(app_dir, port, server_slot)
}

/// 可选读取 String 环境变量（空白视为未设置）
fn env_opt_string(key: &str) -> Option<String> {
    env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
