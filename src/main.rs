//! huggable 入口：解析命令行并执行创建流程

mod cli;
mod client;
mod commands;
mod preview;
mod prompt;
mod sanitize;
mod store;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(e) = commands::run(cli) {
        eprintln!("\n❌ 错误: {:#}", e);
        std::process::exit(1);
    }
}
