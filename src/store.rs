//! 产物存储模块：
//! - 将应用名规范化为目录 slug
//! - 创建项目目录并写出入口文件

use anyhow::{bail, Context, Result};
use std::{fs, path::{Path, PathBuf}};

/// 所有生成应用的根目录（相对当前工作目录）
pub(crate) const OUTPUT_DIR: &str = "generated_apps";
/// 项目入口文件名
pub(crate) const ENTRY_FILE: &str = "index.html";

/// 应用名转目录 slug：空格换下划线并整体小写
pub(crate) fn slugify(name: &str) -> String {
    name.replace(' ', "_").to_lowercase()
}

/// 将清洗后的 HTML 写到 `<out_root>/<slug>/index.html`，返回入口文件路径。
/// 同名重复运行会直接覆盖旧产物。
pub(crate) fn save(html: &str, app_name: &str, out_root: &Path) -> Result<PathBuf> {
    let slug = slugify(app_name);
    // 拒绝会越出输出目录的名称
    if slug.is_empty() || slug == "." || slug == ".." || slug.contains('/') || slug.contains('\\') {
        bail!("应用名称无法用作目录名: {:?}", app_name);
    }

    let app_dir = out_root.join(&slug);
    if !app_dir.exists() {
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("创建项目目录失败: {}", app_dir.display()))?;
    }

    let entry = app_dir.join(ENTRY_FILE);
    fs::write(&entry, html).with_context(|| format!("写入入口文件失败: {}", entry.display()))?;
    Ok(entry.canonicalize().unwrap_or(entry))
}
