//! 本地预览模块：
//! - 内置极简 HTTP 静态文件服务器，服务指定根目录
//! - 启动后自动打开系统浏览器，Ctrl+C 时优雅停止

use anyhow::Result;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tiny_http::{Header, Response, Server};

/// 运行中的预览服务句柄槽。中断处理器通过它找到服务并解除阻塞；
/// 服务尚未启动时槽为空。
pub(crate) type ServerSlot = Arc<Mutex<Option<Arc<Server>>>>;

/// 在 `root` 上启动本地静态文件服务并阻塞，直到被中断。
/// 根目录通过参数传入，不改动进程工作目录。
pub(crate) fn serve(root: &Path, port: u16, slot: ServerSlot) -> Result<()> {
    let addr = format!("127.0.0.1:{}", port);
    let server = Arc::new(
        Server::http(&addr).map_err(|e| anyhow::anyhow!("绑定地址失败: {}: {}", addr, e))?,
    );
    if let Ok(mut guard) = slot.lock() {
        *guard = Some(server.clone());
    }

    println!("\n🚀 服务已启动: http://localhost:{}", port);
    println!("按 Ctrl+C 停止服务");
    let _ = webbrowser::open(&format!("http://localhost:{}", port));

    for rq in server.incoming_requests() {
        let path_only = rq.url().split('?').next().unwrap_or("/");
        let fpath = resolve_request_path(root, path_only);
        let resp = match fs::read(&fpath) {
            Ok(bytes) => Response::from_data(bytes)
                .with_header(
                    Header::from_bytes(&b"Content-Type"[..], content_type_for_path(&fpath).as_bytes())
                        .unwrap(),
                )
                .with_status_code(200),
            Err(_) => Response::from_string("Not Found").with_status_code(404),
        };
        let _ = rq.respond(resp);
    }

    println!("\n👋 服务已停止");
    Ok(())
}

/// 把请求路径映射到根目录下的文件（过滤空段与 `.`/`..`）；
/// 目录请求回退到 index.html
fn resolve_request_path(root: &Path, path_only: &str) -> PathBuf {
    let mut segs = Vec::new();
    for s in path_only.split('/') {
        let t = s.trim();
        if t.is_empty() || t == "." || t == ".." {
            continue;
        }
        segs.push(t);
    }
    let mut fpath = root.to_path_buf();
    for s in &segs {
        fpath.push(s);
    }
    if path_only.ends_with('/') || segs.is_empty() {
        fpath.push("index.html");
    }
    fpath
}

fn content_type_for_path(p: &Path) -> String {
    match p.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase().as_str() {
        "html" => "text/html; charset=utf-8".into(),
        "css" => "text/css; charset=utf-8".into(),
        "js" => "application/javascript; charset=utf-8".into(),
        "json" => "application/json; charset=utf-8".into(),
        "txt" => "text/plain; charset=utf-8".into(),
        "svg" => "image/svg+xml".into(),
        "png" => "image/png".into(),
        "jpg" | "jpeg" => "image/jpeg".into(),
        "gif" => "image/gif".into(),
        "webp" => "image/webp".into(),
        "ico" => "image/x-icon".into(),
        _ => "application/octet-stream".into(),
    }
}
