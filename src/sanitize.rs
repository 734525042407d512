//! 响应清洗模块：
//! - 剥离模型响应中的 Markdown 代码围栏
//! - 缺少文档声明时补上 `<!DOCTYPE html>`

const HTML_FENCE: &str = "```html";
const FENCE: &str = "```";
const DOCTYPE: &str = "<!DOCTYPE html>";

/// 清洗模型响应，得到一份独立的 HTML 文档文本。
/// 围栏提取采用"第一个开围栏到最后一个闭围栏"的策略，
/// 以容忍块内再出现围栏标记。
pub(crate) fn sanitize(raw: &str) -> String {
    let mut text = if let Some(open) = raw.find(HTML_FENCE) {
        extract_fenced(raw, open + HTML_FENCE.len())
    } else if let Some(open) = raw.find(FENCE) {
        extract_fenced(raw, open + FENCE.len())
    } else {
        raw.to_string()
    };

    let head = text.trim_start();
    if !(head.starts_with(DOCTYPE) || head.starts_with("<html")) {
        text = format!("{}\n{}", DOCTYPE, text);
    }
    text.trim().to_string()
}

/// 截取 `start` 到最后一个闭围栏之间的内容；若闭围栏不在开围栏之后则视为空
fn extract_fenced(raw: &str, start: usize) -> String {
    let inner = match raw.rfind(FENCE) {
        Some(end) if end > start => &raw[start..end],
        _ => "",
    };
    inner.trim().to_string()
}
