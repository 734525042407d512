//! 提示词构造模块：把应用描述与风格偏好组装成一条生成指令

/// 未指定风格偏好时使用的默认说法
pub(crate) const DEFAULT_STYLE: &str = "Modern, clean, and engaging";

/// 组装发送给生成接口的完整指令文本。
/// `style` 为空字符串时代入默认风格说法，描述与风格均原样插入。
pub(crate) fn build_prompt(description: &str, style: &str) -> String {
    let style = if style.is_empty() { DEFAULT_STYLE } else { style };
    format!(
        "Create a complete, beautiful, and modern web application based on this description:

{}

Requirements:
1. Create a single HTML file with embedded CSS and JavaScript
2. Use modern, responsive design with animations and transitions
3. Include interactive elements and smooth user experience
4. Use contemporary design trends (gradients, shadows, glassmorphism, etc.)
5. Ensure the app is fully functional, not just a mockup
6. Include proper semantic HTML and accessibility features
7. Make it visually stunning with attention to detail

Style preferences: {}

Please provide ONLY the complete HTML code without any explanations or markdown formatting.",
        description, style
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_description_and_style_verbatim() {
        let p = build_prompt("A todo list with dark mode", "Minimalist, monochrome");
        assert!(p.contains("A todo list with dark mode"));
        assert!(p.contains("Style preferences: Minimalist, monochrome"));
        assert!(!p.contains(DEFAULT_STYLE));
    }

    #[test]
    fn empty_style_falls_back_to_default_phrase() {
        let p = build_prompt("Personal portfolio site", "");
        assert!(p.contains("Personal portfolio site"));
        assert!(p.contains(&format!("Style preferences: {}", DEFAULT_STYLE)));
    }

    #[test]
    fn whitespace_style_is_kept_as_is() {
        // 只有完全为空才回退默认风格
        let p = build_prompt("x", " ");
        assert!(p.contains("Style preferences:  \n"));
        assert!(!p.contains(DEFAULT_STYLE));
    }
}
