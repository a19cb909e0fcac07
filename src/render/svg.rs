/// Standalone SVG documents for printing
use super::path::to_path;
use crate::config;
use crate::models::QrSymbol;

/// SVG output options
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Printed edge length in millimetres
    pub size_mm: f32,
    /// Fill for dark modules
    pub foreground: String,
    /// Backing rectangle fill
    pub background: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            size_mm: config::badge_size_mm(),
            foreground: "#000".to_string(),
            background: "#fff".to_string(),
        }
    }
}

/// Render `symbol` in an `N`x`N` viewBox scaled to `options.size_mm`
pub fn to_svg(symbol: &QrSymbol, options: &SvgOptions) -> String {
    let n = symbol.module_count;
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {n} {n}" "#,
            r#"width="{size}mm" height="{size}mm" shape-rendering="crispEdges">"#,
            r#"<rect width="{n}" height="{n}" fill="{bg}"/>"#,
            r#"<path d="{path}" fill="{fg}"/>"#,
            "</svg>"
        ),
        n = n,
        size = options.size_mm,
        bg = options.background,
        path = to_path(&symbol.modules),
        fg = options.foreground,
    )
}
