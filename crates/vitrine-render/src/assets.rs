//! Static script asset and CSS post-processing.

/// The fixed export script: smooth-scroll for in-page anchors and a
/// scroll-linked parallax offset on the hero background. Not parameterized.
pub fn export_script() -> String {
    EXPORT_JS.to_string()
}

/// Minify CSS using lightningcss.
pub fn minify_css(css: &str) -> Result<String, String> {
    use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| format!("CSS parse error: {}", e))?;

    let minified = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("CSS minify error: {}", e))?;

    Ok(minified.code)
}

const EXPORT_JS: &str = r##"// Smooth anchor scrolling
document.querySelectorAll('a[href^="#"]').forEach((link) => {
  link.addEventListener('click', (event) => {
    event.preventDefault();
    const target = document.querySelector(link.getAttribute('href'));
    if (target) {
      target.scrollIntoView({ behavior: 'smooth' });
    }
  });
});

// Scroll-linked parallax on the hero media
window.addEventListener('scroll', () => {
  const media = document.querySelector('.hero-media');
  if (media) {
    media.style.transform = `translateY(${window.scrollY * 0.08}px)`;
  }
});
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_targets_anchors_and_hero() {
        let js = export_script();

        assert!(js.contains(r##"a[href^="#"]"##));
        assert!(js.contains(".hero-media"));
    }

    #[test]
    fn minifies_css() {
        let css = "body {\n  margin: 0;\n  color: #111;\n}\n";

        let minified = minify_css(css).unwrap();

        assert!(minified.len() < css.len());
        assert!(minified.contains("margin:0"));
    }
}
