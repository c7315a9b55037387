//! Template engine for rendering the export page and stylesheet.

use minijinja::{context, Environment};

/// One rendered product card.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProductCard {
    /// Display name
    pub name: String,
    /// Pre-formatted price string, without the currency marker
    pub price: String,
    /// Resolved image URL (placeholder already applied)
    pub image: String,
}

/// One rendered FAQ entry.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FaqEntry {
    pub q: String,
    pub a: String,
}

/// Context for rendering the export page. Every image URL is already
/// resolved; the template itself knows nothing about placeholders.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Brand name, used for the page title, nav and footer
    pub brand: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_cta: String,
    pub hero_image: String,
    /// Product cards in catalog order
    pub products: Vec<ProductCard>,
    pub story_title: String,
    pub story_body: String,
    pub story_image: String,
    pub craft_title: String,
    pub craft_points: Vec<String>,
    pub lookbook_title: String,
    /// Lookbook slots in fixed order: lifestyle, flatlay, closeup
    pub lookbook_images: Vec<String>,
    pub testimonials: Vec<String>,
    pub faqs: Vec<FaqEntry>,
}

/// Template engine using minijinja. HTML values are auto-escaped; the
/// stylesheet template interpolates only the accent color.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");

        env.add_template_owned("styles.css".to_string(), STYLESHEET_TEMPLATE.to_string())
            .expect("Failed to add stylesheet template");

        Self { env }
    }

    /// Render the export page.
    pub fn render_page(&self, ctx: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            brand => &ctx.brand,
            hero_title => &ctx.hero_title,
            hero_subtitle => &ctx.hero_subtitle,
            hero_cta => &ctx.hero_cta,
            hero_image => &ctx.hero_image,
            products => &ctx.products,
            story_title => &ctx.story_title,
            story_body => &ctx.story_body,
            story_image => &ctx.story_image,
            craft_title => &ctx.craft_title,
            craft_points => &ctx.craft_points,
            lookbook_title => &ctx.lookbook_title,
            lookbook_images => &ctx.lookbook_images,
            testimonials => &ctx.testimonials,
            faqs => &ctx.faqs,
        })
    }

    /// Render the stylesheet for the given accent color.
    pub fn render_stylesheet(&self, accent: &str) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("styles.css")?;

        tmpl.render(context! { accent => accent })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ brand }}</title>
<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
<link href="https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;500;600&family=Inter:wght@300;400;500;600&display=swap" rel="stylesheet">
<link rel="stylesheet" href="./styles.css">
</head>
<body>
<header class="nav">
  <div class="nav-inner">
    <div class="brand">{{ brand }}</div>
    <nav>
      <a href="#collections">Collections</a>
      <a href="#story">Story</a>
      <a href="#craft">Craft</a>
      <a href="#lookbook">Lookbook</a>
      <a href="#faq">FAQ</a>
    </nav>
  </div>
</header>
<section class="hero">
  <div class="hero-content">
    <h1>{{ hero_title }}</h1>
    <p class="sub">{{ hero_subtitle }}</p>
    <a class="cta" href="#collections">{{ hero_cta }}</a>
  </div>
  <div class="hero-media" style="background-image:url('{{ hero_image }}')"></div>
</section>
<section id="collections" class="collections">
  <h2>Signature Collection</h2>
  <div class="grid">
{% for product in products %}    <div class="card">
      <div class="img" style="background-image:url('{{ product.image }}')"></div>
      <div class="info">
        <div class="name">{{ product.name }}</div>
        <div class="price">$ {{ product.price }}</div>
      </div>
    </div>
{% endfor %}  </div>
</section>
<section id="story" class="story">
  <div class="split">
    <div class="image" style="background-image:url('{{ story_image }}')"></div>
    <div class="copy">
      <h3>{{ story_title }}</h3>
      <p>{{ story_body }}</p>
    </div>
  </div>
</section>
<section id="craft" class="craft">
  <h2>{{ craft_title }}</h2>
  <div class="features">
{% for point in craft_points %}    <div class="feat"><div class="dot"></div><p>{{ point }}</p></div>
{% endfor %}  </div>
</section>
<section id="lookbook" class="lookbook">
  <h2>{{ lookbook_title }}</h2>
  <div class="masonry">
{% for image in lookbook_images %}    <img src="{{ image }}" alt="">
{% endfor %}  </div>
</section>
<section id="testimonials" class="testimonials">
{% for quote in testimonials %}  <blockquote>“{{ quote }}”</blockquote>
{% endfor %}</section>
<section id="faq" class="faq">
{% for faq in faqs %}  <details><summary>{{ faq.q }}</summary><p>{{ faq.a }}</p></details>
{% endfor %}</section>
<footer class="footer">
  <div class="inner">
    <div class="blurb">{{ brand }} · {{ hero_subtitle }}</div>
    <form class="newsletter"><input type="email" placeholder="Email"><button>Join</button></form>
  </div>
</footer>
<script src="./main.js"></script>
</body>
</html>
"##;

const STYLESHEET_TEMPLATE: &str = r##"/* Fixed export stylesheet; the accent color is the only injected value. */
:root {
  --accent: {{ accent }};
  --bg: #FAFAF8;
  --text: #111;
  --muted: #9A8C71;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: Inter, system-ui, sans-serif;
  -webkit-font-smoothing: antialiased;
}

/* Navigation */
.nav {
  position: sticky;
  top: 0;
  background: rgba(250, 250, 248, 0.7);
  backdrop-filter: saturate(180%) blur(16px);
  border-bottom: 1px solid rgba(0, 0, 0, 0.06);
  z-index: 10;
}

.nav-inner {
  max-width: 1200px;
  margin: 0 auto;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 16px 24px;
}

.nav a {
  color: #333;
  text-decoration: none;
  margin-left: 20px;
  font-size: 14px;
}

.brand {
  font-family: 'Playfair Display', serif;
  font-size: 20px;
  letter-spacing: 0.05em;
}

/* Hero */
.hero {
  display: grid;
  grid-template-columns: 1.1fr 0.9fr;
  min-height: 80vh;
  align-items: stretch;
}

.hero-content {
  padding: 12vh 8vw;
}

.hero h1 {
  font-family: 'Playfair Display', serif;
  font-size: 64px;
  line-height: 1.02;
  margin: 0 0 12px;
}

.hero .sub {
  opacity: 0.7;
  font-size: 18px;
  margin-bottom: 24px;
}

.cta {
  display: inline-block;
  background: var(--text);
  color: #fff;
  padding: 14px 22px;
  border-radius: 999px;
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
  transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.cta:hover {
  transform: translateY(-2px);
  box-shadow: 0 12px 28px rgba(0, 0, 0, 0.12);
}

.hero-media {
  background-size: cover;
  background-position: center;
  border-left: 1px solid rgba(0, 0, 0, 0.06);
}

/* Collections grid */
.collections {
  max-width: 1200px;
  margin: 120px auto;
  padding: 0 24px;
}

.collections h2 {
  font-family: 'Playfair Display', serif;
  font-size: 36px;
  margin: 0 0 24px;
}

.grid {
  display: grid;
  gap: 24px;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
}

.card {
  background: #fff;
  border: 1px solid rgba(0, 0, 0, 0.06);
  border-radius: 18px;
  overflow: hidden;
  box-shadow: 0 10px 40px rgba(0, 0, 0, 0.06);
  transform: translateY(0);
  transition: transform 0.35s ease;
}

.card:hover {
  transform: translateY(-6px);
}

.card .img {
  padding-top: 66%;
  background-size: cover;
  background-position: center;
}

.card .info {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 16px 14px;
}

.card .name {
  font-weight: 500;
}

.card .price {
  color: var(--muted);
}

/* Story */
.story .split {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 40px;
  max-width: 1200px;
  margin: 100px auto;
  padding: 0 24px;
  align-items: center;
}

.story .image {
  background-size: cover;
  background-position: center;
  border-radius: 22px;
  height: 560px;
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.08);
}

.story h3 {
  font-family: 'Playfair Display', serif;
  font-size: 34px;
  margin: 0 0 12px;
}

/* Craft */
.craft {
  max-width: 1200px;
  margin: 120px auto;
  padding: 0 24px;
}

.craft h2 {
  font-family: 'Playfair Display', serif;
  font-size: 32px;
  margin: 0 0 18px;
}

.features {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 18px;
}

.feat {
  display: flex;
  gap: 10px;
  align-items: flex-start;
  background: #fff;
  border: 1px solid rgba(0, 0, 0, 0.06);
  border-radius: 14px;
  padding: 16px 18px;
}

.dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--accent);
  margin-top: 9px;
}

/* Lookbook */
.lookbook {
  max-width: 1200px;
  margin: 120px auto;
  padding: 0 24px;
}

.masonry {
  columns: 3;
  column-gap: 16px;
}

.masonry img {
  width: 100%;
  margin: 0 0 16px;
  border-radius: 16px;
  box-shadow: 0 14px 40px rgba(0, 0, 0, 0.08);
}

/* Testimonials */
.testimonials {
  max-width: 900px;
  margin: 120px auto;
  padding: 0 24px;
  display: grid;
  gap: 20px;
}

blockquote {
  font-family: 'Playfair Display', serif;
  font-size: 20px;
  line-height: 1.6;
  margin: 0;
  padding: 0 0 0 16px;
  border-left: 2px solid var(--accent);
  color: #333;
}

/* FAQ */
.faq {
  max-width: 900px;
  margin: 120px auto;
  padding: 0 24px;
  display: grid;
  gap: 10px;
}

details {
  background: #fff;
  border: 1px solid rgba(0, 0, 0, 0.06);
  border-radius: 14px;
  padding: 14px 16px;
}

summary {
  cursor: pointer;
  font-weight: 500;
}

/* Footer */
.footer {
  margin-top: 140px;
  border-top: 1px solid rgba(0, 0, 0, 0.06);
  padding: 40px 0;
  background: rgba(255, 255, 255, 0.7);
  backdrop-filter: blur(10px);
}

.footer .inner {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 24px;
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 20px;
  flex-wrap: wrap;
}

.newsletter input {
  border: 1px solid rgba(0, 0, 0, 0.12);
  border-radius: 999px;
  padding: 12px 16px;
  margin-right: 8px;
}

.newsletter button {
  background: var(--text);
  color: #fff;
  border: none;
  border-radius: 999px;
  padding: 12px 18px;
  cursor: pointer;
}
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_context() -> PageContext {
        PageContext {
            brand: "Nocturne".to_string(),
            hero_title: "The New Collection".to_string(),
            hero_subtitle: "Quietly made".to_string(),
            hero_cta: "Shop".to_string(),
            hero_image: "https://cdn.example/hero.jpg".to_string(),
            products: vec![],
            story_title: "Story".to_string(),
            story_body: "Body".to_string(),
            story_image: "https://cdn.example/story.jpg".to_string(),
            craft_title: "Craft".to_string(),
            craft_points: vec![],
            lookbook_title: "Lookbook".to_string(),
            lookbook_images: vec![],
            testimonials: vec![],
            faqs: vec![],
        }
    }

    #[test]
    fn renders_fixed_nav_anchors() {
        let engine = TemplateEngine::new();

        let html = engine.render_page(&empty_context()).unwrap();

        for anchor in ["#collections", "#story", "#craft", "#lookbook", "#faq"] {
            assert!(html.contains(&format!(r##"href="{}""##, anchor)), "missing {}", anchor);
        }
    }

    #[test]
    fn escapes_html_in_copy_fields() {
        let engine = TemplateEngine::new();
        let mut ctx = empty_context();
        ctx.hero_title = "<script>alert(1)</script>".to_string();

        let html = engine.render_page(&ctx).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn stylesheet_injects_accent_only() {
        let engine = TemplateEngine::new();

        let css = engine.render_stylesheet("#ABCDEF").unwrap();

        assert!(css.contains("--accent: #ABCDEF;"));
        assert!(css.contains("--bg: #FAFAF8;"));
    }
}
