//! The portfolio page — shell, hero, and research-focus sections, composed
//! with the other section renderers into the single served page.

use axum::{extract::State, response::Html};
use noctivis_content::PROFILE;

use crate::handlers::{assistant, cv, projects, publications};
use crate::nav::{NavState, Section, HEADER_HEIGHT};
use crate::state::SharedState;

pub async fn index(State(state): State<SharedState>) -> Html<String> {
    let nav = NavState::new();
    Html(render_page(&nav, state.assistant_configured()))
}

/// Navigation bar, rendered from the section table in nav order.
fn nav_html(nav: &NavState) -> String {
    let links: String = Section::ALL
        .iter()
        .map(|s| {
            let class = if *s == nav.active() { "nav-link active" } else { "nav-link" };
            format!(
                r#"<button class="{}" data-section="{}">{}</button>"#,
                class,
                s.id(),
                s.label()
            )
        })
        .collect();

    format!(
        r#"<nav class="site-nav">
    <div class="nav-inner">
        <span class="nav-brand" data-section="home">{}</span>
        <div class="nav-links">
            {}
        </div>
    </div>
</nav>"#,
        PROFILE.short_name, links
    )
}

fn render_hero() -> String {
    format!(
        r#"<section id="{}" class="section hero">
    <div class="hero-inner">
        <div class="hero-portrait">
            <img src="https://picsum.photos/seed/researcher/400/400" alt="Researcher Portrait">
        </div>
        <div class="hero-text">
            <h1 class="hero-name">{}</h1>
            <p class="hero-title">{}</p>
            <p class="hero-tagline">
                Specializing in <strong>{}</strong> and <strong>{}</strong>.
                {}
            </p>
            <div class="hero-actions">
                <a href="mailto:{}" class="btn btn-dark">Email Me</a>
                <a href="{}" class="btn btn-outline">Google Scholar</a>
                <a href="{}" class="btn btn-outline">GitHub</a>
            </div>
        </div>
    </div>
</section>"#,
        Section::Home.id(),
        PROFILE.name,
        PROFILE.title,
        PROFILE.specializations[0],
        PROFILE.specializations[1],
        PROFILE.tagline,
        PROFILE.email,
        PROFILE.scholar_url,
        PROFILE.github_url,
    )
}

fn render_research() -> String {
    let tags: String = ["Computer Vision", "Deep Learning", "Image Restoration", "Robustness", "Edge AI"]
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, t))
        .collect();

    format!(
        r#"<section id="{}" class="section section-alt">
    <div class="section-inner">
        <h2 class="section-title">Research Focus</h2>
        <div class="research-grid">
            <div>
                <blockquote class="research-quote">
                    "My research focuses on robust machine perception under adverse visual conditions,
                    aiming to ensure AI reliability where standard models fail."
                </blockquote>
                <p class="prose">
                    As visual perception systems move from controlled environments to the wild
                    (autonomous driving, robotics, surveillance), they encounter "adverse" factors:
                    extreme low-light, fog, rain, and glare. Most current SOTA models suffer from
                    significant performance drops in these scenarios.
                </p>
            </div>
            <div>
                <p class="prose">
                    I employ learning-based frameworks combined with physical illumination priors to
                    build models that are not only accurate but also explainable. By leveraging
                    frequency-domain analysis and self-supervised domain adaptation, we reduce
                    dependence on expensive, manually-labeled adverse-environment data.
                </p>
                <div class="tag-list">
                    {}
                </div>
            </div>
        </div>
    </div>
</section>"#,
        Section::Research.id(),
        tags
    )
}

fn render_footer() -> String {
    let platforms: String = ["LinkedIn", "GitHub", "Twitter", "Google Scholar"]
        .iter()
        .map(|p| format!(r##"<a href="#" class="footer-link">{}</a>"##, p))
        .collect();

    format!(
        r#"<footer class="site-footer">
    <div class="footer-inner">
        <div>
            <h2 class="footer-name">{}</h2>
            <p>Scientist. Researcher. Computer Vision Specialist.</p>
        </div>
        <div class="footer-links">
            {}
        </div>
        <div class="footer-copy">&copy; 2026 {}</div>
    </div>
</footer>"#,
        PROFILE.short_name, platforms, PROFILE.short_name
    )
}

fn render_page(nav: &NavState, assistant_configured: bool) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} — {}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body data-header-offset="{}">
{}
<main>
{}
{}
{}
{}
{}
{}
</main>
{}
<script src="/static/js/main.js"></script>
</body>
</html>"#,
        PROFILE.name,
        PROFILE.title,
        HEADER_HEIGHT,
        nav_html(nav),
        render_hero(),
        render_research(),
        publications::render_publications(),
        projects::render_projects(),
        assistant::render_widget(assistant_configured),
        cv::render_cv(),
        render_footer(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_contains_every_section_anchor() {
        let html = render_page(&NavState::new(), true);
        for section in Section::ALL {
            assert!(
                html.contains(&format!(r#"id="{}""#, section.id())),
                "page is missing section anchor: {}",
                section.id()
            );
        }
    }

    #[test]
    fn test_page_embeds_header_offset_for_client_scroll() {
        let html = render_page(&NavState::new(), true);
        assert!(html.contains(r#"data-header-offset="80""#));
    }

    #[test]
    fn test_home_is_active_on_initial_render() {
        let html = nav_html(&NavState::new());
        assert!(html.contains(r#"class="nav-link active" data-section="home""#));
        assert_eq!(html.matches("nav-link active").count(), 1);
    }
}
