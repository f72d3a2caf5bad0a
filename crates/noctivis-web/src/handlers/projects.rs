//! Featured projects section — card grid and the JSON read endpoint.

use axum::Json;
use noctivis_content::{Project, PROJECTS};

use crate::nav::Section;

pub async fn api_projects() -> Json<&'static [Project]> {
    Json(PROJECTS)
}

pub fn render_projects() -> String {
    let cards: String = PROJECTS.iter().map(render_card).collect();

    format!(
        r#"<section id="{}" class="section section-alt">
    <div class="section-inner">
        <h2 class="section-title">Featured Projects</h2>
        <div class="project-grid">
            {}
        </div>
    </div>
</section>"#,
        Section::Projects.id(),
        cards
    )
}

fn render_card(p: &Project) -> String {
    let contributions: String = p
        .contributions
        .iter()
        .map(|c| format!("<li>{}</li>", c))
        .collect();

    let source_link = match p.github_url {
        Some(url) => format!(
            r#"<a href="{}" class="project-link">Documentation &amp; Code &rarr;</a>"#,
            url
        ),
        None => String::new(),
    };

    format!(
        r#"<article class="project-card">
    <img class="project-image" src="{}" alt="{}">
    <div class="project-body">
        <h3 class="project-title">{}</h3>
        <p class="project-description">{}</p>
        <div class="project-detail">
            <span class="label">Methodology</span>
            <p class="project-method">{}</p>
        </div>
        <div class="project-detail">
            <span class="label">Key Contributions</span>
            <ul class="contribution-list">
                {}
            </ul>
        </div>
        {}
    </div>
</article>"#,
        p.image_url, p.title, p.title, p.description, p.method, contributions, source_link
    )
}
