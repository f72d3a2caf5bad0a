//! Publications section — list rendering and the JSON read endpoint.

use axum::Json;
use noctivis_content::{Publication, PROFILE, PUBLICATIONS};

use crate::nav::Section;

pub async fn api_publications() -> Json<&'static [Publication]> {
    Json(PUBLICATIONS)
}

/// One card per catalog entry, in stored order.
pub fn render_publications() -> String {
    let cards: String = PUBLICATIONS.iter().map(render_card).collect();

    format!(
        r#"<section id="{}" class="section">
    <div class="section-inner">
        <h2 class="section-title">Selected Publications</h2>
        <div class="pub-list">
            {}
        </div>
        <div class="pub-outro">
            <p>Peer-reviewed research is the core of my academic identity.</p>
            <a href="{}" class="text-link">View full list on Google Scholar &rarr;</a>
        </div>
    </div>
</section>"#,
        Section::Publications.id(),
        cards,
        PROFILE.scholar_url
    )
}

fn render_card(p: &Publication) -> String {
    let card_class = if p.highlight { "pub-card highlight" } else { "pub-card" };
    let badge = if p.highlight {
        r#"<span class="badge-highlight">Highlight</span>"#
    } else {
        ""
    };

    // Catalog author order, with the subject's own name emphasized.
    let authors: String = p
        .authors
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let sep = if i + 1 < p.authors.len() { ", " } else { "" };
            if *a == PROFILE.name {
                format!(r#"<span class="author-self">{}</span>{}"#, a, sep)
            } else {
                format!("{}{}", a, sep)
            }
        })
        .collect();

    let mut links = String::new();
    if let Some(pdf) = p.links.pdf {
        links.push_str(&format!(r#"<a href="{}" class="link-btn">PDF</a>"#, pdf));
    }
    if let Some(code) = p.links.code {
        links.push_str(&format!(r#"<a href="{}" class="link-btn">Code</a>"#, code));
    }
    if let Some(project) = p.links.project {
        links.push_str(&format!(r#"<a href="{}" class="link-btn">Web</a>"#, project));
    }

    format!(
        r#"<article class="{}">
    <div class="pub-main">
        <div class="pub-meta">
            {}<span class="pub-year">{}</span>
        </div>
        <h3 class="pub-title">{}</h3>
        <p class="pub-authors">{}</p>
        <p class="pub-venue">{}</p>
    </div>
    <div class="pub-links">
        {}
    </div>
</article>"#,
        card_class, badge, p.year, p.title, authors, p.venue, links
    )
}
