//! Academic CV section — education, experience, and academic service.

use noctivis_content::{Education, Experience, EDUCATION, EXPERIENCE};

use crate::nav::Section;

pub fn render_cv() -> String {
    let education: String = EDUCATION.iter().map(render_education).collect();
    let experience: String = EXPERIENCE.iter().map(render_experience).collect();

    format!(
        r##"<section id="{}" class="section">
    <div class="section-inner">
        <div class="cv-header">
            <h2 class="section-title">Academic CV</h2>
            <a href="#" class="btn btn-dark">Download Full PDF</a>
        </div>
        <div class="cv-grid">
            <div class="cv-column">
                <h3 class="cv-heading">Education</h3>
                {}
            </div>
            <div class="cv-column wide">
                <h3 class="cv-heading">Professional Experience</h3>
                <div class="timeline">
                    {}
                </div>
                <div class="service">
                    <h3 class="cv-heading">Academic Service</h3>
                    <div class="service-grid">
                        <div>
                            <p class="service-role">Reviewer</p>
                            <ul>
                                <li>CVPR (2022-2024)</li>
                                <li>ICCV (2023)</li>
                                <li>ECCV (2024)</li>
                                <li>IEEE TPAMI</li>
                            </ul>
                        </div>
                        <div>
                            <p class="service-role">Awards</p>
                            <ul>
                                <li>Outstanding Reviewer, CVPR 2023</li>
                                <li>Best Paper Nominee, ECCV 2022</li>
                                <li>GCP Credit Grant for Research ($5,000)</li>
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    </div>
</section>"##,
        Section::Cv.id(),
        education,
        experience
    )
}

fn render_education(e: &Education) -> String {
    let details = match e.details {
        Some(d) => format!(r#"<p class="edu-details">{}</p>"#, d),
        None => String::new(),
    };
    format!(
        r#"<div class="edu-entry">
    <p class="edu-degree">{}</p>
    <p class="edu-institution">{}</p>
    <p class="edu-year">{}</p>
    {}
</div>"#,
        e.degree, e.institution, e.year, details
    )
}

fn render_experience(e: &Experience) -> String {
    format!(
        r#"<div class="timeline-item">
    <div class="timeline-head">
        <p class="timeline-role">{}</p>
        <p class="timeline-period">{}</p>
    </div>
    <p class="timeline-org">{}</p>
    <p class="timeline-description">{}</p>
</div>"#,
        e.role, e.period, e.organization, e.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_lists_all_entries() {
        let html = render_cv();
        for e in EDUCATION {
            assert!(html.contains(e.degree));
            assert!(html.contains(e.institution));
        }
        for e in EXPERIENCE {
            assert!(html.contains(e.role));
            assert!(html.contains(e.organization));
        }
    }

    #[test]
    fn test_education_without_details_omits_paragraph() {
        let e = Education {
            degree: "B.Sc.",
            institution: "HUST",
            year: "2014 — 2018",
            details: None,
        };
        assert!(!render_education(&e).contains("edu-details"));
    }
}
