//! The content catalog itself.
//!
//! Entries are ordered the way they appear on the page; renderers and the
//! assistant prompt builder must preserve this order.

use crate::types::{Education, Experience, Profile, Project, Publication, PublicationLinks};

pub const PROFILE: Profile = Profile {
    name: "Nguyen A. T.",
    short_name: "Dr. Nguyen",
    title: "PhD in Computer Science / Machine Learning",
    specializations: &["Low-Light Computer Vision", "Robust Perception"],
    tagline: "Dedicated to bridging the gap between theoretical vision research and real-world deployment.",
    email: "contact@research.edu",
    scholar_url: "#",
    github_url: "#",
};

pub const PUBLICATIONS: &[Publication] = &[
    Publication {
        id: "1",
        title: "Robust Machine Perception under Adverse Visual Conditions: A Unified Framework",
        authors: &["Nguyen A. T.", "Smith J.", "Wang L."],
        venue: "IEEE Conference on Computer Vision and Pattern Recognition (CVPR)",
        year: 2024,
        links: PublicationLinks { pdf: Some("#"), code: Some("#"), project: Some("#") },
        highlight: true,
    },
    Publication {
        id: "2",
        title: "Frequency-Domain Decomposition for Real-Time Low-Light Image Enhancement",
        authors: &["Nguyen A. T.", "Doe R."],
        venue: "International Conference on Computer Vision (ICCV)",
        year: 2023,
        links: PublicationLinks { pdf: Some("#"), code: Some("#"), project: None },
        highlight: true,
    },
    Publication {
        id: "3",
        title: "Self-Supervised Illumination-Texture Decomposition in Extreme Environments",
        authors: &["Nguyen A. T.", "Garcia M.", "Chen X."],
        venue: "European Conference on Computer Vision (ECCV)",
        year: 2022,
        links: PublicationLinks { pdf: Some("#"), code: None, project: Some("#") },
        highlight: false,
    },
    Publication {
        id: "4",
        title: "Deep Learning for Medical Imaging: A Survey on Robustness",
        authors: &["Nguyen A. T.", "Wilson P."],
        venue: "Journal of Machine Learning Research (JMLR)",
        year: 2021,
        links: PublicationLinks { pdf: Some("#"), code: None, project: None },
        highlight: false,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "p1",
        title: "Low-Light Object Detection",
        description: "Developing a robust detection system that maintains high accuracy in near-zero lux environments.",
        problem: "Standard object detectors fail significantly when illumination drops, leading to critical failures in autonomous systems.",
        method: "We propose an illumination-invariant feature extractor using a frequency-gated convolutional neural network.",
        contributions: &[
            "New synthetic-to-real domain adaptation technique.",
            "A novel dataset of 10,000 annotated low-light video frames.",
            "SOTA performance on DarkFace benchmark.",
        ],
        image_url: "https://picsum.photos/seed/research1/800/600",
        github_url: Some("#"),
    },
    Project {
        id: "p2",
        title: "Real-time Vision for ADAS",
        description: "Optimization of heavy vision transformers for edge devices in automotive applications.",
        problem: "Transformers provide excellent accuracy but are often too computationally expensive for real-time inference on car CPUs.",
        method: "Implementation of a dynamic pruning strategy based on attention-head saliency.",
        contributions: &[
            "30% reduction in latency without accuracy loss.",
            "Deployment-ready code for NVIDIA Orin platforms.",
        ],
        image_url: "https://picsum.photos/seed/research2/800/600",
        github_url: Some("#"),
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Ph.D. in Computer Science",
        institution: "Stanford University",
        year: "2020 — Present",
        details: Some("Research focus: Computer Vision and Robust Deep Learning."),
    },
    Education {
        degree: "M.Sc. in Machine Learning",
        institution: "University of Oxford",
        year: "2018 — 2020",
        details: Some("Distinction. Thesis on Self-Supervised Learning."),
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Research Intern",
        organization: "Google DeepMind",
        period: "Summer 2023",
        description: "Worked on efficient video generation models and latent diffusion techniques.",
    },
    Experience {
        role: "Graduate Teaching Assistant",
        organization: "Stanford University",
        period: "2021 — 2022",
        description: "CS231n: Convolutional Neural Networks for Visual Recognition.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_publication_ids_are_unique() {
        let ids: HashSet<_> = PUBLICATIONS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PUBLICATIONS.len());
    }

    #[test]
    fn test_publications_keep_stored_order() {
        // Renderers and the prompt builder rely on catalog order, newest first.
        let years: Vec<u16> = PUBLICATIONS.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2024, 2023, 2022, 2021]);
    }

    #[test]
    fn test_every_publication_has_authors() {
        for p in PUBLICATIONS {
            assert!(!p.authors.is_empty(), "publication {} has no authors", p.id);
            assert!(p.authors.contains(&PROFILE.name));
        }
    }

    #[test]
    fn test_every_project_lists_contributions() {
        for p in PROJECTS {
            assert!(!p.contributions.is_empty(), "project {} has no contributions", p.id);
        }
    }

    #[test]
    fn test_profile_names_two_specializations() {
        assert_eq!(PROFILE.specializations.len(), 2);
    }

    #[test]
    fn test_links_skip_absent_fields_in_json() {
        let json = serde_json::to_value(PUBLICATIONS[3]).unwrap();
        assert_eq!(json["links"]["pdf"], "#");
        assert!(json["links"].get("code").is_none());
    }
}
