//! Static page content. Every clickable item resolves to one of these tables,
//! so the same literal never has to be repeated at a call site.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectId {
    Crime,
    Farmer,
}

impl ProjectId {
    pub const ALL: [ProjectId; 2] = [ProjectId::Crime, ProjectId::Farmer];

    pub fn slug(self) -> &'static str {
        match self {
            ProjectId::Crime => "crime",
            ProjectId::Farmer => "farmer",
        }
    }

    pub fn project(self) -> &'static Project {
        match self {
            ProjectId::Crime => &CRIME_PROJECT,
            ProjectId::Farmer => &FARMER_PROJECT,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
    pub demo_href: &'static str,
}

static CRIME_PROJECT: Project = Project {
    id: ProjectId::Crime,
    title: "Smart Crime Prediction & Heatmap Platform",
    summary: "This project is a complete web-based platform to report, classify, and predict crime incidents using machine learning and geospatial visualization. It includes interactive heatmaps, hotspot predictions, and user-friendly reporting.",
    highlights: &[
        "Built with ReactJS, Node.js, Express, MongoDB, and Python.",
        "Geospatial visualization and hotspot prediction.",
        "Interactive crime reporting system.",
    ],
    demo_href: "#",
};

static FARMER_PROJECT: Project = Project {
    id: ProjectId::Farmer,
    title: "Direct Market Access App for Farmers",
    summary: "This platform provides farmers with real-time market prices and weather updates, enabling direct interaction between farmers and buyers, removing middlemen and increasing income.",
    highlights: &[
        "MERN stack application.",
        "Integrated weather and market price APIs.",
        "Responsive and user-friendly interface.",
    ],
    demo_href: "#",
};

/// Identifies one achievement, certification or qualification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DetailId {
    HackathonFinalist,
    CrimeReportingSystem,
    Internship,
    FullStackCourse,
    Rackathon2024,
    Rackathon2025,
    BTech,
    Hsc,
    Ssc,
}

/// `cert_link` values are placeholder folder URLs until the real certificate
/// folders are shared; only the detail view shows them.
#[derive(Debug, PartialEq, Eq)]
pub struct DetailRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub cert_link: Option<&'static str>,
}

impl DetailId {
    pub const ACHIEVEMENTS: [DetailId; 3] = [
        DetailId::HackathonFinalist,
        DetailId::CrimeReportingSystem,
        DetailId::Internship,
    ];

    pub const CERTIFICATIONS: [DetailId; 3] = [
        DetailId::FullStackCourse,
        DetailId::Rackathon2024,
        DetailId::Rackathon2025,
    ];

    pub const QUALIFICATIONS: [DetailId; 3] = [DetailId::BTech, DetailId::Hsc, DetailId::Ssc];

    pub fn record(self) -> &'static DetailRecord {
        match self {
            DetailId::HackathonFinalist => &DetailRecord {
                title: "🏆 Smart India Hackathon Finalist 2025",
                description: "Reached the national finals of Smart India Hackathon 2025 with a team solution built end to end during the event.",
                cert_link: Some("https://drive.google.com/drive/folders/sih-2025-finalist"),
            },
            DetailId::CrimeReportingSystem => &DetailRecord {
                title: "🚀 Built automated crime reporting system",
                description: "Designed and shipped an automated crime reporting pipeline that classifies incoming reports and feeds the hotspot heatmap.",
                cert_link: None,
            },
            DetailId::Internship => &DetailRecord {
                title: "💼 Internship at XYZ Company",
                description: "Worked as a full stack intern, building responsive front-end screens and REST endpoints for internal tools.",
                cert_link: Some("https://drive.google.com/drive/folders/xyz-internship"),
            },
            DetailId::FullStackCourse => &DetailRecord {
                title: "Full Stack Web Development - Apna College",
                description: "Completed the full stack web development programme covering HTML, CSS, JavaScript, React, Node.js, Express and MongoDB.",
                cert_link: Some("https://drive.google.com/drive/folders/apna-college-full-stack"),
            },
            DetailId::Rackathon2024 => &DetailRecord {
                title: "Rackathon 2024 Participation - GH Raisoni",
                description: "Participated in the 2024 edition of Rackathon at GH Raisoni, prototyping a web application within the event window.",
                cert_link: Some("https://drive.google.com/drive/folders/rackathon-2024"),
            },
            DetailId::Rackathon2025 => &DetailRecord {
                title: "Rackathon 2025 Participation - GH Raisoni",
                description: "Returned for Rackathon 2025 at GH Raisoni and presented an improved crime prediction prototype.",
                cert_link: Some("https://drive.google.com/drive/folders/rackathon-2025"),
            },
            DetailId::BTech => &DetailRecord {
                title: "B.Tech in Computer Science - GH Raisoni University, Amravati",
                description: "Undergraduate degree in Computer Science, currently holding an 8.8 CGPA.",
                cert_link: None,
            },
            DetailId::Hsc => &DetailRecord {
                title: "HSC - S.S.R.L Lalwani Junior College",
                description: "Higher Secondary Certificate (science stream), scored 72.33%.",
                cert_link: None,
            },
            DetailId::Ssc => &DetailRecord {
                title: "SSC - S.S.R.L Lalwani High School",
                description: "Secondary School Certificate, scored 88.60%.",
                cert_link: None,
            },
        }
    }

    /// Score shown next to a qualification row.
    pub fn score(self) -> Option<&'static str> {
        match self {
            DetailId::BTech => Some("8.8 CGPA"),
            DetailId::Hsc => Some("72.33%"),
            DetailId::Ssc => Some("88.60%"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_details() -> impl Iterator<Item = DetailId> {
        DetailId::ACHIEVEMENTS
            .into_iter()
            .chain(DetailId::CERTIFICATIONS)
            .chain(DetailId::QUALIFICATIONS)
    }

    #[test]
    fn project_table_is_keyed_by_its_own_id() {
        for id in ProjectId::ALL {
            assert_eq!(id.project().id, id);
            assert!(!id.project().highlights.is_empty());
        }
        assert_eq!(ProjectId::Crime.slug(), "crime");
        assert_eq!(ProjectId::Farmer.slug(), "farmer");
    }

    #[test]
    fn every_detail_has_a_distinct_title() {
        let titles: Vec<_> = all_details().map(|id| id.record().title).collect();
        assert_eq!(titles.len(), 9);
        for (i, t) in titles.iter().enumerate() {
            assert!(!titles[i + 1..].contains(t), "duplicate title {t}");
        }
    }

    #[test]
    fn certifications_link_to_their_folder() {
        for id in DetailId::CERTIFICATIONS {
            let link = id.record().cert_link.expect("certification has a link");
            assert!(link.starts_with("https://"));
        }
    }

    #[test]
    fn only_qualifications_carry_a_score() {
        for id in all_details() {
            assert_eq!(
                id.score().is_some(),
                DetailId::QUALIFICATIONS.contains(&id),
                "{id:?}"
            );
        }
        assert_eq!(DetailId::BTech.score(), Some("8.8 CGPA"));
    }
}
