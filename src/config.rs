use crate::content::Section;

const CLASSIC_SECTIONS: &[Section] = &[
    Section { id: "about", label: "About" },
    Section { id: "projects", label: "Projects" },
    Section { id: "achievements", label: "Achievements" },
    Section { id: "certifications", label: "Certifications" },
    Section { id: "qualification", label: "Qualification" },
    Section { id: "resume", label: "Resume" },
];

const EXTENDED_SECTIONS: &[Section] = &[
    Section { id: "about", label: "About" },
    Section { id: "projects", label: "Projects" },
    Section { id: "achievements", label: "Achievements" },
    Section { id: "certifications", label: "Certifications" },
    Section { id: "qualification", label: "Qualification" },
    Section { id: "resume", label: "Resume" },
    Section { id: "contact", label: "Contact" },
];

const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/portfolio-contact";

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileLinks {
    pub linkedin: &'static str,
    pub github: &'static str,
    pub email: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactConfig {
    /// Third-party form handler the contact form posts to.
    pub endpoint: &'static str,
}

/// Everything that differs between the two page variants.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub owner_name: &'static str,
    pub tagline: &'static str,
    pub profile_image: &'static str,
    pub links: ProfileLinks,
    pub resume_href: &'static str,
    pub sections: &'static [Section],
    /// When set, achievements, certifications and qualifications open their
    /// detail record instead of linking out.
    pub item_details: bool,
    pub contact: Option<ContactConfig>,
}

impl SiteConfig {
    pub fn classic() -> Self {
        SiteConfig {
            brand: "Prathamesh Portfolio",
            owner_name: "Prathamesh Rajiv Chaudhari",
            tagline: "Dedicated Full Stack Developer and Computer Science student passionate about building responsive, user-friendly web apps with modern tech.",
            profile_image: "/p.jpg",
            links: ProfileLinks {
                linkedin: "https://www.linkedin.com/in/prathamesh-chaudhari-a3b2492a1",
                github: "https://github.com",
                email: "prchaudhari3172@gmail.com",
            },
            resume_href: "/mnt/data/Resume PRC.pdf",
            sections: CLASSIC_SECTIONS,
            item_details: false,
            contact: None,
        }
    }

    pub fn extended() -> Self {
        SiteConfig {
            resume_href: "https://drive.google.com/drive/folders/resume-prc",
            sections: EXTENDED_SECTIONS,
            item_details: true,
            contact: Some(ContactConfig {
                endpoint: form_endpoint(),
            }),
            ..SiteConfig::classic()
        }
    }

    /// Variant picked at build time through the `extended` feature.
    pub fn active() -> Self {
        if cfg!(feature = "extended") {
            SiteConfig::extended()
        } else {
            SiteConfig::classic()
        }
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.links.email)
    }

    /// Anchor id of the section with this id, if the variant renders it.
    pub fn anchor(&self, id: &str) -> Option<&'static str> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.id)
    }
}

fn form_endpoint() -> &'static str {
    option_env!("PORTFOLIO_FORM_ENDPOINT").unwrap_or(DEFAULT_FORM_ENDPOINT)
}
