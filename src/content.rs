//! Static copy for the site sections.

use crate::state::projects::ProjectCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub deliverables: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub category: ProjectCategory,
    pub year: u16,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const TAGLINE: &str = "Identity, web and motion for teams who care how things feel.";

pub const SERVICES: &[Service] = &[
    Service {
        title: "Brand identity",
        summary: "Names, marks and systems that hold up from favicon to billboard.",
        deliverables: &["Logo suite", "Type and color system", "Brand guidelines"],
    },
    Service {
        title: "Web design",
        summary: "Fast, considered marketing sites built with the content first.",
        deliverables: &["Site architecture", "Responsive design", "Front-end build"],
    },
    Service {
        title: "Motion",
        summary: "Interface and brand animation that explains rather than decorates.",
        deliverables: &["Logo animation", "Product walkthroughs", "Social cutdowns"],
    },
    Service {
        title: "Print",
        summary: "Editorial and packaging work with an eye on paper and finish.",
        deliverables: &["Editorial layout", "Packaging", "Print production"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "harbor-coffee",
        title: "Harbor Coffee",
        client: "Harbor Roasting Co.",
        category: ProjectCategory::Branding,
        year: 2024,
        summary: "A tidal wordmark and a packaging system across twelve single origins.",
    },
    Project {
        slug: "lumen-health",
        title: "Lumen Health",
        client: "Lumen",
        category: ProjectCategory::Web,
        year: 2024,
        summary: "A calmer patient portal and marketing site for a telehealth startup.",
    },
    Project {
        slug: "orbit-launch",
        title: "Orbit Launch Film",
        client: "Orbit Analytics",
        category: ProjectCategory::Motion,
        year: 2023,
        summary: "A ninety-second product film built entirely from interface motion.",
    },
    Project {
        slug: "field-notes",
        title: "Field Notes Quarterly",
        client: "Field Notes Press",
        category: ProjectCategory::Print,
        year: 2023,
        summary: "Masthead, grid and cover series for an independent nature journal.",
    },
    Project {
        slug: "kin-bank",
        title: "Kin",
        client: "Kin Credit Union",
        category: ProjectCategory::Branding,
        year: 2022,
        summary: "A warmer identity for a member-owned bank, rolled out across 40 branches.",
    },
    Project {
        slug: "atlas-docs",
        title: "Atlas Docs",
        client: "Atlas Cloud",
        category: ProjectCategory::Web,
        year: 2022,
        summary: "Documentation redesign with search-first navigation.",
    },
];

pub const ABOUT: &str = "We are a five-person studio working across identity, web and motion. \
    Small on purpose: the people you meet on the first call are the people doing the work.";

pub const STATS: &[Stat] = &[
    Stat { value: "11", label: "years in practice" },
    Stat { value: "140+", label: "projects shipped" },
    Stat { value: "5", label: "people, no handoffs" },
];

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "How long does a typical project take?",
        answer: "Identity work runs six to ten weeks. Websites usually take eight to fourteen, depending on content.",
    },
    FaqItem {
        question: "Do you work with early-stage companies?",
        answer: "Yes. We have a fixed-scope starter package for teams before their first raise.",
    },
    FaqItem {
        question: "Can you build what you design?",
        answer: "We build most marketing sites in-house and partner with your engineers on product work.",
    },
    FaqItem {
        question: "What does it cost?",
        answer: "Most engagements land between 15k and 80k. Share a budget range in the form and we will be straight about fit.",
    },
];
