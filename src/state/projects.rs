//! Project grid filter tabs.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::content::Project;

/// Discipline a project belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Branding,
    Web,
    Motion,
    Print,
}

impl ProjectCategory {
    pub const ALL: [Self; 4] = [Self::Branding, Self::Web, Self::Motion, Self::Print];

    pub fn label(self) -> &'static str {
        match self {
            Self::Branding => "Branding",
            Self::Web => "Web",
            Self::Motion => "Motion",
            Self::Print => "Print",
        }
    }
}

/// Active tab in the projects section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    /// Tabs in display order: `All` first, then each category.
    pub fn tabs() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(ProjectCategory::ALL.into_iter().map(Self::Category))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Category(c) => c.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => project.category == c,
        }
    }
}

/// Projects shown under `filter`, in source order.
pub fn visible_projects(projects: &[Project], filter: ProjectFilter) -> Vec<Project> {
    projects.iter().filter(|p| filter.matches(p)).copied().collect()
}
