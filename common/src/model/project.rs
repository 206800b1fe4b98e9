/// A labelled link to one of several repositories of a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepoLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// How a project exposes its source code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectLinks {
    /// Closed-source work; rendered with a lock badge.
    Private,
    SingleRepo(&'static str),
    MultiRepo(&'static [RepoLink]),
    /// Nothing to show.
    Hidden,
}

/// Label of the link rendered for a project with a single repository.
pub const SINGLE_REPO_LABEL: &str = "GitHub";

impl ProjectLinks {
    /// Every repository link, in display order.
    pub fn repos(&self) -> Vec<RepoLink> {
        match self {
            ProjectLinks::Private | ProjectLinks::Hidden => Vec::new(),
            ProjectLinks::SingleRepo(url) => vec![RepoLink {
                label: SINGLE_REPO_LABEL,
                url,
            }],
            ProjectLinks::MultiRepo(links) => links.to_vec(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    pub links: ProjectLinks,
}
