use folio_types::{ContactField, NamedEntry, Section, SectionContent, TagGroup};

const TITLE: &str = "Ankitha V - DevOps Engineer";

/// Immutable mapping from section to its content.
///
/// Built once at startup; every section in `Section::ALL` has an entry.
#[derive(Debug, Clone)]
pub struct ContentStore {
    title: String,
    entries: Vec<(Section, SectionContent)>,
}

impl ContentStore {
    /// The portfolio content shown by folio
    pub fn portfolio() -> Self {
        let entries = vec![
            (
                Section::About,
                SectionContent::Text(
                    "I am Ankitha V, a DevOps Engineer passionate about automation, CI/CD, and cloud technologies."
                        .to_string(),
                ),
            ),
            (
                Section::Education,
                SectionContent::List(vec![
                    "Bachelor of Technology in Computer Science Engineering, Reva University, 2022"
                        .to_string(),
                    "Diploma in Computer Science Engineering, Government Polytechnic, Mulbagal, 2019"
                        .to_string(),
                ]),
            ),
            (
                Section::Skills,
                SectionContent::GroupedTags(vec![
                    TagGroup::new(
                        "Version Control - Git, GitHub",
                        ["Repositories", "Branching", "Merging", "Pull Requests"],
                    ),
                    TagGroup::new(
                        "Cloud Technologies - AWS",
                        ["IAM", "VPC", "EC2", "S3", "AWS CLI", "CloudWatch"],
                    ),
                    TagGroup::new(
                        "Containerization - Docker",
                        ["Dockerfile", "Docker Compose", "Image Management"],
                    ),
                ]),
            ),
            (
                Section::Projects,
                SectionContent::NamedEntries(vec![
                    NamedEntry::new(
                        "DevOps Workflow Optimization",
                        "CI/CD pipeline with GitHub Actions, ArgoCD, Kubernetes, and Helm.",
                    ),
                    NamedEntry::new(
                        "AWS Cloud Cost Optimization",
                        "Automated Lambda function for managing stale EBS snapshots.",
                    ),
                ]),
            ),
            (
                Section::Experience,
                SectionContent::List(vec![
                    "CGI (Associate Software Engineer): Enhanced Java applications and managed GitLab repositories."
                        .to_string(),
                    "Self-learning (DevOps Projects): Hands-on cloud automation and deployment pipelines."
                        .to_string(),
                ]),
            ),
            (
                Section::Contact,
                SectionContent::NamedEntries(vec![
                    NamedEntry::new(ContactField::Email.key(), "jobsforankithav@gmail.com"),
                    NamedEntry::new(ContactField::Phone.key(), "8971488385"),
                    NamedEntry::new(ContactField::GitHub.key(), "https://github.com/ankithaV"),
                    NamedEntry::new(
                        ContactField::LinkedIn.key(),
                        "https://linkedin.com/in/ankithaV",
                    ),
                ]),
            ),
        ];

        Self {
            title: TITLE.to_string(),
            entries,
        }
    }

    /// Page heading
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sections in store (navigation) order
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.entries.iter().map(|(section, _)| *section)
    }

    pub fn get(&self, section: Section) -> &SectionContent {
        // portfolio() populates every section, in the same order as Section::ALL
        &self.entries[section.index()].1
    }

    pub fn projects(&self) -> &[NamedEntry] {
        match self.get(Section::Projects) {
            SectionContent::NamedEntries(entries) => entries,
            _ => &[],
        }
    }

    /// Description of a project by exact name
    pub fn project(&self, name: &str) -> Option<&str> {
        self.get(Section::Projects).entry(name)
    }

    pub fn contact(&self, field: ContactField) -> Option<&str> {
        self.get(Section::Contact).entry(field.key())
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::portfolio()
    }
}
