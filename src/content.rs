//! Static page content.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    /// Id of the section element to scroll to.
    pub target: &'static str,
}

pub const NAV_ITEMS: &[NavigationItem] = &[
    NavigationItem {
        label: "Home",
        target: "hero",
    },
    NavigationItem {
        label: "Skills",
        target: "skills",
    },
    NavigationItem {
        label: "Projects",
        target: "projects",
    },
    NavigationItem {
        label: "Experience",
        target: "experience",
    },
    NavigationItem {
        label: "Contact",
        target: "contact",
    },
];

pub const OWNER: &str = "Chirag Poornamath";
pub const FIRST_NAME: &str = "CHIRAG";
pub const LAST_NAME: &str = "POORNAMATH";
pub const GREETING: &str = "Hey, I am";
pub const ROLE_PREFIX: &str = "I am a ";
pub const ROLES: &[&str] = &[
    "web designer.",
    "software developer.",
    "student.",
    "tech enthusiast.",
];

pub const EMAIL: &str = "chiragpoornamath@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/Chirag8405";
pub const GITHUB_HANDLE: &str = "@Chirag8405";
pub const LINKEDIN_URL: &str = "https://linkedin.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub category: &'static str,
    pub year: &'static str,
    pub status: &'static str,
    pub github_url: &'static str,
    pub live_url: &'static str,
}

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Suspendisse lacinia felis pulvinar vulputate pharetra.";

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "LoremIpsum",
        description: LOREM,
        image: "/placeholder.svg",
        tech: &["React", "Node.js", "PostgreSQL", "TailwindCSS", "Chart.js"],
        category: "Sustainability",
        year: "2024",
        status: "🏆 Hackathon Winner",
        github_url: "#",
        live_url: "#",
    },
    Project {
        id: 2,
        title: "Lorem Ipsum",
        description: LOREM,
        image: "/placeholder.svg",
        tech: &["Next.js", "TypeScript", "Socket.io", "Prisma", "PostgreSQL"],
        category: "Social Platform",
        year: "2024",
        status: "🚀 Live Production",
        github_url: "#",
        live_url: "#",
    },
    Project {
        id: 3,
        title: "Lorem Ipsum",
        description: LOREM,
        image: "/placeholder.svg",
        tech: &["SvelteKit", "tRPC", "Prisma", "PostgreSQL", "Docker"],
        category: "Health & Fitness",
        year: "2024",
        status: "⚡ Active Development",
        github_url: "#",
        live_url: "#",
    },
    Project {
        id: 4,
        title: "Lorem Ipsum",
        description: LOREM,
        image: "/placeholder.svg",
        tech: &["Svelte", "MongoDB", "TailwindCSS", "WebRTC", "PWA"],
        category: "Education Tech",
        year: "2024",
        status: "🥇 First Prize",
        github_url: "#",
        live_url: "#",
    },
    Project {
        id: 5,
        title: "Portfolio Website",
        description: "This site: scroll-tracked sections, typewriter effects and an autoplaying project carousel.",
        image: "/placeholder.svg",
        tech: &["Rust", "Leptos", "Axum", "TailwindCSS", "WebAssembly"],
        category: "Portfolio",
        year: "2024",
        status: "✨ Featured",
        github_url: "#",
        live_url: "#",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Languages,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Languages,
        SkillCategory::Tools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Languages => "Languages",
            SkillCategory::Tools => "Tools",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(SkillCategory),
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(&self, skill: &Skill) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => skill.category == *c,
        }
    }

    pub fn filter<'a>(&self, skills: &'a [Skill]) -> Vec<&'a Skill> {
        skills.iter().filter(|s| self.matches(s)).collect()
    }

    /// The filter buttons, in display order.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(SkillCategory::ALL.map(CategoryFilter::Only))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Proficiency {
    Beginner,
    Learning,
    Intermediate,
    Proficient,
}

impl Proficiency {
    pub fn from_level(level: u8) -> Self {
        match level {
            75..=u8::MAX => Proficiency::Proficient,
            60..=74 => Proficiency::Intermediate,
            45..=59 => Proficiency::Learning,
            _ => Proficiency::Beginner,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Learning => "Learning",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Proficient => "Proficient",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// 0..=100
    pub level: u8,
    pub category: SkillCategory,
    pub color: &'static str,
}

impl Skill {
    pub fn proficiency(&self) -> Proficiency {
        Proficiency::from_level(self.level)
    }
}

macro_rules! skill {
    ($name:literal, $level:literal, $cat:ident, $color:literal) => {
        Skill {
            name: $name,
            level: $level,
            category: SkillCategory::$cat,
            color: $color,
        }
    };
}

pub const SKILLS: &[Skill] = &[
    skill!("JavaScript", 80, Frontend, "#F7DF1E"),
    skill!("React.js", 75, Frontend, "#61DAFB"),
    skill!("Next.js", 65, Frontend, "#6B7280"),
    skill!("TailwindCSS", 70, Frontend, "#06B6D4"),
    skill!("TypeScript", 45, Frontend, "#3178C6"),
    skill!("Svelte", 40, Frontend, "#FF3E00"),
    skill!("Framer Motion", 60, Frontend, "#0055FF"),
    skill!("Node.js", 70, Backend, "#339933"),
    skill!("Express.js", 65, Backend, "#6B7280"),
    skill!("MongoDB", 60, Backend, "#47A248"),
    skill!("MySQL", 55, Backend, "#4479A1"),
    skill!("Python", 65, Backend, "#3776AB"),
    skill!("Docker", 50, Backend, "#2496ED"),
    skill!("Java", 60, Languages, "#ED8B00"),
    skill!("C++", 70, Languages, "#00599C"),
    skill!("C", 65, Languages, "#A8B9CC"),
    skill!("Git", 75, Tools, "#F05032"),
    skill!("GitHub", 70, Tools, "#6B7280"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Project,
    Education,
    Milestone,
}

impl TimelineKind {
    pub fn icon(&self) -> &'static str {
        match self {
            TimelineKind::Project => "🚀",
            TimelineKind::Education => "🎓",
            TimelineKind::Milestone => "⭐",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub date: &'static str,
    pub kind: TimelineKind,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub link: Option<&'static str>,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        date: "Dec 2024",
        kind: TimelineKind::Project,
        title: "Portfolio Website",
        description: "Redesigned and rebuilt my portfolio website with modern UI/UX, animations, and improved performance.",
        technologies: &["Rust", "Leptos", "TailwindCSS", "WebAssembly"],
        link: Some("#"),
    },
    TimelineEntry {
        date: "2023",
        kind: TimelineKind::Education,
        title: "Started IT Engineering",
        description: "Began pursuing Bachelor of Technology in Information Technology at Vivekanand Education Society's Institute of Technology, focusing on software development and emerging technologies.",
        technologies: &[],
        link: None,
    },
    TimelineEntry {
        date: "2020",
        kind: TimelineKind::Milestone,
        title: "Programming Journey Begins",
        description: "Started learning programming in 10th grade with Javascript, HTML, and CSS. This marked the beginning of my passion for software development.",
        technologies: &["Java", "HTML", "CSS"],
        link: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_are_unique() {
        let mut targets: Vec<&str> = NAV_ITEMS.iter().map(|n| n.target).collect();
        targets.sort_unstable();
        targets.dedup();
        assert_eq!(targets.len(), NAV_ITEMS.len());
        assert_eq!(NAV_ITEMS[0].target, "hero");
    }

    #[test]
    fn test_proficiency_bands() {
        assert_eq!(Proficiency::from_level(100), Proficiency::Proficient);
        assert_eq!(Proficiency::from_level(75), Proficiency::Proficient);
        assert_eq!(Proficiency::from_level(74), Proficiency::Intermediate);
        assert_eq!(Proficiency::from_level(60), Proficiency::Intermediate);
        assert_eq!(Proficiency::from_level(59), Proficiency::Learning);
        assert_eq!(Proficiency::from_level(45), Proficiency::Learning);
        assert_eq!(Proficiency::from_level(44), Proficiency::Beginner);
        assert_eq!(Proficiency::from_level(0), Proficiency::Beginner);
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(CategoryFilter::All.filter(SKILLS).len(), SKILLS.len());

        let tools = CategoryFilter::Only(SkillCategory::Tools).filter(SKILLS);
        let names: Vec<&str> = tools.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Git", "GitHub"]);

        // every skill lands in exactly one category
        let total: usize = SkillCategory::ALL
            .iter()
            .map(|c| CategoryFilter::Only(*c).filter(SKILLS).len())
            .sum();
        assert_eq!(total, SKILLS.len());
    }

    #[test]
    fn test_filter_options_order() {
        let labels: Vec<&str> = CategoryFilter::options().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "Frontend", "Backend", "Languages", "Tools"]);
    }

    #[test]
    fn test_projects_are_well_formed() {
        assert_eq!(PROJECTS.len(), 5);
        for p in PROJECTS {
            assert!(!p.title.is_empty());
            assert!(!p.tech.is_empty());
        }
    }
}
