use std::collections::HashSet;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Achievements,
    Contact,
}

impl Anchor {
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Experience => "experience",
            Anchor::Projects => "projects",
            Anchor::Skills => "skills",
            Anchor::Achievements => "achievements",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Every glyph the page draws. Resolved to SVG paths by `ui::IconGlyph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Home,
    User,
    Briefcase,
    Folder,
    Wrench,
    Award,
    Mail,
    Sun,
    Moon,
    Github,
    ExternalLink,
    Copy,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub anchor: Anchor,
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub key: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub stack: &'static [&'static str],
    pub image: &'static str,
    pub github_url: &'static str,
    pub demo_url: &'static str,
    pub details: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineSide {
    Right,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub organisation: &'static str,
    pub summary: &'static str,
    pub side: TimelineSide,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Error, PartialEq)]
pub enum ContentError {
    #[error("duplicate project key: {0}")]
    DuplicateProjectKey(String),
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { anchor: Anchor::Home, label: "Home", icon: Icon::Home },
    NavLink { anchor: Anchor::About, label: "About", icon: Icon::User },
    NavLink { anchor: Anchor::Experience, label: "Experience", icon: Icon::Briefcase },
    NavLink { anchor: Anchor::Projects, label: "Projects", icon: Icon::Folder },
    NavLink { anchor: Anchor::Skills, label: "Skills", icon: Icon::Wrench },
    NavLink { anchor: Anchor::Achievements, label: "Achievements", icon: Icon::Award },
    NavLink { anchor: Anchor::Contact, label: "Contact", icon: Icon::Mail },
];

const GITHUB_PROFILE: &str = "https://github.com/atharva-shinde";

const PROJECTS: &[Project] = &[
    Project {
        key: "safecool",
        title: "SafeCool",
        summary: "Reinforcement Learning for Data Center Energy Optimization.",
        stack: &["Python", "TensorFlow", "RL"],
        image: "/images/safecool.svg",
        github_url: GITHUB_PROFILE,
        demo_url: "#",
        details: "SafeCool leverages RL to minimize cooling energy while maintaining thermal safety margins in data centers. Integrates sensor feedback loops and simulation-trained policies.",
    },
    Project {
        key: "emotipal",
        title: "EmotiPal",
        summary: "AI Wellness Companion (Emotion + Music Recommendation).",
        stack: &["Python", "OpenCV", "TensorFlow"],
        image: "/images/emotipal.svg",
        github_url: GITHUB_PROFILE,
        demo_url: "#",
        details: "EmotiPal analyzes facial cues and audio to infer sentiment, recommending personalized playlists to improve mood over time.",
    },
    Project {
        key: "partycam",
        title: "PartyCam Web",
        summary: "QR-based Shared Photo Booth App.",
        stack: &["React", "Node", "MongoDB"],
        image: "/images/partycam.svg",
        github_url: GITHUB_PROFILE,
        demo_url: "#",
        details: "PartyCam enables guests to scan a QR and upload pictures to a shared album in real-time with moderation and auto-collage generation.",
    },
    Project {
        key: "gitnova",
        title: "GitNova",
        summary: "GitHub Repository Trends Dashboard.",
        stack: &["Next.js", "Tailwind", "Charting"],
        image: "/images/gitnova.svg",
        github_url: GITHUB_PROFILE,
        demo_url: "#",
        details: "GitNova visualizes star growth, issues velocity, and contributor activity to identify promising repositories and trends.",
    },
];

const SKILLS: &[SkillGroup] = &[
    SkillGroup { category: "Frontend", skills: &["HTML", "CSS", "JavaScript", "React.js", "Tailwind CSS"] },
    SkillGroup { category: "Backend", skills: &["Node.js", "Express.js"] },
    SkillGroup { category: "Database", skills: &["MySQL", "MongoDB", "PostgreSQL"] },
    SkillGroup { category: "AI/ML", skills: &["Python", "TensorFlow", "OpenCV"] },
    SkillGroup { category: "Tools", skills: &["Power BI", "Git", "VS Code"] },
];

const ACHIEVEMENTS: &[&str] = &[
    "Infosys Certified: Basics of Python",
    "Power BI Certification",
    "IEEE Member & T&P Team Head",
];

const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Web Developer & Data Scientist Intern",
        organisation: "LGPS Hybrid Energy Pvt. Ltd.",
        summary: "Delivered data pipelines and web modules to support hybrid energy analytics.",
        side: TimelineSide::Right,
    },
    ExperienceEntry {
        title: "B.Tech CSE (2023–2026)",
        organisation: "S.B. Jain Institute of Technology, Management & Research",
        summary: "Focused on AI, data analytics, and full-stack engineering.",
        side: TimelineSide::Left,
    },
];

pub const ABOUT: &str = "B.Tech Computer Science student (2023–2026) at S.B. Jain Institute of Technology, Management & Research. Passionate about AI-driven innovation, data analytics, and full-stack web solutions. Leadership experience with IEEE and T&P teams; hands-on internships and a strong learning journey.";

pub const HIGHLIGHTS: &[&str] = &[
    "AI-based projects: SafeCool, EmotiPal, GitNova",
    "Leadership: IEEE Member & T&P Team Head",
    "Internship: Web Developer & Data Scientist Intern at LGPS Hybrid Energy Pvt. Ltd.",
    "Continuous learner: AI, Data, Full-Stack",
];

pub const PROFILE_LINKS: &[ProfileLink] = &[
    ProfileLink { label: "LinkedIn", url: "https://www.linkedin.com/in/atharva-shinde-7369b628a" },
    ProfileLink { label: "GitHub", url: GITHUB_PROFILE },
    ProfileLink { label: "Framer", url: "https://portfolioatharva.framer.website/" },
];

/// Read-only view over everything the page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct Registry {
    projects: Vec<Project>,
    skills: Vec<SkillGroup>,
    achievements: Vec<&'static str>,
    experience: Vec<ExperienceEntry>,
}

impl Registry {
    pub fn new(
        projects: Vec<Project>,
        skills: Vec<SkillGroup>,
        achievements: Vec<&'static str>,
        experience: Vec<ExperienceEntry>,
    ) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.key) {
                return Err(ContentError::DuplicateProjectKey(project.key.to_string()));
            }
        }
        Ok(Self {
            projects,
            skills,
            achievements,
            experience,
        })
    }

    pub fn builtin() -> Result<Self, ContentError> {
        Self::new(
            PROJECTS.to_vec(),
            SKILLS.to_vec(),
            ACHIEVEMENTS.to_vec(),
            EXPERIENCE.to_vec(),
        )
    }

    /// Builtin content, or an empty project list if the builtin data is broken.
    pub fn load() -> Self {
        Self::new_or_without_projects(
            PROJECTS.to_vec(),
            SKILLS.to_vec(),
            ACHIEVEMENTS.to_vec(),
            EXPERIENCE.to_vec(),
        )
    }

    fn new_or_without_projects(
        projects: Vec<Project>,
        skills: Vec<SkillGroup>,
        achievements: Vec<&'static str>,
        experience: Vec<ExperienceEntry>,
    ) -> Self {
        match Self::new(projects, skills.clone(), achievements.clone(), experience.clone()) {
            Ok(registry) => registry,
            Err(err) => {
                tracing::error!("content registry rejected: {err}");
                Self {
                    projects: Vec::new(),
                    skills,
                    achievements,
                    experience,
                }
            }
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, key: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.key == key)
    }

    pub fn skills(&self) -> &[SkillGroup] {
        &self.skills
    }

    pub fn achievements(&self) -> &[&'static str] {
        &self.achievements
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.experience
    }
}
